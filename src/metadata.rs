// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error as TeError;

/// One language as curated in the repository's metadata file.
///
/// The list order in the metadata file is significant and curated externally
/// (it is the tie-break order of the rendered report). It must be preserved
/// exactly; duplicates are kept and no uniqueness check is performed on codes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LanguageDescriptor {
    /// ISO-639-2-like language identifier, also the translation file stem.
    pub code: String,
    pub english_name: String,
    /// Display glyph shown in front of the language name.
    pub emoji_flag: String,
}

#[derive(TeError, Debug)]
pub enum MetadataLoadError {
    #[error("Fail to open metadata file {0:?} because: {1}")]
    OpenFile(PathBuf, #[source] std::io::Error),
    #[error("Fail to parse metadata file {0:?} because: {1}")]
    ParseJson(PathBuf, #[source] serde_json::Error),
}

pub fn load_language_list(metadata_file: &Path) -> Result<Vec<LanguageDescriptor>, MetadataLoadError> {
    let file = File::open(metadata_file)
        .map_err(|e| MetadataLoadError::OpenFile(metadata_file.to_path_buf(), e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| MetadataLoadError::ParseJson(metadata_file.to_path_buf(), e))
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub const TEST_METADATA_CONTENT: &str = r#"[
    {"code": "fr", "english_name": "French", "emoji_flag": "🇫🇷"},
    {"code": "de", "english_name": "German", "emoji_flag": "🇩🇪"},
    {"code": "fr", "english_name": "French", "emoji_flag": "🇫🇷"}
]"#;

    pub fn load_language_list_from_str(content: &str) -> Result<Vec<LanguageDescriptor>, serde_json::Error> {
        serde_json::from_str(content)
    }

    #[test]
    fn tst_parse_metadata_content() {
        let languages = load_language_list_from_str(TEST_METADATA_CONTENT).unwrap();
        // Order is preserved and the duplicated entry is kept as-is.
        assert_eq!(languages.len(), 3);
        assert_eq!(languages[0], LanguageDescriptor {
            code: "fr".to_string(),
            english_name: "French".to_string(),
            emoji_flag: "🇫🇷".to_string(),
        });
        assert_eq!(languages[1].code, "de");
        assert_eq!(languages[2], languages[0]);
    }

    #[test]
    fn tst_parse_metadata_malformed() {
        assert!(load_language_list_from_str(r#"[{"code": "fr"}]"#).is_err());
        assert!(load_language_list_from_str("not json").is_err());
    }

    #[test]
    fn tst_load_metadata_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_language_list(&dir.path().join("metadata.json"));
        assert!(matches!(result, Err(MetadataLoadError::OpenFile(_, _))));
    }
}

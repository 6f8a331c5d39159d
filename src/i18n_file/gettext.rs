// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

// Gettext PO file spec: https://www.gnu.org/software/gettext/manual/html_node/PO-Files.html

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error as TeError;
use super::common::MessageStats;

/// Line prefix marking a translation value line.
pub const MSGSTR_PREFIX: &str = "msgstr";

/// A value line carrying an empty translation.
const EMPTY_MSGSTR_LINE: &str = r#"msgstr """#;

#[derive(TeError, Debug)]
pub enum PoScanError {
    #[error("Translation file {0:?} does not exist")]
    FileNotFound(PathBuf),
    #[error("Fail to read translation file {0:?} because: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),
}

/// The expected translation file location for a language code.
pub fn po_file_path(translations_dir: &Path, language_code: &str) -> PathBuf {
    translations_dir.join(format!("{language_code}.po"))
}

/// Counts value lines of a PO file in a single streaming pass.
///
/// A line counts as an entry when it starts with `msgstr` (case-sensitive,
/// including plural forms like `msgstr[0]`), and as missing when it is exactly
/// `msgstr ""`. Entry structure is not parsed: multi-line values contribute
/// only their first line, and a matching line counts wherever it appears.
pub fn scan_po_file(po_file: &Path) -> Result<MessageStats, PoScanError> {
    if !po_file.is_file() {
        return Err(PoScanError::FileNotFound(po_file.to_path_buf()));
    }
    let file = File::open(po_file)
        .map_err(|e| PoScanError::ReadFile(po_file.to_path_buf(), e))?;
    scan_po_reader(BufReader::new(file))
        .map_err(|e| PoScanError::ReadFile(po_file.to_path_buf(), e))
}

pub fn scan_po_reader<R: BufRead>(reader: R) -> Result<MessageStats, std::io::Error> {
    let mut stats = MessageStats::default();
    // lines() strips both LF and CRLF, so the exact comparison below behaves
    // the same for files of either line-ending convention.
    for line in reader.lines() {
        let line = line?;
        if line.starts_with(MSGSTR_PREFIX) {
            stats.total += 1;
        }
        if line == EMPTY_MSGSTR_LINE {
            stats.missing += 1;
        }
    }
    Ok(stats)
}

// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};
use serde::Serialize;
use thiserror::Error as TeError;
use crate::i18n_file::common::MessageStats;
use crate::i18n_file::gettext::{self, PoScanError};
use crate::metadata::{self, LanguageDescriptor, MetadataLoadError};

/// Language list file at the repository root.
pub const METADATA_FILE_NAME: &str = "metadata.json";
/// Directory holding one PO file per language, named after its code.
pub const TRANSLATIONS_DIR_NAME: &str = "translations";

#[derive(TeError, Debug)]
pub enum RepoStatusError {
    #[error("Fail to load language metadata because: {0}")]
    Metadata(#[from] MetadataLoadError),
    #[error("Fail to scan translation file because: {0}")]
    Scan(#[from] PoScanError),
    #[error("Translation file {0:?} contains no translatable entries")]
    NoEntries(PathBuf),
}

/// Completion state of a single language, in metadata order.
#[derive(Debug, Serialize)]
pub struct LanguageStatus {
    pub descriptor: LanguageDescriptor,
    pub stats: MessageStats,
    pub percentage: u8,
}

pub fn metadata_file(repo_root: &Path) -> PathBuf {
    repo_root.join(METADATA_FILE_NAME)
}

pub fn translations_dir(repo_root: &Path) -> PathBuf {
    repo_root.join(TRANSLATIONS_DIR_NAME)
}

/// Computes the status of one language from its translation file.
///
/// A file without any translatable entry is rejected as a configuration
/// error, it has no meaningful completion percentage.
pub fn language_status(translations_dir: &Path, descriptor: LanguageDescriptor) -> Result<LanguageStatus, RepoStatusError> {
    let po_file = gettext::po_file_path(translations_dir, &descriptor.code);
    let stats = gettext::scan_po_file(&po_file)?;
    let percentage = stats.completion_percentage()
        .ok_or(RepoStatusError::NoEntries(po_file))?;
    Ok(LanguageStatus { descriptor, stats, percentage })
}

/// Scans every language listed in the repository metadata, in listed order.
///
/// Any failure aborts the whole run; languages already scanned are discarded
/// and no output of any kind has been written at that point.
pub fn collect_language_statuses(repo_root: &Path, verbose: bool) -> Result<Vec<LanguageStatus>, RepoStatusError> {
    let languages = metadata::load_language_list(&metadata_file(repo_root))?;
    let translations_dir = translations_dir(repo_root);
    let mut statuses = Vec::with_capacity(languages.len());
    for descriptor in languages {
        if verbose {
            println!("Parsing {0} ({1})...", descriptor.english_name, descriptor.code);
        }
        statuses.push(language_status(&translations_dir, descriptor)?);
    }
    Ok(statuses)
}

/// Sorts languages with the most untranslated entries first.
///
/// The sort is stable, so languages with an equal amount of remaining work
/// keep their metadata order.
pub fn sort_by_remaining(statuses: &mut [LanguageStatus]) {
    statuses.sort_by(|a, b| b.stats.missing.cmp(&a.stats.missing));
}

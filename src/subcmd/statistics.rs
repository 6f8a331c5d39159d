// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};
use serde::Serialize;
use thiserror::Error as TeError;
use crate::i18n_file::common::MessageStats;
use crate::repo::{self, LanguageStatus, RepoStatusError};

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to collect translation statuses because: {0}")]
    CollectStatus(#[from] RepoStatusError),
    #[error("Fail to serialize stats: {0}")]
    Serde(#[from] serde_yml::Error),
}

#[derive(clap::ValueEnum, Clone, Default, Copy, Debug)]
pub enum StatsFormat {
    #[default]
    PlainTable,
    Yaml,
}

#[derive(clap::ValueEnum, Clone, Default, Copy, Debug)]
pub enum StatsSortBy {
    MetadataOrder,
    #[default]
    Remaining,
}

#[derive(Serialize)]
struct RepoStats {
    repo_root: PathBuf,
    languages: Vec<LanguageStatus>,
}

impl RepoStats {
    fn total_stats(&self) -> MessageStats {
        let mut totals = MessageStats::default();
        for status in &self.languages {
            totals += &status.stats;
        }
        totals
    }

    fn print_plain_table(&self) {
        println!("| No. | Lang   | Completeness | Total | Translated | Remaining |");
        println!("| --- | ------ | ------------ | ----- | ---------- | --------- |");
        for (idx, status) in self.languages.iter().enumerate() {
            println!("| {0:3} | {1:>6} | {2:>11}% | {3:5} | {4:10} | {5:9} |",
                idx + 1, status.descriptor.code, status.percentage,
                status.stats.total, status.stats.translated(), status.stats.missing);
        }
        let totals = self.total_stats();
        // The aggregate can only be entry-less when the metadata list itself
        // is empty; the collector rejects per-language empty catalogs.
        let completeness = match totals.completion_percentage() {
            Some(percentage) => format!("{percentage:>11}%"),
            None => format!("{0:>12}", "-"),
        };
        println!("| {0:>3} | {1:>6} | {2} | {3:5} | {4:10} | {5:9} |",
            "-", "All", completeness, totals.total, totals.translated(), totals.missing);
    }

    fn print_yaml(&self) -> Result<(), serde_yml::Error> {
        let yaml_str = serde_yml::to_string::<Self>(self)?;
        println!("{}", yaml_str);
        Ok(())
    }
}

pub fn subcmd_statistics(repo_root: &Path, format: StatsFormat, sort_by: StatsSortBy) -> Result<(), CmdError> {
    // Progress lines would corrupt machine-readable output.
    let verbose = matches!(format, StatsFormat::PlainTable);
    let mut statuses = repo::collect_language_statuses(repo_root, verbose)?;
    if matches!(sort_by, StatsSortBy::Remaining) {
        repo::sort_by_remaining(&mut statuses);
    }

    let stats = RepoStats {
        repo_root: repo_root.to_path_buf(),
        languages: statuses,
    };
    match format {
        StatsFormat::PlainTable => stats.print_plain_table(),
        StatsFormat::Yaml => stats.print_yaml()?,
    }

    Ok(())
}

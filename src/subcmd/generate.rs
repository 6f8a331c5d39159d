// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use thiserror::Error as TeError;
use crate::repo::{self, LanguageStatus, RepoStatusError};

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Fail to collect translation statuses because: {0}")]
    CollectStatus(#[from] RepoStatusError),
    #[error("Fail to write report file {0:?} because: {1}")]
    WriteReport(PathBuf, #[source] std::io::Error),
}

/// Status document at the repository root, overwritten in full on every run.
pub const REPORT_FILE_NAME: &str = "README.md";

/// Static contributor guidance placed above the per-language status list.
const REPORT_HEADER: &str = r#"[//]: # "This file is automatically generated by translation-status"
# Translations
This repository contains the translated strings for the game.
## Contributing
Any contribution helps, even if it's only a few words or phrases.
(but please only contribute to languages you can speak; no machine translation)

For information on how to submit changes on GitHub, take a look at this [guide](https://docs.github.com/en/free-pro-team@latest/github/managing-files-in-a-repository/editing-files-in-another-users-repository).

If you contribute a significant amount, you'll be added to the credits!

A few tips for contributing:
* Keep the `%s` fragments as they later get replaced by some other text.
* The text fragments that look like `#ffffffff` encode colors. Keep them!
* Try to have the translations be approximately the same length as the English text.
* Don't hesitate to reword the text to better fit the language.
* In order to reduce merge conflicts, avoid working on a single pull request for multiple days. It's better to create one pull request per day.
## Adding new languages
If you want to add support for a new language, create a GitHub Issue so that we can discuss the feasibility.
## Status
"#;

const COMPLETE_COMMENT: &str = " (100% complete! 🎉)";

const TIMESTAMP_FORMAT: &str = "%b %d %Y %H:%M:%S";

fn status_line(status: &LanguageStatus) -> String {
    let descriptor = &status.descriptor;
    let lang_link = format!("[{0}](/{1}/{2}.po)",
        descriptor.english_name, repo::TRANSLATIONS_DIR_NAME, descriptor.code);
    let comment = if status.stats.is_complete() {
        COMPLETE_COMMENT.to_string()
    } else {
        format!(" ({0}% complete; {1} remaining)", status.percentage, status.stats.missing)
    };
    format!("* {0} {1}{2}", descriptor.emoji_flag, lang_link, comment)
}

/// Renders the whole report with Unix line endings.
///
/// Callers decide the line-ending convention of the written file; the footer
/// line carries no trailing newline.
fn render_report(statuses: &[LanguageStatus], generated_at: DateTime<Utc>) -> String {
    let mut report = String::from(REPORT_HEADER);
    for status in statuses {
        report.push_str(&status_line(status));
        report.push('\n');
    }
    report.push_str(&format!("> Report generated on {0} UTC", generated_at.format(TIMESTAMP_FORMAT)));
    report
}

pub fn subcmd_generate(repo_root: &Path) -> Result<(), CmdError> {
    let mut statuses = repo::collect_language_statuses(repo_root, true)?;
    repo::sort_by_remaining(&mut statuses);

    let report = render_report(&statuses, Utc::now());
    let report_file = repo_root.join(REPORT_FILE_NAME);
    // The status document historically uses Windows-style line endings,
    // regardless of the platform the tool runs on.
    fs::write(&report_file, report.replace('\n', "\r\n"))
        .map_err(|e| CmdError::WriteReport(report_file.clone(), e))?;
    println!("Report written to {report_file:?}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::repo::tests::make_status;

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn tst_status_line_incomplete() {
        let status = make_status("fr", "French", "🇫🇷", 4, 1);
        assert_eq!(status_line(&status), "* 🇫🇷 [French](/translations/fr.po) (75% complete; 1 remaining)");
    }

    #[test]
    fn tst_status_line_complete() {
        // The celebratory marker replaces the numeric part entirely.
        let status = make_status("de", "German", "🇩🇪", 10, 0);
        assert_eq!(status_line(&status), "* 🇩🇪 [German](/translations/de.po) (100% complete! 🎉)");
    }

    #[test]
    fn tst_render_report() {
        let statuses = vec![
            make_status("fr", "French", "🇫🇷", 4, 1),
            make_status("de", "German", "🇩🇪", 10, 0),
        ];
        let report = render_report(&statuses, fixed_timestamp());
        assert!(report.starts_with(REPORT_HEADER));
        assert!(report.contains("## Status\n* 🇫🇷 [French](/translations/fr.po) (75% complete; 1 remaining)\n"));
        assert!(report.ends_with("> Report generated on Jan 02 2025 03:04:05 UTC"));
    }

    fn write_repo_fixture(dir: &Path) {
        std::fs::write(dir.join(repo::METADATA_FILE_NAME), r#"[
            {"code": "de", "english_name": "German", "emoji_flag": "🇩🇪"},
            {"code": "fr", "english_name": "French", "emoji_flag": "🇫🇷"}
        ]"#).unwrap();
        let translations = dir.join(repo::TRANSLATIONS_DIR_NAME);
        std::fs::create_dir(&translations).unwrap();
        std::fs::write(translations.join("de.po"),
            "msgid \"a\"\nmsgstr \"eins\"\nmsgid \"b\"\nmsgstr \"zwei\"\n").unwrap();
        std::fs::write(translations.join("fr.po"),
            "msgid \"a\"\nmsgstr \"un\"\nmsgid \"b\"\nmsgstr \"\"\nmsgid \"c\"\nmsgstr \"trois\"\nmsgid \"d\"\nmsgstr \"quatre\"\n").unwrap();
    }

    #[test]
    fn tst_generate_writes_sorted_crlf_report() {
        let dir = tempfile::tempdir().unwrap();
        write_repo_fixture(dir.path());
        subcmd_generate(dir.path()).unwrap();

        let report = std::fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap();
        // Every line separator is CRLF, never a bare LF.
        assert!(!report.replace("\r\n", "").contains('\n'));
        // French has remaining work and is listed before the completed German.
        let fr_line = "* 🇫🇷 [French](/translations/fr.po) (75% complete; 1 remaining)\r\n";
        let de_line = "* 🇩🇪 [German](/translations/de.po) (100% complete! 🎉)\r\n";
        assert!(report.contains(fr_line));
        assert!(report.contains(de_line));
        assert!(report.find(fr_line).unwrap() < report.find(de_line).unwrap());
        assert!(report.ends_with(" UTC"));
    }

    #[test]
    fn tst_generate_is_idempotent_up_to_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        write_repo_fixture(dir.path());

        subcmd_generate(dir.path()).unwrap();
        let first = std::fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap();
        subcmd_generate(dir.path()).unwrap();
        let second = std::fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap();

        let strip_footer = |report: &str| report.rsplit_once("> Report generated on").map(|(body, _)| body.to_string()).unwrap();
        assert_eq!(strip_footer(&first), strip_footer(&second));
    }

    #[test]
    fn tst_generate_leaves_report_untouched_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_repo_fixture(dir.path());
        std::fs::remove_file(dir.path().join(repo::TRANSLATIONS_DIR_NAME).join("fr.po")).unwrap();
        let stale_report = "previously generated content";
        std::fs::write(dir.path().join(REPORT_FILE_NAME), stale_report).unwrap();

        let result = subcmd_generate(dir.path());
        assert!(matches!(result, Err(CmdError::CollectStatus(RepoStatusError::Scan(_)))));
        let report = std::fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap();
        assert_eq!(report, stale_report);
    }
}

// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use thiserror::Error as TeError;


#[derive(Debug, Parser)]
#[command(
    version = env!("GIT_DESCRIBE_OR_CARGO_PKG_VERSION"),
    about = "A commandline tool to track translation progress of Gettext-based localization repositories.",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "generate")]
    #[command(
        about = "Generates the translation status README of the provided localization repository",
        long_about = "Generates the translation status README of the provided localization repository.\n\n\
            Languages are read from metadata.json, their translation files are scanned under the\n\
            translations directory, and README.md at the repository root is overwritten in full.",
    )]
    Generate {
        #[arg(default_value = ".")]
        repo_root: PathBuf,
    },

    #[command(name = "statistics")]
    #[command(
        about = "Prints translation statistics of the provided localization repository",
        long_about = "Prints translation statistics of the provided localization repository to stdout.\n\n\
            Nothing is written to disk; use the generate subcommand to update the status README.",
    )]
    Statistics {
        #[arg(default_value = ".")]
        repo_root: PathBuf,
        #[clap(short, long, default_value_t, value_enum)]
        format: crate::subcmd::statistics::StatsFormat,
        #[clap(short, long, default_value_t, value_enum)]
        sort_by: crate::subcmd::statistics::StatsSortBy,
    },
}

impl Default for Commands {
    // Running the binary without arguments regenerates the report of the
    // repository in the current working directory.
    fn default() -> Self {
        Commands::Generate { repo_root: PathBuf::from(".") }
    }
}

#[derive(TeError, Debug)]
#[error("{0}")]
pub enum CliError {
    Generate(#[from] crate::subcmd::generate::CmdError),
    Statistics(#[from] crate::subcmd::statistics::CmdError),
}

pub fn execute() -> Result<(), CliError> {
    let args = Cli::parse();

    use crate::subcmd;
    match args.command.unwrap_or_default() {
        Commands::Generate { repo_root } => {
            subcmd::subcmd_generate(&repo_root)?;
        },
        Commands::Statistics { repo_root, format, sort_by } => {
            subcmd::subcmd_statistics(&repo_root, format, sort_by)?;
        },
    }

    Ok(())
}

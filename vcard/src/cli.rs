// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::{self, Settings};
use crate::config::{Config, load_config};
use crate::error::VCardError;

/// Exit status for usage errors, matching clap's own.
pub const USAGE_EXIT_STATUS: u8 = 2;
/// Exit status for parse, I/O and config failures.
pub const FAILURE_EXIT_STATUS: u8 = 1;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Match category labels case-insensitively
    #[arg(short = 'i', long, global = true)]
    pub ignore_case: bool,

    /// Do not print the summary to stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of the nearest vcard.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Output vCards that have CategoryA but not CategoryB
    #[command(name = "categorydiff")]
    CategoryDiff {
        /// Category the contacts must have
        category_a: String,

        /// Category the contacts must not have
        category_b: String,

        /// vCard files, directories or glob patterns
        files: Vec<PathBuf>,

        /// Write matches to this file (default stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print how many contacts carry each category
    #[command(name = "categorycounts")]
    CategoryCounts {
        /// vCard files, directories or glob patterns
        files: Vec<PathBuf>,

        /// Write counts to this file (default stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Output vCards that have any of the given categories
    #[command(name = "categorycontacts")]
    CategoryContacts(ContactsArgs),

    /// Output vCards that have all of the given categories
    #[command(name = "categorycontacts-all", alias = "categorycontacts_all")]
    CategoryContactsAll(ContactsArgs),
}

#[derive(clap::Args, Debug)]
pub struct ContactsArgs {
    /// Categories separated by commas or semicolons (e.g., "Work,Friends")
    pub categories: String,

    /// vCard files, directories or glob patterns
    pub files: Vec<PathBuf>,

    /// Print only contact names instead of full vCards
    #[arg(long)]
    pub name: bool,

    /// Print only telephone numbers instead of full vCards
    #[arg(long)]
    pub number: bool,

    /// Write matches to this file (default stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Runs `args`, reading settings from `--config` or the nearest `vcard.toml`.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be loaded
/// * Arguments are missing (a [`crate::VCardError::Usage`])
/// * Any input cannot be read or parsed
/// * The output cannot be written
#[inline]
pub fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    run_with_config(args, &config)
}

/// Runs `args` with an already loaded config.
///
/// # Errors
///
/// Same as [`run`], minus config loading.
#[inline]
pub fn run_with_config(args: Args, config: &Config) -> Result<()> {
    let settings = Settings::new(args.ignore_case || config.ignore_case, args.quiet || config.quiet);

    match args.command {
        Command::CategoryDiff {
            category_a,
            category_b,
            files,
            out,
        } => commands::category_diff(&category_a, &category_b, &files, out.as_deref(), settings),
        Command::CategoryCounts { files, out } => {
            commands::category_counts(&files, out.as_deref(), settings)
        }
        Command::CategoryContacts(contacts) => {
            commands::category_contacts(&contacts, commands::Selection::Any, settings)
        }
        Command::CategoryContactsAll(contacts) => {
            commands::category_contacts(&contacts, commands::Selection::All, settings)
        }
    }
}

/// Exit status for a failed run.
#[must_use]
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<VCardError>() {
        Some(usage) if usage.is_usage() => USAGE_EXIT_STATUS,
        _ => FAILURE_EXIT_STATUS,
    }
}

/// Prints `err` to stderr and returns the matching exit code. Usage errors
/// print just their hint; everything else prints the error chain.
#[inline]
pub fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(VCardError::Usage(hint)) = err.downcast_ref::<VCardError>() {
        eprintln!("{hint}");
    } else {
        eprintln!("Error: {err:#}");
    }
    ExitCode::from(exit_status(err))
}

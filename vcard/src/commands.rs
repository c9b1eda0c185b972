// src/commands.rs
//! One function per subcommand. Each loads every input before writing
//! anything, so a bad file never leaves partial output behind.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::ContactsArgs;
use crate::core::loader::load_records;
use crate::core::operations::{contacts_all, contacts_any, counts, diff, summarize_diff};
use crate::core::output::{render_contact_columns, render_records, write_output};
use crate::error::VCardError;
use crate::models::CaseMode;
use crate::utils::split_label_list;

pub const DIFF_USAGE: &str =
    "Usage: vcard categorydiff <CategoryA> <CategoryB> <file1.vcf> [file2.vcf ...] [--out <path>]";
pub const COUNTS_USAGE: &str =
    "Usage: vcard categorycounts <file1.vcf> [file2.vcf ...] [--out <path>]";
pub const CONTACTS_USAGE: &str = "Usage: vcard categorycontacts <Categories> <file1.vcf> [file2.vcf ...] [--name] [--number] [--out <path>]";
pub const CONTACTS_ALL_USAGE: &str = "Usage: vcard categorycontacts-all <Categories> <file1.vcf> [file2.vcf ...] [--name] [--number] [--out <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub case: CaseMode,
    pub quiet: bool,
}

impl Settings {
    #[inline]
    #[must_use]
    pub const fn new(ignore_case: bool, quiet: bool) -> Self {
        Self {
            case: CaseMode::from_flag(ignore_case),
            quiet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Any,
    All,
}

fn require_files(files: &[PathBuf], usage: &str) -> Result<(), VCardError> {
    if files.is_empty() {
        return Err(VCardError::Usage(usage.to_owned()));
    }
    Ok(())
}

fn require_label(label: &str, settings: Settings) -> Result<String, VCardError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(VCardError::Usage(DIFF_USAGE.to_owned()));
    }
    Ok(settings.case.normalize(trimmed))
}

/// Writes the records that have `category_a` but not `category_b`, then a
/// summary to stderr.
///
/// # Errors
///
/// This function may return an error if:
/// * A category is blank or no files are given
/// * Any input cannot be read or parsed
/// * The output cannot be written
#[tracing::instrument(skip(files, settings), fields(file_count = files.len()))]
pub fn category_diff(
    category_a: &str,
    category_b: &str,
    files: &[PathBuf],
    out: Option<&Path>,
    settings: Settings,
) -> Result<()> {
    let include = require_label(category_a, settings)?;
    let exclude = require_label(category_b, settings)?;
    require_files(files, DIFF_USAGE)?;

    let records = load_records(files, settings.case)?;
    let matches = diff(&records, &include, &exclude);
    write_output(out, &render_records(&matches))?;

    if !settings.quiet {
        let stats = summarize_diff(&records, &include, &exclude);
        eprintln!("Processed vcards: {}", stats.total);
        eprintln!("vcards with '{include}': {}", stats.with_include);
        eprintln!("vcards with '{exclude}': {}", stats.with_exclude);
        eprintln!(
            "Matches (has '{include}', lacks '{exclude}'): {} ({:.2}%)",
            stats.matched,
            stats.calculate_percentage()
        );
    }

    Ok(())
}

/// Writes one `label: count` line per category.
///
/// # Errors
///
/// This function may return an error if:
/// * No files are given
/// * Any input cannot be read or parsed
/// * The output cannot be written
#[tracing::instrument(skip(files, settings), fields(file_count = files.len()))]
pub fn category_counts(files: &[PathBuf], out: Option<&Path>, settings: Settings) -> Result<()> {
    require_files(files, COUNTS_USAGE)?;

    let records = load_records(files, settings.case)?;
    let table = counts(&records);
    if table.is_empty() && !settings.quiet {
        eprintln!("No category counts available");
    }
    write_output(out, &table.to_string())
}

/// Writes the records matching any/all of the categories in `args`, either
/// as vCards or as name/number columns.
///
/// # Errors
///
/// This function may return an error if:
/// * No files are given
/// * Any input cannot be read or parsed
/// * The output cannot be written
#[tracing::instrument(skip(args, settings), fields(file_count = args.files.len()))]
pub fn category_contacts(args: &ContactsArgs, selection: Selection, settings: Settings) -> Result<()> {
    let usage = match selection {
        Selection::Any => CONTACTS_USAGE,
        Selection::All => CONTACTS_ALL_USAGE,
    };
    require_files(&args.files, usage)?;

    let labels: Vec<String> = split_label_list(&args.categories)
        .iter()
        .map(|label| settings.case.normalize(label))
        .collect();
    if labels.is_empty() {
        tracing::warn!(categories = %args.categories, "No category labels given");
    }

    let records = load_records(&args.files, settings.case)?;
    let matches = match selection {
        Selection::Any => contacts_any(&records, &labels),
        Selection::All => contacts_all(&records, &labels),
    };

    let rendered = if args.name || args.number {
        render_contact_columns(&matches, args.name, args.number)
    } else {
        render_records(&matches)
    };
    write_output(args.out.as_deref(), &rendered)
}

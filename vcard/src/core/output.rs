// src/core/output.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

use crate::models::VCardRecord;

/// Original line blocks separated by newlines, with a trailing newline when
/// any record is present.
#[must_use]
pub fn render_records(records: &[&VCardRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let mut output = records
        .iter()
        .map(|record| record.to_vcf())
        .collect::<Vec<_>>()
        .join("\n");
    output.push('\n');
    output
}

/// One tab-separated line per record: the display name and/or the
/// telephone numbers joined by `;`.
#[must_use]
pub fn render_contact_columns(records: &[&VCardRecord], name: bool, number: bool) -> String {
    let mut output = String::new();
    for record in records {
        let mut columns = Vec::new();
        if name {
            columns.push(record.display_name());
        }
        if number {
            columns.push(record.telephone_numbers().join(";"));
        }
        output.push_str(&columns.join("\t"));
        output.push('\n');
    }
    output
}

/// Writes `content` to `out`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error if the destination cannot be written.
#[inline]
pub fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

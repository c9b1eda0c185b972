// src/core/operations.rs
//! Category queries over a parsed record sequence. Every selection is a
//! stable filter: output order is input order and records are never
//! de-duplicated.

use crate::models::{CategoryCountTable, DiffStats, VCardRecord};

/// Records that carry `include` but not `exclude`.
#[inline]
#[must_use]
pub fn diff<'a>(records: &'a [VCardRecord], include: &str, exclude: &str) -> Vec<&'a VCardRecord> {
    records
        .iter()
        .filter(|record| record.has_category(include) && !record.has_category(exclude))
        .collect()
}

/// Tallies for the summary printed next to a diff.
#[must_use]
pub fn summarize_diff(records: &[VCardRecord], include: &str, exclude: &str) -> DiffStats {
    let mut stats = DiffStats::new();

    for record in records {
        let has_include = record.has_category(include);
        let has_exclude = record.has_category(exclude);

        stats.total = stats.total.saturating_add(1);
        if has_include {
            stats.with_include = stats.with_include.saturating_add(1);
        }
        if has_exclude {
            stats.with_exclude = stats.with_exclude.saturating_add(1);
        }
        if has_include && !has_exclude {
            stats.matched = stats.matched.saturating_add(1);
        }
    }

    stats
}

/// For every label, the number of records whose category set contains it.
#[must_use]
pub fn counts(records: &[VCardRecord]) -> CategoryCountTable {
    let mut table = CategoryCountTable::new();
    for record in records {
        table.add_record(record);
    }
    tracing::debug!(labels = table.len(), records = records.len(), "Counted categories");
    table
}

/// Records carrying at least one of `labels`.
#[inline]
#[must_use]
pub fn contacts_any<'a>(records: &'a [VCardRecord], labels: &[String]) -> Vec<&'a VCardRecord> {
    records
        .iter()
        .filter(|record| labels.iter().any(|label| record.has_category(label)))
        .collect()
}

/// Records carrying every one of `labels`. An empty label list selects
/// nothing.
#[inline]
#[must_use]
pub fn contacts_all<'a>(records: &'a [VCardRecord], labels: &[String]) -> Vec<&'a VCardRecord> {
    if labels.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| labels.iter().all(|label| record.has_category(label)))
        .collect()
}

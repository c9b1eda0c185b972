// src/models/category_counts.rs
use std::collections::BTreeMap;
use std::fmt;

use crate::models::VCardRecord;

/// Number of distinct records carrying each category label.
///
/// Backed by a `BTreeMap` so iteration and rendering are always in ascending
/// label order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryCountTable {
    counts: BTreeMap<String, usize>,
}

impl CategoryCountTable {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Counts every label of `record` once. The record's category set is
    /// already de-duplicated.
    #[inline]
    pub fn add_record(&mut self, record: &VCardRecord) {
        for label in record.categories() {
            let count = self.counts.entry(label.clone()).or_insert(0);
            *count = count.saturating_add(1);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, label: &str) -> Option<usize> {
        self.counts.get(label).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

/// One `label: count` line per label.
impl fmt::Display for CategoryCountTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, count) in self.iter() {
            writeln!(f, "{label}: {count}")?;
        }
        Ok(())
    }
}

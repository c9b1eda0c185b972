// src/models/diff_stats.rs

/// Tallies reported alongside a category diff.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub total: u64,
    pub with_include: u64,
    pub with_exclude: u64,
    pub matched: u64,
}

impl DiffStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            with_include: 0,
            with_exclude: 0,
            matched: 0,
        }
    }

    /// Share of the include-category records that survived the diff.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn calculate_percentage(&self) -> f64 {
        if self.with_include == 0 {
            return 0.0;
        }
        (self.matched as f64 / self.with_include as f64) * 100.0
    }
}

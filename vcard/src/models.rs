// src/models.rs
pub mod case_mode;
pub mod category_counts;
pub mod diff_stats;
pub mod record;

pub use case_mode::CaseMode;
pub use category_counts::CategoryCountTable;
pub use diff_stats::DiffStats;
pub use record::VCardRecord;

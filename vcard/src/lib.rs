// src/lib.rs
//! Category diffs, counts and contact selection for vCard files.
//!
//! The core API is [`parse`], [`diff`] and [`counts`]; [`load_records`]
//! reads and parses files, and [`run`] drives a full command.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, Command, ContactsArgs, exit_status, report, run, run_with_config};
pub use crate::config::{Config, load_config};
pub use crate::core::loader::{expand_inputs, load_records, read_vcf};
pub use crate::core::operations::{contacts_all, contacts_any, counts, diff, summarize_diff};
pub use crate::core::parser::{parse, parse_with};
pub use crate::error::{ParseError, ParseErrorKind, VCardError};
pub use crate::models::{CaseMode, CategoryCountTable, DiffStats, VCardRecord};

// src/core.rs
pub mod loader;
pub mod operations;
pub mod output;
pub mod parser;

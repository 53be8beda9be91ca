//! CLI command implementations.

pub mod analyze;
pub mod common;
pub mod evaluate;
pub mod parse_log;
pub mod sabine;
pub mod targets;

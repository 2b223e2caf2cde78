//! CLI command implementations.

pub mod add;
pub mod day;
pub mod delete;
pub mod export;
pub mod import;
pub mod levels;
pub mod list;
pub mod stats;
pub mod streak;

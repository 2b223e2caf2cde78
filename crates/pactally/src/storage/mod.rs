//! Score persistence.
//!
//! Scores are stored as a flat text table, one `date,score,level` record per
//! line with `MM/DD/YY` dates and no header. Saving always rewrites the whole
//! file.

mod file;
mod format;

pub use file::*;
pub use format::*;

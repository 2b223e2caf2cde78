//! Export formats for report consumers.

mod csv;
mod format;
mod json;
mod summary;

pub use csv::*;
pub use format::*;
pub use json::*;
pub use summary::*;

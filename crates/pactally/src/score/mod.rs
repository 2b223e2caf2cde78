//! Score records and the day-keyed score store.

mod record;
mod store;

pub use record::*;
pub use store::*;

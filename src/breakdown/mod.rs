//! Breakdown table: the provider's mapping of `(queue, tier, division)` to
//! skill-rating intervals, plus atomic snapshot publication.

mod store;
mod table;

pub use store::*;
pub use table::*;

//! Search module.
//!
//! Contains the filter criteria and the matching engine. Filtering is a pure
//! linear scan over whatever slice it is given.

mod criteria;
mod filter;

pub use criteria::{Criteria, Facet};
pub use filter::{filter, matches, search, FilterOutcome};

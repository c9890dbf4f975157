//! Catalog filtering.

mod filter;

pub use filter::FilterCriteria;

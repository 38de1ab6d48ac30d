//! Stats module - Rating aggregation

mod summary;

pub use summary::{RatingSummary, STAR_LEVELS};

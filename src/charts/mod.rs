//! Charts module - Rating distribution chart

mod pie;

pub use pie::{PieChart, STAR_PALETTE};

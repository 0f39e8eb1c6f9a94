//! Nutrition calculation module
//!
//! Serving parsing and portion scaling.

pub mod portion;
pub mod units;

pub use portion::{parse_serving, portion_multiplier, portion_nutrition, Portion, ServingSize};
pub use units::{categorize_unit, grams_per_unit, PortionUnit};

//! NutriSense Tools module
//!
//! One module per screen of the tracker; each returns a serializable response.

pub mod analytics;
pub mod dashboard;
pub mod foods;
pub mod profile;
pub mod recommendations;
pub mod status;

//! Weight units
//!
//! Recognizes the weight units a food portion can be entered in.

use serde::{Deserialize, Serialize};

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Grams in the reference portion used when a serving has no gram weight
pub const REFERENCE_PORTION_G: f64 = 100.0;

/// How a portion quantity is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortionUnit {
    /// A weight unit convertible to grams
    Weight,
    /// A count of the food's own servings
    Serving,
}

/// Conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    match unit.trim().to_lowercase().as_str() {
        "g" | "gram" | "grams" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Anything that is not a weight unit counts servings
pub fn categorize_unit(unit: &str) -> PortionUnit {
    if grams_per_unit(unit).is_some() {
        PortionUnit::Weight
    } else {
        PortionUnit::Serving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(grams_per_unit("g"), Some(1.0));
        assert_eq!(grams_per_unit(" Grams "), Some(1.0));
        assert_eq!(grams_per_unit("oz"), Some(G_PER_OZ));
        assert_eq!(grams_per_unit("kg"), Some(G_PER_KG));
        assert_eq!(grams_per_unit("cup"), None);
    }

    #[test]
    fn test_categorize_unit() {
        assert_eq!(categorize_unit("lb"), PortionUnit::Weight);
        assert_eq!(categorize_unit("serving"), PortionUnit::Serving);
        assert_eq!(categorize_unit("medium"), PortionUnit::Serving);
    }
}

//! Portion calculation
//!
//! Parses serving descriptions and scales a food's per-serving nutrition to
//! the quantity actually eaten.

use serde::Serialize;

use super::units::{categorize_unit, grams_per_unit, PortionUnit, REFERENCE_PORTION_G};
use crate::models::{FoodItem, Nutrition};

/// A parsed serving description
#[derive(Debug, Clone, PartialEq)]
pub struct ServingSize {
    /// Text without the gram annotation, e.g. "1 medium"
    pub description: String,
    /// Weight of one serving, if the text states it
    pub grams: Option<f64>,
}

/// Parse a serving description
///
/// Examples:
/// - "100g" -> grams: Some(100.0)
/// - "1 medium (118g)" -> description: "1 medium", grams: Some(118.0)
/// - "1 slice" -> grams: None
pub fn parse_serving(serving: &str) -> ServingSize {
    let trimmed = serving.trim();

    if let (Some(open), Some(close)) = (trimmed.find('('), trimmed.rfind(')')) {
        if open < close {
            let description = trimmed[..open].trim().to_string();
            let grams = parse_weight(&trimmed[open + 1..close]);
            return ServingSize { description, grams };
        }
    }

    ServingSize {
        description: trimmed.to_string(),
        grams: parse_weight(trimmed),
    }
}

/// Parse a weight like "118g", "118 g", "4 oz" into grams
fn parse_weight(s: &str) -> Option<f64> {
    let lower = s.trim().to_lowercase();
    let split = lower
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(lower.len());
    let (number, unit) = lower.split_at(split);
    let value: f64 = number.parse().ok()?;
    let factor = grams_per_unit(unit)?;
    Some(value * factor)
}

/// Multiplier to apply to a food's per-serving nutrition.
///
/// Weight quantities are divided by the serving weight; servings without a
/// stated weight are treated as per-100 g values. Any other unit counts
/// servings directly.
pub fn portion_multiplier(quantity: f64, unit: &str, food: &FoodItem) -> f64 {
    match categorize_unit(unit) {
        PortionUnit::Serving => quantity,
        PortionUnit::Weight => {
            let grams = quantity * grams_per_unit(unit).unwrap_or(1.0);
            let serving = parse_serving(&food.serving_size);
            match serving.grams {
                Some(serving_grams) if serving_grams > 0.0 => grams / serving_grams,
                _ => {
                    tracing::debug!(
                        food = %food.name,
                        serving = %food.serving_size,
                        "Serving has no gram weight, using per-100g values"
                    );
                    grams / REFERENCE_PORTION_G
                }
            }
        }
    }
}

/// A food scaled to an eaten quantity
#[derive(Debug, Clone, Serialize)]
pub struct Portion {
    pub food_name: String,
    pub quantity: f64,
    pub unit: String,
    pub multiplier: f64,
    pub nutrition: Nutrition,
}

pub fn portion_nutrition(food: &FoodItem, quantity: f64, unit: &str) -> Portion {
    let multiplier = portion_multiplier(quantity, unit, food);
    Portion {
        food_name: food.name.clone(),
        quantity,
        unit: unit.trim().to_string(),
        multiplier,
        nutrition: food.nutrition.scale(multiplier),
    }
}

//! Food database item
//!
//! Nutrition per serving, with the serving described in free text.

use serde::{Deserialize, Serialize};

use super::Nutrition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub brand: Option<String>,
    /// Nutrition for one serving
    pub nutrition: Nutrition,
    /// e.g. "100g" or "1 medium (118g)"
    pub serving_size: String,
}

impl FoodItem {
    /// Case-insensitive substring match on the name; an empty query matches everything
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.name.to_lowercase().contains(&query)
    }
}

/// Search a food list, preserving its order
pub fn search_foods<'a>(foods: &'a [FoodItem], query: &str, limit: usize) -> Vec<&'a FoodItem> {
    foods.iter().filter(|f| f.matches(query)).take(limit).collect()
}

//! Food Tools
//!
//! Search the food database, log portions and list logged entries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{search_foods as search, FoodItem, MealType, Nutrition, NutritionEntry};
use crate::nutrition::{parse_serving, portion_nutrition};
use crate::session::Session;

/// Results returned when no limit is given
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
const MAX_SEARCH_LIMIT: usize = 100;

/// Summary of a food item for search results
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: String,
    pub serving_grams: Option<f64>,
    pub nutrition: Nutrition,
}

impl From<&FoodItem> for FoodSummary {
    fn from(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            brand: item.brand.clone(),
            serving_size: item.serving_size.clone(),
            serving_grams: parse_serving(&item.serving_size).grams,
            nutrition: item.nutrition,
        }
    }
}

/// Response for search_foods
#[derive(Debug, Serialize)]
pub struct SearchFoodsResponse {
    pub items: Vec<FoodSummary>,
    pub total: usize,
}

/// Response for add_food
#[derive(Debug, Serialize)]
pub struct AddFoodResponse {
    pub entry: NutritionEntry,
    pub multiplier: f64,
    pub message: String,
}

/// Response for list_entries
#[derive(Debug, Serialize)]
pub struct ListEntriesResponse {
    pub date: NaiveDate,
    pub entries: Vec<NutritionEntry>,
    pub total: Nutrition,
}

pub fn search_foods(session: &Session, query: &str, limit: usize) -> SearchFoodsResponse {
    let limit = match limit {
        0 => DEFAULT_SEARCH_LIMIT,
        n => n.min(MAX_SEARCH_LIMIT),
    };
    let items: Vec<FoodSummary> = search(&session.foods, query, limit)
        .into_iter()
        .map(FoodSummary::from)
        .collect();
    let total = items.len();

    SearchFoodsResponse { items, total }
}

/// Log a portion of a food from the database
pub fn add_food(
    session: &mut Session,
    food_name: &str,
    quantity: f64,
    unit: &str,
    meal_type: MealType,
    date: Option<NaiveDate>,
) -> Result<AddFoodResponse, String> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err("quantity must be greater than 0".to_string());
    }
    let unit = unit.trim();
    if unit.is_empty() {
        return Err("unit cannot be empty".to_string());
    }

    let name = food_name.trim();
    let food = session
        .foods
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or_else(|| format!("Food not found: {}", name))?;

    let portion = portion_nutrition(&food, quantity, unit);
    let multiplier = portion.multiplier;
    let date = date.unwrap_or_else(|| session.today());
    let entry = session.log_portion(portion, food.brand.clone(), meal_type, date);

    let message = format!(
        "{} ({} {}) has been added to your {}! Calories: {}",
        entry.food_name,
        quantity,
        unit,
        meal_type.as_str(),
        entry.nutrition.calories.round()
    );

    Ok(AddFoodResponse {
        entry,
        multiplier,
        message,
    })
}

pub fn list_entries(session: &Session, date: Option<NaiveDate>) -> ListEntriesResponse {
    let date = date.unwrap_or_else(|| session.today());
    let entries: Vec<NutritionEntry> = session.entries_on(date).cloned().collect();
    let total = entries.iter().map(|e| &e.nutrition).sum::<Nutrition>().rounded();

    ListEntriesResponse {
        date,
        entries,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search() {
        let session = Session::sample();
        let result = search_foods(&session, "an", 10);
        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Banana"]);
        assert_eq!(result.items[0].serving_grams, Some(118.0));

        assert_eq!(search_foods(&session, "", 1).total, 1);
    }

    #[test]
    fn test_search_zero_limit_uses_default() {
        let session = Session::sample();
        assert_eq!(search_foods(&session, "", 0).total, session.foods.len());
        assert!(session.foods.len() <= DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn test_add_food() {
        let mut session = Session::sample();
        let response =
            add_food(&mut session, "chicken breast (grilled)", 150.0, "g", MealType::Lunch, None).unwrap();

        assert!((response.multiplier - 1.5).abs() < 1e-9);
        assert!((response.entry.nutrition.calories - 346.5).abs() < 1e-9);
        assert_eq!(response.entry.date, session.today());
        assert!(response.message.contains("lunch"));
        assert_eq!(list_entries(&session, None).entries.len(), 4);
    }

    #[test]
    fn test_add_food_errors() {
        let mut session = Session::sample();
        assert!(add_food(&mut session, "Pizza", 100.0, "g", MealType::Dinner, None).is_err());
        assert!(add_food(&mut session, "Banana", 0.0, "g", MealType::Snack, None).is_err());
        assert!(add_food(&mut session, "Banana", 1.0, " ", MealType::Snack, None).is_err());
        assert_eq!(session.entries.len(), 3);
    }

    #[test]
    fn test_list_entries_totals() {
        let session = Session::sample();
        let list = list_entries(&session, None);
        assert_eq!(list.entries.len(), 3);
        assert_eq!(list.total.sodium, 865.0);
    }
}

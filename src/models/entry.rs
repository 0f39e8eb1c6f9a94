//! Nutrition log entries
//!
//! A logged food with its nutrition, and per-day totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Meal type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }
}

/// A logged food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    pub id: String,
    pub date: NaiveDate,
    pub food_name: String,
    pub brand: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub nutrition: Nutrition,
    pub meal_type: MealType,
}

/// Totals for one day
#[derive(Debug, Clone, Serialize)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub total: Nutrition,
    pub entries: Vec<NutritionEntry>,
}

impl DailyNutrition {
    /// Collect the entries logged on `date` and sum them.
    ///
    /// Entries of other dates are ignored.
    pub fn from_entries<'a, I>(date: NaiveDate, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a NutritionEntry>,
    {
        let entries: Vec<NutritionEntry> = entries
            .into_iter()
            .filter(|e| e.date == date)
            .cloned()
            .collect();
        let total: Nutrition = entries.iter().map(|e| &e.nutrition).sum();

        Self {
            date,
            total,
            entries,
        }
    }

    /// Entries of a single meal, in log order
    pub fn meals(&self, meal_type: MealType) -> Vec<&NutritionEntry> {
        self.entries
            .iter()
            .filter(|e| e.meal_type == meal_type)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_date, sample_entries};

    #[test]
    fn test_meal_type_from_str() {
        for meal in MealType::ALL {
            assert_eq!(MealType::from_str(meal.display_name()), Some(meal));
        }
        assert_eq!(MealType::from_str(" dinner "), Some(MealType::Dinner));
        assert_eq!(MealType::from_str("brunch"), None);
        assert_eq!(MealType::from_str("supper"), None);
    }

    #[test]
    fn test_daily_totals() {
        let day = DailyNutrition::from_entries(sample_date(), &sample_entries());
        assert_eq!(day.entries.len(), 3);
        assert_eq!(day.total.calories, 950.0);
        assert_eq!(day.total.protein, 82.0);
        assert_eq!(day.total.carbs, 70.0);
        assert_eq!(day.total.fat, 40.0);
        assert_eq!(day.meals(MealType::Lunch).len(), 1);
        assert!(day.meals(MealType::Snack).is_empty());
    }

    #[test]
    fn test_other_dates_ignored() {
        let next_day = sample_date().succ_opt().unwrap();
        let day = DailyNutrition::from_entries(next_day, &sample_entries());
        assert!(day.is_empty());
        assert_eq!(day.total, Nutrition::zero());
    }
}

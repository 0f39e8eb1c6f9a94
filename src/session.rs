//! In-memory session state
//!
//! Everything the tools read and edit. Nothing is persisted.

use chrono::NaiveDate;

use crate::analytics::DailyCalories;
use crate::data;
use crate::models::{FoodItem, MealType, NutritionEntry, Recommendation, UserProfile};
use crate::nutrition::Portion;

pub struct Session {
    pub profile: UserProfile,
    pub entries: Vec<NutritionEntry>,
    pub foods: Vec<FoodItem>,
    pub recommendations: Vec<Recommendation>,
    pub calorie_history: Vec<DailyCalories>,
    today: NaiveDate,
    next_entry_id: u64,
}

impl Session {
    pub fn new(profile: UserProfile, today: NaiveDate) -> Self {
        let entries = data::sample_entries();
        let next_entry_id = entries
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            profile,
            entries,
            foods: data::food_database(),
            recommendations: data::sample_recommendations(),
            calorie_history: data::sample_calorie_history(),
            today,
            next_entry_id,
        }
    }

    /// Session over the sample dataset, with "today" being the sample log date
    pub fn sample() -> Self {
        Self::new(data::sample_profile(), data::sample_date())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Append a portion to the log and return the new entry
    pub fn log_portion(
        &mut self,
        portion: Portion,
        brand: Option<String>,
        meal_type: MealType,
        date: NaiveDate,
    ) -> NutritionEntry {
        let entry = NutritionEntry {
            id: self.next_entry_id.to_string(),
            date,
            food_name: portion.food_name,
            brand,
            quantity: portion.quantity,
            unit: portion.unit,
            nutrition: portion.nutrition,
            meal_type,
        };
        self.next_entry_id += 1;
        self.entries.push(entry.clone());

        tracing::info!(
            entry_id = %entry.id,
            food = %entry.food_name,
            meal = entry.meal_type.as_str(),
            calories = entry.nutrition.calories,
            "Logged food"
        );
        entry
    }

    pub fn entries_on(&self, date: NaiveDate) -> impl Iterator<Item = &NutritionEntry> {
        self.entries.iter().filter(move |e| e.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::portion_nutrition;

    #[test]
    fn test_log_portion_assigns_sequential_ids() {
        let mut session = Session::sample();
        let banana = session.foods[0].clone();
        let today = session.today();

        let first = session.log_portion(portion_nutrition(&banana, 118.0, "g"), None, MealType::Snack, today);
        let second = session.log_portion(portion_nutrition(&banana, 1.0, "serving"), None, MealType::Snack, today);

        assert_eq!(first.id, "4");
        assert_eq!(second.id, "5");
        assert_eq!(session.entries_on(today).count(), 5);
    }
}

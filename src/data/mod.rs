//! Built-in sample dataset
//!
//! The profile, log, food database and recommendations the server starts
//! with when no profile file is configured.

use chrono::{Duration, NaiveDate};

use crate::analytics::DailyCalories;
use crate::models::{
    ActivityLevel, FoodItem, Gender, Goal, GoalType, MacroTargets, MealType, Nutrition,
    NutritionEntry, Priority, Recommendation, RecommendationKind, UserProfile,
};

/// Date the sample log entries were recorded on
pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 27).unwrap_or_default()
}

pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: "Alex Johnson".to_string(),
        age: 28,
        weight: 70.0,
        height: 175.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        medical_conditions: vec!["None".to_string()],
        goal: Goal {
            goal_type: GoalType::LoseWeight,
            target_weight: Some(65.0),
            timeline: Some(12),
        },
        daily_calories: 2200,
        macro_targets: MacroTargets {
            protein: 165,
            carbs: 248,
            fat: 61,
        },
    }
}

fn nutrition(
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
    sodium: f64,
) -> Nutrition {
    Nutrition {
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sugar,
        sodium,
    }
}

pub fn sample_entries() -> Vec<NutritionEntry> {
    let date = sample_date();
    vec![
        NutritionEntry {
            id: "1".to_string(),
            date,
            food_name: "Greek Yogurt with Berries".to_string(),
            brand: Some("Organic Valley".to_string()),
            quantity: 150.0,
            unit: "g".to_string(),
            nutrition: nutrition(180.0, 15.0, 20.0, 6.0, 3.0, 16.0, 65.0),
            meal_type: MealType::Breakfast,
        },
        NutritionEntry {
            id: "2".to_string(),
            date,
            food_name: "Grilled Chicken Salad".to_string(),
            brand: None,
            quantity: 300.0,
            unit: "g".to_string(),
            nutrition: nutrition(350.0, 35.0, 15.0, 18.0, 8.0, 8.0, 420.0),
            meal_type: MealType::Lunch,
        },
        NutritionEntry {
            id: "3".to_string(),
            date,
            food_name: "Salmon with Quinoa".to_string(),
            brand: None,
            quantity: 250.0,
            unit: "g".to_string(),
            nutrition: nutrition(420.0, 32.0, 35.0, 16.0, 4.0, 2.0, 380.0),
            meal_type: MealType::Dinner,
        },
    ]
}

pub fn food_database() -> Vec<FoodItem> {
    let food = |name: &str, n: Nutrition, serving: &str| FoodItem {
        name: name.to_string(),
        brand: None,
        nutrition: n,
        serving_size: serving.to_string(),
    };

    vec![
        food("Banana", nutrition(105.0, 1.3, 27.0, 0.4, 3.1, 14.0, 1.0), "1 medium (118g)"),
        food(
            "Chicken Breast (Grilled)",
            nutrition(231.0, 43.5, 0.0, 5.0, 0.0, 0.0, 104.0),
            "100g",
        ),
        food(
            "Brown Rice (Cooked)",
            nutrition(111.0, 2.6, 23.0, 0.9, 1.8, 0.4, 5.0),
            "100g",
        ),
        food("Avocado", nutrition(234.0, 2.9, 12.0, 21.0, 10.0, 1.0, 11.0), "1 medium (150g)"),
        food(
            "Greek Yogurt (Plain)",
            nutrition(100.0, 17.0, 9.0, 0.4, 0.0, 9.0, 56.0),
            "150g",
        ),
    ]
}

pub fn sample_recommendations() -> Vec<Recommendation> {
    let rec = |id: &str,
               kind: RecommendationKind,
               title: &str,
               description: &str,
               priority: Priority,
               category: &str,
               actionable: bool| Recommendation {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        priority,
        category: category.to_string(),
        actionable,
    };

    vec![
        rec(
            "1",
            RecommendationKind::Nutrition,
            "Increase Fiber Intake",
            "You're currently at 60% of your daily fiber goal. Try adding more vegetables, fruits, and whole grains to your meals.",
            Priority::Medium,
            "Daily Nutrition",
            true,
        ),
        rec(
            "2",
            RecommendationKind::Goal,
            "On Track for Weight Loss",
            "Great progress! You're maintaining a healthy calorie deficit. Keep up the consistent eating patterns.",
            Priority::High,
            "Weight Management",
            false,
        ),
        rec(
            "3",
            RecommendationKind::Health,
            "Stay Hydrated",
            "Remember to drink at least 8 glasses of water daily to support your metabolism and overall health.",
            Priority::Low,
            "General Health",
            true,
        ),
        rec(
            "4",
            RecommendationKind::Nutrition,
            "Protein Distribution",
            "Try to spread your protein intake throughout the day for better muscle protein synthesis.",
            Priority::Medium,
            "Macronutrients",
            true,
        ),
    ]
}

/// One week of calorie history ending the day before [`sample_date`]
pub fn sample_calorie_history() -> Vec<DailyCalories> {
    const CALORIES: [f64; 7] = [2100.0, 2250.0, 1950.0, 2300.0, 2150.0, 2400.0, 2050.0];
    const TARGET: f64 = 2200.0;

    let start = sample_date() - Duration::days(CALORIES.len() as i64);
    CALORIES
        .iter()
        .enumerate()
        .map(|(i, &calories)| DailyCalories::new(start + Duration::days(i as i64), calories, TARGET))
        .collect()
}

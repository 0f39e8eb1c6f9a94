//! Dashboard Tool
//!
//! Today's intake against the profile's targets.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::analytics::{bar_fill_percent, progress_percent};
use crate::health::{bmi_category, calculate_bmi};
use crate::models::{DailyNutrition, MealType, Nutrition};
use crate::session::Session;

/// Progress towards one daily target
#[derive(Debug, Serialize)]
pub struct TargetProgress {
    pub current: f64,
    pub target: f64,
    pub unit: &'static str,
    /// Unclamped, rounded to a whole percent
    pub percent: f64,
    /// Clamped to 0..=100 for drawing
    pub bar_percent: f64,
}

impl TargetProgress {
    fn new(current: f64, target: f64, unit: &'static str) -> Self {
        Self {
            current: current.round(),
            target: target.round(),
            unit,
            percent: progress_percent(current, target).round(),
            bar_percent: bar_fill_percent(current, target).round(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardProgress {
    pub calories: TargetProgress,
    pub protein: TargetProgress,
    pub carbs: TargetProgress,
    pub fat: TargetProgress,
}

/// One meal in the recent-meals list
#[derive(Debug, Serialize)]
pub struct RecentMeal {
    pub id: String,
    pub meal_type: &'static str,
    pub food_name: String,
    pub calories: f64,
}

/// Response for get_dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub greeting: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub totals: Nutrition,
    pub calories_remaining: f64,
    pub progress: DashboardProgress,
    pub bmi: f64,
    pub bmi_category: &'static str,
    pub recent_meals: Vec<RecentMeal>,
}

/// Greeting for the hour of day
pub fn greeting_for(time: NaiveTime) -> &'static str {
    match time.hour() {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn get_dashboard(session: &Session, now: NaiveTime) -> DashboardResponse {
    let profile = &session.profile;
    let date = session.today();
    let day = DailyNutrition::from_entries(date, session.entries_on(date));
    let targets = &profile.macro_targets;
    let bmi = calculate_bmi(profile.weight, profile.height);

    // newest first, in meal order within the day
    let mut recent: Vec<_> = day.entries.iter().collect();
    recent.sort_by_key(|e| std::cmp::Reverse(meal_rank(e.meal_type)));
    let recent_meals = recent
        .into_iter()
        .map(|e| RecentMeal {
            id: e.id.clone(),
            meal_type: e.meal_type.display_name(),
            food_name: e.food_name.clone(),
            calories: e.nutrition.calories.round(),
        })
        .collect();

    DashboardResponse {
        greeting: format!("{}, {}!", greeting_for(now), profile.name),
        date,
        date_label: date.format("%A, %B %-d, %Y").to_string(),
        totals: day.total.rounded(),
        calories_remaining: (profile.daily_calories as f64 - day.total.calories).round(),
        progress: DashboardProgress {
            calories: TargetProgress::new(day.total.calories, profile.daily_calories as f64, "kcal"),
            protein: TargetProgress::new(day.total.protein, targets.protein as f64, "g"),
            carbs: TargetProgress::new(day.total.carbs, targets.carbs as f64, "g"),
            fat: TargetProgress::new(day.total.fat, targets.fat as f64, "g"),
        },
        bmi,
        bmi_category: bmi_category(bmi).label(),
        recent_meals,
    }
}

fn meal_rank(meal: MealType) -> u8 {
    match meal {
        MealType::Breakfast => 0,
        MealType::Lunch => 1,
        MealType::Snack => 2,
        MealType::Dinner => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting_for(at(7)), "Good morning");
        assert_eq!(greeting_for(at(12)), "Good afternoon");
        assert_eq!(greeting_for(at(21)), "Good evening");
    }

    #[test]
    fn test_dashboard_for_sample_day() {
        let session = Session::sample();
        let dashboard = get_dashboard(&session, at(8));

        assert_eq!(dashboard.greeting, "Good morning, Alex Johnson!");
        assert_eq!(dashboard.date_label, "Monday, January 27, 2025");
        assert_eq!(dashboard.totals.calories, 950.0);
        assert_eq!(dashboard.calories_remaining, 1250.0);
        assert_eq!(dashboard.progress.calories.percent, 43.0);
        assert_eq!(dashboard.progress.protein.percent, 50.0); // 82 / 165
        assert_eq!(dashboard.bmi_category, "Normal weight");
        assert_eq!(dashboard.recent_meals.len(), 3);
        assert_eq!(dashboard.recent_meals[0].meal_type, "Dinner");
    }

    #[test]
    fn test_dashboard_empty_day() {
        let mut session = Session::sample();
        session.set_today(session.today().succ_opt().unwrap());
        let dashboard = get_dashboard(&session, at(19));
        assert_eq!(dashboard.totals.calories, 0.0);
        assert_eq!(dashboard.progress.fat.bar_percent, 0.0);
        assert!(dashboard.recent_meals.is_empty());
    }
}

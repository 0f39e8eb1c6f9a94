//! Analytics Tool

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::analytics::{
    achievements, logging_streak, macro_breakdown, summarize_calories, Achievement,
    AnalyticsPeriod, CalorieSummary, MacroBreakdown,
};
use crate::models::{Nutrition, NutritionEntry};
use crate::session::Session;

/// Response for get_analytics
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub calories: CalorieSummary,
    /// Macro energy split of everything logged in the period
    pub period_macro_breakdown: MacroBreakdown,
    /// Target split implied by the profile's macro targets
    pub target_breakdown: MacroBreakdown,
    pub logging_streak_days: u32,
    pub achievements: Vec<Achievement>,
}

pub fn get_analytics(session: &Session, period: AnalyticsPeriod) -> AnalyticsResponse {
    let today = session.today();
    let start = today - Duration::days(period.days() as i64 - 1);
    let in_period: Vec<&NutritionEntry> = session
        .entries
        .iter()
        .filter(|e| e.date >= start && e.date <= today)
        .collect();
    let period_total: Nutrition = in_period.iter().map(|e| &e.nutrition).sum();

    let targets = &session.profile.macro_targets;
    let target_nutrition = Nutrition {
        protein: targets.protein as f64,
        carbs: targets.carbs as f64,
        fat: targets.fat as f64,
        ..Default::default()
    };

    let mut protein_by_day: HashMap<NaiveDate, f64> = HashMap::new();
    for entry in &in_period {
        *protein_by_day.entry(entry.date).or_default() += entry.nutrition.protein;
    }
    let protein_days = protein_by_day
        .values()
        .filter(|&&protein| protein >= targets.protein as f64)
        .count();

    let logged_dates = session
        .entries
        .iter()
        .map(|e| e.date)
        .chain(session.calorie_history.iter().map(|d| d.date));
    let streak = logging_streak(logged_dates, today);

    let period_macro_breakdown = macro_breakdown(&period_total);
    let target_breakdown = macro_breakdown(&target_nutrition);

    AnalyticsResponse {
        calories: summarize_calories(&session.calorie_history, period),
        achievements: achievements(streak, protein_days, &period_macro_breakdown, &target_breakdown),
        period_macro_breakdown,
        target_breakdown,
        logging_streak_days: streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::food_database;
    use crate::models::MealType;
    use crate::nutrition::portion_nutrition;

    #[test]
    fn test_sample_analytics() {
        let session = Session::sample();
        let response = get_analytics(&session, AnalyticsPeriod::Week);
        assert_eq!(response.calories.days_logged, 7);
        assert_eq!(response.period_macro_breakdown.fat_percent, 37);
        // target 165/248/61: 660 + 992 + 549 kcal
        assert_eq!(response.target_breakdown.protein_percent, 30);
        assert_eq!(response.target_breakdown.carbs_percent, 45);
        // today plus seven days of history
        assert_eq!(response.logging_streak_days, 8);

        let earned: Vec<(&str, bool)> = response
            .achievements
            .iter()
            .map(|a| (a.title, a.earned))
            .collect();
        assert_eq!(
            earned,
            vec![("7-Day Streak", true), ("Protein Goal", false), ("Balanced Meals", false)]
        );
    }

    #[test]
    fn test_macro_split_covers_period() {
        let mut session = Session::sample();
        let chicken = food_database()
            .into_iter()
            .find(|f| f.name.starts_with("Chicken"))
            .unwrap();
        let yesterday = session.today() - Duration::days(1);
        let week_ago = session.today() - Duration::days(7);
        session.log_portion(portion_nutrition(&chicken, 300.0, "g"), None, MealType::Dinner, yesterday);
        session.log_portion(portion_nutrition(&chicken, 300.0, "g"), None, MealType::Dinner, week_ago);

        let week = get_analytics(&session, AnalyticsPeriod::Week);
        let month = get_analytics(&session, AnalyticsPeriod::Month);
        assert!(week.period_macro_breakdown.protein_percent > 34);
        assert!(month.period_macro_breakdown.protein_percent > week.period_macro_breakdown.protein_percent);
    }
}

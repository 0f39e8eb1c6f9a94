//! Recommendations
//!
//! Category filtering and rule-based suggestions from a day's intake.

use serde::{Deserialize, Serialize};

use crate::analytics::progress_percent;
use crate::models::{
    DailyNutrition, GoalType, MacroTargets, Priority, Recommendation, RecommendationKind,
    UserProfile,
};

/// Daily fiber goal in grams
pub const DAILY_FIBER_GOAL_G: f64 = 30.0;
/// Daily sodium ceiling in milligrams
pub const DAILY_SODIUM_LIMIT_MG: f64 = 2300.0;
/// Below this share of a goal the intake is flagged as low
const LOW_INTAKE_PERCENT: f64 = 80.0;
/// Above this share of the calorie target the day is flagged as over
const OVER_TARGET_PERCENT: f64 = 110.0;
/// Surplus goals need the full target before they count as on track
const SURPLUS_ON_TRACK_PERCENT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationFilter {
    #[default]
    All,
    Nutrition,
    Exercise,
    Health,
    Goal,
}

impl RecommendationFilter {
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(RecommendationFilter::All);
        }
        RecommendationKind::from_str(s).map(|kind| match kind {
            RecommendationKind::Nutrition => RecommendationFilter::Nutrition,
            RecommendationKind::Exercise => RecommendationFilter::Exercise,
            RecommendationKind::Health => RecommendationFilter::Health,
            RecommendationKind::Goal => RecommendationFilter::Goal,
        })
    }

    pub fn accepts(&self, kind: RecommendationKind) -> bool {
        match self {
            RecommendationFilter::All => true,
            RecommendationFilter::Nutrition => kind == RecommendationKind::Nutrition,
            RecommendationFilter::Exercise => kind == RecommendationKind::Exercise,
            RecommendationFilter::Health => kind == RecommendationKind::Health,
            RecommendationFilter::Goal => kind == RecommendationKind::Goal,
        }
    }
}

/// Keep the recommendations the filter accepts, in input order
pub fn filter_recommendations(
    recommendations: &[Recommendation],
    filter: RecommendationFilter,
) -> Vec<Recommendation> {
    recommendations
        .iter()
        .filter(|r| filter.accepts(r.kind))
        .cloned()
        .collect()
}

/// Derive recommendations from a day's intake against the profile's targets.
///
/// Sorted high priority first; ties keep rule order.
pub fn generate_recommendations(
    profile: &UserProfile,
    day: &DailyNutrition,
    targets: &MacroTargets,
) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let total = &day.total;
    let mut next_id = {
        let mut n = 0;
        move || {
            n += 1;
            format!("gen-{}", n)
        }
    };

    let fiber_pct = progress_percent(total.fiber, DAILY_FIBER_GOAL_G);
    if fiber_pct < LOW_INTAKE_PERCENT {
        out.push(Recommendation {
            id: next_id(),
            kind: RecommendationKind::Nutrition,
            title: "Increase Fiber Intake".to_string(),
            description: format!(
                "You're currently at {:.0}% of your daily fiber goal. Try adding more vegetables, fruits, and whole grains to your meals.",
                fiber_pct
            ),
            priority: Priority::Medium,
            category: "Daily Nutrition".to_string(),
            actionable: true,
        });
    }

    let protein_pct = progress_percent(total.protein, targets.protein as f64);
    if protein_pct < LOW_INTAKE_PERCENT {
        out.push(Recommendation {
            id: next_id(),
            kind: RecommendationKind::Nutrition,
            title: "Boost Protein".to_string(),
            description: format!(
                "You've had {:.0}g of your {}g protein target. Spread protein across meals for better muscle protein synthesis.",
                total.protein, targets.protein
            ),
            priority: if profile.goal.goal_type == GoalType::BuildMuscle {
                Priority::High
            } else {
                Priority::Medium
            },
            category: "Macronutrients".to_string(),
            actionable: true,
        });
    }

    let calorie_pct = progress_percent(total.calories, profile.daily_calories as f64);
    if calorie_pct > OVER_TARGET_PERCENT {
        out.push(Recommendation {
            id: next_id(),
            kind: RecommendationKind::Goal,
            title: "Over Calorie Target".to_string(),
            description: format!(
                "You've eaten {:.0} kcal, {:.0}% of your {} kcal target. Consider lighter options for the rest of the day.",
                total.calories, calorie_pct, profile.daily_calories
            ),
            priority: Priority::High,
            category: "Weight Management".to_string(),
            actionable: true,
        });
    } else if !day.is_empty() && calorie_pct >= on_track_floor(profile.goal.goal_type) {
        if let Some(rec) = on_track(profile.goal.goal_type) {
            out.push(Recommendation { id: next_id(), ..rec });
        }
    }

    if total.sodium > DAILY_SODIUM_LIMIT_MG {
        out.push(Recommendation {
            id: next_id(),
            kind: RecommendationKind::Health,
            title: "Watch Your Sodium".to_string(),
            description: format!(
                "Today's sodium is {:.0}mg, above the {:.0}mg daily limit.",
                total.sodium, DAILY_SODIUM_LIMIT_MG
            ),
            priority: Priority::Medium,
            category: "General Health".to_string(),
            actionable: true,
        });
    }

    out.push(Recommendation {
        id: next_id(),
        kind: RecommendationKind::Health,
        title: "Stay Hydrated".to_string(),
        description: "Remember to drink at least 8 glasses of water daily to support your metabolism and overall health.".to_string(),
        priority: Priority::Low,
        category: "General Health".to_string(),
        actionable: true,
    });

    // stable sort keeps rule order among equal priorities
    out.sort_by(|a, b| b.priority.cmp(&a.priority));
    tracing::debug!(count = out.len(), date = %day.date, "Generated recommendations");
    out
}

/// Lowest share of the calorie target that still counts as on track
fn on_track_floor(goal: GoalType) -> f64 {
    match goal {
        GoalType::LoseWeight | GoalType::MaintainWeight => LOW_INTAKE_PERCENT,
        GoalType::GainWeight | GoalType::BuildMuscle => SURPLUS_ON_TRACK_PERCENT,
    }
}

fn on_track(goal: GoalType) -> Option<Recommendation> {
    let (title, description) = match goal {
        GoalType::LoseWeight => (
            "On Track for Weight Loss",
            "Great progress! You're maintaining a healthy calorie deficit. Keep up the consistent eating patterns.",
        ),
        GoalType::GainWeight => (
            "On Track for Weight Gain",
            "You're hitting your calorie surplus. Keep meals regular to gain steadily.",
        ),
        GoalType::BuildMuscle => (
            "Fueling Muscle Growth",
            "Your intake supports a slight surplus. Pair it with consistent strength training.",
        ),
        GoalType::MaintainWeight => return None,
    };

    Some(Recommendation {
        id: String::new(),
        kind: RecommendationKind::Goal,
        title: title.to_string(),
        description: description.to_string(),
        priority: Priority::High,
        category: "Weight Management".to_string(),
        actionable: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_date, sample_entries, sample_profile, sample_recommendations};
    use crate::models::{MealType, Nutrition, NutritionEntry};

    #[test]
    fn test_filter() {
        let recs = sample_recommendations();
        assert_eq!(filter_recommendations(&recs, RecommendationFilter::All).len(), 4);

        let nutrition = filter_recommendations(&recs, RecommendationFilter::Nutrition);
        assert_eq!(nutrition.len(), 2);
        assert_eq!(nutrition[0].id, "1");
        assert_eq!(nutrition[1].id, "4");

        assert!(filter_recommendations(&recs, RecommendationFilter::Exercise).is_empty());
        assert_eq!(RecommendationFilter::from_str("goals"), Some(RecommendationFilter::Goal));
        assert_eq!(RecommendationFilter::from_str("ALL"), Some(RecommendationFilter::All));
    }

    #[test]
    fn test_generate_for_sample_day() {
        let profile = sample_profile();
        let day = DailyNutrition::from_entries(sample_date(), &sample_entries());
        let recs = generate_recommendations(&profile, &day, &profile.macro_targets);

        // fiber 15g of 30g, protein 82g of 165g; 950 kcal is under 80% so no goal card
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Increase Fiber Intake", "Boost Protein", "Stay Hydrated"]);
        assert!(recs[0].description.contains("50%"));
    }

    #[test]
    fn test_generate_over_target_sorted_first() {
        let profile = sample_profile();
        let entry = NutritionEntry {
            id: "x".to_string(),
            date: sample_date(),
            food_name: "Feast".to_string(),
            brand: None,
            quantity: 1.0,
            unit: "serving".to_string(),
            nutrition: Nutrition {
                calories: 3000.0,
                protein: 200.0,
                carbs: 300.0,
                fat: 100.0,
                fiber: 40.0,
                sugar: 50.0,
                sodium: 4000.0,
            },
            meal_type: MealType::Dinner,
        };
        let day = DailyNutrition::from_entries(sample_date(), &[entry]);
        let recs = generate_recommendations(&profile, &day, &profile.macro_targets);

        assert_eq!(recs[0].title, "Over Calorie Target");
        assert_eq!(recs[1].title, "Watch Your Sodium");
        assert_eq!(recs.last().map(|r| r.priority), Some(Priority::Low));
    }

    #[test]
    fn test_generate_on_track() {
        let profile = sample_profile();
        let entry = NutritionEntry {
            id: "y".to_string(),
            date: sample_date(),
            food_name: "Balanced day".to_string(),
            brand: None,
            quantity: 1.0,
            unit: "serving".to_string(),
            nutrition: Nutrition {
                calories: 2100.0,
                protein: 160.0,
                carbs: 230.0,
                fat: 60.0,
                fiber: 30.0,
                sugar: 40.0,
                sodium: 1500.0,
            },
            meal_type: MealType::Lunch,
        };
        let day = DailyNutrition::from_entries(sample_date(), &[entry]);
        let recs = generate_recommendations(&profile, &day, &profile.macro_targets);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "On Track for Weight Loss");
        assert_eq!(recs[0].id, "gen-1");
    }

    fn day_with_calories(calories: f64) -> DailyNutrition {
        let entry = NutritionEntry {
            id: "z".to_string(),
            date: sample_date(),
            food_name: "Day total".to_string(),
            brand: None,
            quantity: 1.0,
            unit: "serving".to_string(),
            nutrition: Nutrition {
                calories,
                protein: 170.0,
                fiber: 30.0,
                ..Nutrition::zero()
            },
            meal_type: MealType::Dinner,
        };
        DailyNutrition::from_entries(sample_date(), &[entry])
    }

    #[test]
    fn test_surplus_goal_needs_full_target() {
        let mut profile = sample_profile();
        profile.goal.goal_type = GoalType::GainWeight;

        // 1870 kcal is 85% of 2200: short of a surplus
        let short = generate_recommendations(&profile, &day_with_calories(1870.0), &profile.macro_targets);
        assert!(short.iter().all(|r| r.kind != RecommendationKind::Goal));

        // 2310 kcal is 105%
        let surplus = generate_recommendations(&profile, &day_with_calories(2310.0), &profile.macro_targets);
        assert_eq!(surplus[0].title, "On Track for Weight Gain");

        profile.goal.goal_type = GoalType::LoseWeight;
        let deficit = generate_recommendations(&profile, &day_with_calories(1870.0), &profile.macro_targets);
        assert_eq!(deficit[0].title, "On Track for Weight Loss");
    }
}

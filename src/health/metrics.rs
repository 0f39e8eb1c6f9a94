//! Health metric formulas
//!
//! Pure functions over a [`UserProfile`]. Nothing here validates its input:
//! a zero height gives a non-finite BMI and negative calories propagate.
//! Use [`UserProfile::validate`] at the boundary instead.

use serde::Serialize;

use crate::models::{ActivityLevel, Gender, GoalType, MacroTargets, UserProfile};

// ============================================================================
// Constant Tables
// ============================================================================

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of daily calories assigned to each macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR
    pub const fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl GoalType {
    pub const fn macro_split(self) -> MacroSplit {
        match self {
            GoalType::LoseWeight => MacroSplit { protein: 0.30, fat: 0.25, carbs: 0.45 },
            GoalType::BuildMuscle => MacroSplit { protein: 0.35, fat: 0.25, carbs: 0.40 },
            GoalType::GainWeight => MacroSplit { protein: 0.20, fat: 0.30, carbs: 0.50 },
            GoalType::MaintainWeight => MacroSplit { protein: 0.25, fat: 0.25, carbs: 0.50 },
        }
    }

    /// kcal added to (or removed from) TDEE for this goal
    pub const fn calorie_delta(self) -> i64 {
        match self {
            GoalType::LoseWeight => -500, // ~0.5 kg/week
            GoalType::GainWeight => 300,
            GoalType::BuildMuscle => 200,
            GoalType::MaintainWeight => 0,
        }
    }
}

// ============================================================================
// BMI Category
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Formulas
// ============================================================================

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor), unrounded
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * profile.age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Total daily energy expenditure in kcal/day, rounded half away from zero
pub fn calculate_tdee(profile: &UserProfile) -> i64 {
    (calculate_bmr(profile) * profile.activity_level.multiplier()).round() as i64
}

/// Body-mass index rounded to one decimal.
///
/// `height` is in cm. A zero height yields a non-finite result.
pub fn calculate_bmi(weight: f64, height: f64) -> f64 {
    let meters = height / 100.0;
    let bmi = weight / (meters * meters);
    (bmi * 10.0).round() / 10.0
}

/// First matching threshold wins; lower bounds are inclusive
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Gram targets for each macro from a daily calorie budget
pub fn calculate_macro_targets(daily_calories: i64, goal_type: GoalType) -> MacroTargets {
    let split = goal_type.macro_split();
    let calories = daily_calories as f64;
    let grams = |share: f64, density: f64| ((calories * share) / density).round() as i64;

    MacroTargets {
        protein: grams(split.protein, KCAL_PER_G_PROTEIN),
        carbs: grams(split.carbs, KCAL_PER_G_CARBS),
        fat: grams(split.fat, KCAL_PER_G_FAT),
    }
}

/// Daily calorie budget for a goal
pub fn calorie_adjustment(goal_type: GoalType, tdee: i64) -> i64 {
    tdee + goal_type.calorie_delta()
}

// ============================================================================
// Summary
// ============================================================================

/// Every derived metric for a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSummary {
    pub bmr: f64,
    pub tdee: i64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmi_category_label: &'static str,
    /// TDEE adjusted for the profile's goal
    pub recommended_calories: i64,
    /// Macro targets for `recommended_calories`
    pub recommended_macros: MacroTargets,
}

impl HealthSummary {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let bmr = calculate_bmr(profile);
        let tdee = calculate_tdee(profile);
        let bmi = calculate_bmi(profile.weight, profile.height);
        let category = bmi_category(bmi);
        let goal = profile.goal.goal_type;
        let recommended_calories = calorie_adjustment(goal, tdee);

        tracing::debug!(
            profile_id = %profile.id,
            bmr,
            tdee,
            bmi,
            recommended_calories,
            "Computed health summary"
        );

        Self {
            bmr,
            tdee,
            bmi,
            bmi_category: category,
            bmi_category_label: category.label(),
            recommended_calories,
            recommended_macros: calculate_macro_targets(recommended_calories, goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_profile;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bmr_male() {
        let profile = sample_profile();
        assert!(approx(calculate_bmr(&profile), 1658.75));
    }

    #[test]
    fn test_bmr_female_and_other_share_offset() {
        let mut profile = sample_profile();
        profile.gender = Gender::Female;
        assert!(approx(calculate_bmr(&profile), 1492.75));
        profile.gender = Gender::Other;
        assert!(approx(calculate_bmr(&profile), 1492.75));
    }

    #[test]
    fn test_bmr_is_linear() {
        let mut profile = sample_profile();
        let base = calculate_bmr(&profile);
        profile.weight += 1.0;
        assert!(approx(calculate_bmr(&profile) - base, 10.0));
        profile.height += 1.0;
        assert!(approx(calculate_bmr(&profile) - base, 16.25));
        profile.age += 1;
        assert!(approx(calculate_bmr(&profile) - base, 11.25));
    }

    #[test]
    fn test_bmr_garbage_in_garbage_out() {
        let mut profile = sample_profile();
        profile.weight = 0.0;
        profile.height = 0.0;
        profile.age = 100;
        assert!(approx(calculate_bmr(&profile), -495.0));
    }

    #[test]
    fn test_tdee() {
        let mut profile = sample_profile();
        assert_eq!(calculate_tdee(&profile), 2571);

        profile.activity_level = ActivityLevel::Light;
        assert_eq!(calculate_tdee(&profile), 2281); // 2280.78125
        profile.activity_level = ActivityLevel::VeryActive;
        assert_eq!(calculate_tdee(&profile), 3152); // 3151.625
    }

    #[test]
    fn test_bmi() {
        assert_eq!(calculate_bmi(70.0, 175.0), 22.9);
        assert_eq!(calculate_bmi(90.0, 180.0), 27.8);
        assert!(!calculate_bmi(70.0, 0.0).is_finite());
    }

    #[test]
    fn test_bmi_category_thresholds() {
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(22.9).label(), "Normal weight");
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.9), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::Obese.to_string(), "Obese");
    }

    #[test]
    fn test_macro_targets_lose_weight() {
        let targets = calculate_macro_targets(2200, GoalType::LoseWeight);
        assert_eq!(targets.protein, 165);
        assert_eq!(targets.carbs, 248); // 247.5 rounds up
        assert_eq!(targets.fat, 61);
    }

    #[test]
    fn test_macro_targets_other_goals() {
        let muscle = calculate_macro_targets(2000, GoalType::BuildMuscle);
        assert_eq!((muscle.protein, muscle.carbs, muscle.fat), (175, 200, 56));

        let gain = calculate_macro_targets(2000, GoalType::GainWeight);
        assert_eq!((gain.protein, gain.carbs, gain.fat), (100, 250, 67));

        let maintain = calculate_macro_targets(2000, GoalType::MaintainWeight);
        assert_eq!((maintain.protein, maintain.carbs, maintain.fat), (125, 250, 56));
    }

    #[test]
    fn test_macro_splits_sum_to_one() {
        for goal in GoalType::ALL {
            let s = goal.macro_split();
            assert!((s.protein + s.fat + s.carbs - 1.0).abs() < 1e-9, "{:?}", goal);
        }
    }

    #[test]
    fn test_calorie_adjustment() {
        assert_eq!(calorie_adjustment(GoalType::LoseWeight, 2571), 2071);
        assert_eq!(calorie_adjustment(GoalType::GainWeight, 2571), 2871);
        assert_eq!(calorie_adjustment(GoalType::BuildMuscle, 2571), 2771);
        assert_eq!(calorie_adjustment(GoalType::MaintainWeight, 2571), 2571);
        assert_eq!(calorie_adjustment(GoalType::LoseWeight, 300), -200);
    }

    #[test]
    fn test_idempotent() {
        let profile = sample_profile();
        assert_eq!(calculate_bmr(&profile), calculate_bmr(&profile));
        assert_eq!(calculate_tdee(&profile), calculate_tdee(&profile));
        assert_eq!(calculate_bmi(70.0, 175.0), calculate_bmi(70.0, 175.0));
        assert_eq!(
            calculate_macro_targets(2200, GoalType::LoseWeight),
            calculate_macro_targets(2200, GoalType::LoseWeight)
        );
        assert_eq!(
            calorie_adjustment(GoalType::GainWeight, 2000),
            calorie_adjustment(GoalType::GainWeight, 2000)
        );
        assert_eq!(HealthSummary::for_profile(&profile), HealthSummary::for_profile(&profile));
    }

    #[test]
    fn test_summary_for_sample_profile() {
        let summary = HealthSummary::for_profile(&sample_profile());
        assert_eq!(summary.tdee, 2571);
        assert_eq!(summary.bmi, 22.9);
        assert_eq!(summary.bmi_category_label, "Normal weight");
        assert_eq!(summary.recommended_calories, 2071);
        assert_eq!(summary.recommended_macros.protein, 155); // 2071 * 0.3 / 4 = 155.3
    }
}

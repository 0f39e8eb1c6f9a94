//! Health metrics module
//!
//! BMR, TDEE, BMI and macro-target derivation from a user profile.

pub mod metrics;

pub use metrics::{
    bmi_category, calculate_bmi, calculate_bmr, calculate_macro_targets, calculate_tdee,
    calorie_adjustment, BmiCategory, HealthSummary, MacroSplit, KCAL_PER_G_CARBS,
    KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

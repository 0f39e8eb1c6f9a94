//! User profile model
//!
//! Biometrics, activity level and goal of the tracked user.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Gender used by the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|level| level.as_str() == normalized)
    }

    /// Label shown next to the activity level on the profile
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::Light => "Light (light exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (moderate exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (hard exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (very hard exercise & physical job)",
        }
    }
}

/// What the user is working towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    LoseWeight,
    GainWeight,
    MaintainWeight,
    BuildMuscle,
}

impl GoalType {
    pub const ALL: [GoalType; 4] = [
        GoalType::LoseWeight,
        GoalType::GainWeight,
        GoalType::MaintainWeight,
        GoalType::BuildMuscle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::LoseWeight => "lose_weight",
            GoalType::GainWeight => "gain_weight",
            GoalType::MaintainWeight => "maintain_weight",
            GoalType::BuildMuscle => "build_muscle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|goal| goal.as_str() == normalized)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::LoseWeight => "Lose Weight",
            GoalType::GainWeight => "Gain Weight",
            GoalType::MaintainWeight => "Maintain Weight",
            GoalType::BuildMuscle => "Build Muscle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// Target weight in kg
    #[serde(default)]
    pub target_weight: Option<f64>,
    /// Timeline in weeks
    #[serde(default)]
    pub timeline: Option<u32>,
}

/// Daily macro-nutrient targets in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// The tracked user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    /// Years
    pub age: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimeters
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    pub goal: Goal,
    pub daily_calories: i64,
    pub macro_targets: MacroTargets,
}

/// Partial update applied by the profile editor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub goal_type: Option<GoalType>,
    pub target_weight: Option<f64>,
    pub timeline: Option<u32>,
    pub medical_conditions: Option<Vec<String>>,
}

impl UserProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.weight.is_none()
            && self.height.is_none()
            && self.gender.is_none()
            && self.activity_level.is_none()
            && self.goal_type.is_none()
            && self.target_weight.is_none()
            && self.timeline.is_none()
            && self.medical_conditions.is_none()
    }
}

impl UserProfile {
    /// Check the biometric invariants the health formulas rely on.
    ///
    /// The formulas themselves never call this; it guards the places where
    /// profiles enter the process.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if self.age == 0 {
            return Err(ProfileError::InvalidAge(self.age));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ProfileError::InvalidWeight(self.weight));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ProfileError::InvalidHeight(self.height));
        }
        if let Some(target) = self.goal.target_weight {
            if !target.is_finite() || target <= 0.0 {
                return Err(ProfileError::InvalidTargetWeight(target));
            }
        }
        Ok(())
    }

    /// Apply an update, returning the edited copy if it validates.
    ///
    /// `self` is left untouched on error.
    pub fn apply_update(&self, update: &UserProfileUpdate) -> Result<Self, ProfileError> {
        let mut edited = self.clone();
        if let Some(name) = &update.name {
            edited.name = name.trim().to_string();
        }
        if let Some(age) = update.age {
            edited.age = age;
        }
        if let Some(weight) = update.weight {
            edited.weight = weight;
        }
        if let Some(height) = update.height {
            edited.height = height;
        }
        if let Some(gender) = update.gender {
            edited.gender = gender;
        }
        if let Some(level) = update.activity_level {
            edited.activity_level = level;
        }
        if let Some(goal_type) = update.goal_type {
            edited.goal.goal_type = goal_type;
        }
        if let Some(target) = update.target_weight {
            edited.goal.target_weight = Some(target);
        }
        if let Some(weeks) = update.timeline {
            edited.goal.timeline = Some(weeks);
        }
        if let Some(conditions) = &update.medical_conditions {
            edited.medical_conditions = conditions.clone();
        }
        edited.validate()?;
        Ok(edited)
    }
}

//! Profile Tools
//!
//! Read and edit the user profile, and derive its health metrics.

use serde::Serialize;

use crate::health::{calculate_macro_targets, HealthSummary};
use crate::models::{MacroTargets, UserProfile, UserProfileUpdate};
use crate::session::Session;

/// Profile with display texts and headline metrics
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
    pub goal_text: &'static str,
    pub activity_text: &'static str,
    pub bmi: f64,
    pub bmi_category: &'static str,
    pub tdee: i64,
}

impl ProfileResponse {
    fn from_profile(profile: &UserProfile) -> Self {
        let summary = HealthSummary::for_profile(profile);
        Self {
            profile: profile.clone(),
            goal_text: profile.goal.goal_type.display_name(),
            activity_text: profile.activity_level.description(),
            bmi: summary.bmi,
            bmi_category: summary.bmi_category_label,
            tdee: summary.tdee,
        }
    }
}

/// Response for get_health_metrics
#[derive(Debug, Serialize)]
pub struct HealthMetricsResponse {
    pub profile_id: String,
    #[serde(flatten)]
    pub summary: HealthSummary,
    /// Macro targets for the profile's own daily calorie budget
    pub current_macro_targets: MacroTargets,
    /// kg still to go towards the target weight (negative = gain)
    pub weight_to_target: Option<f64>,
}

/// Response for update_profile
#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub targets_recalculated: bool,
    pub profile: ProfileResponse,
}

pub fn get_profile(session: &Session) -> ProfileResponse {
    ProfileResponse::from_profile(&session.profile)
}

pub fn get_health_metrics(profile: &UserProfile) -> HealthMetricsResponse {
    let summary = HealthSummary::for_profile(profile);
    HealthMetricsResponse {
        profile_id: profile.id.clone(),
        current_macro_targets: calculate_macro_targets(
            profile.daily_calories,
            profile.goal.goal_type,
        ),
        weight_to_target: profile
            .goal
            .target_weight
            .map(|target| ((profile.weight - target) * 10.0).round() / 10.0),
        summary,
    }
}

/// Apply a profile edit.
///
/// With `recalculate_targets` the daily calories and macro targets are reset
/// to the values derived from the edited profile.
pub fn update_profile(
    session: &mut Session,
    update: UserProfileUpdate,
    recalculate_targets: bool,
) -> Result<UpdateProfileResponse, String> {
    if update.is_empty() && !recalculate_targets {
        return Err("No profile fields to update".to_string());
    }

    let mut edited = session
        .profile
        .apply_update(&update)
        .map_err(|e| format!("Invalid profile: {}", e))?;

    if recalculate_targets {
        let summary = HealthSummary::for_profile(&edited);
        edited.daily_calories = summary.recommended_calories;
        edited.macro_targets = summary.recommended_macros;
    }

    tracing::info!(
        profile_id = %edited.id,
        recalculate_targets,
        daily_calories = edited.daily_calories,
        "Profile updated"
    );
    session.profile = edited;

    Ok(UpdateProfileResponse {
        success: true,
        targets_recalculated: recalculate_targets,
        profile: ProfileResponse::from_profile(&session.profile),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, GoalType};

    #[test]
    fn test_get_profile() {
        let session = Session::sample();
        let response = get_profile(&session);
        assert_eq!(response.goal_text, "Lose Weight");
        assert_eq!(response.activity_text, "Moderate (moderate exercise 3-5 days/week)");
        assert_eq!(response.bmi, 22.9);
        assert_eq!(response.bmi_category, "Normal weight");
        assert_eq!(response.tdee, 2571);
    }

    #[test]
    fn test_health_metrics() {
        let session = Session::sample();
        let metrics = get_health_metrics(&session.profile);
        assert_eq!(metrics.summary.recommended_calories, 2071);
        assert_eq!(metrics.current_macro_targets, session.profile.macro_targets);
        assert_eq!(metrics.weight_to_target, Some(5.0));

        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["tdee"], 2571);
        assert_eq!(json["bmi_category"], "normal_weight");
    }

    #[test]
    fn test_update_profile_recalculates() {
        let mut session = Session::sample();
        let update = UserProfileUpdate {
            activity_level: Some(ActivityLevel::Active),
            goal_type: Some(GoalType::MaintainWeight),
            ..Default::default()
        };
        let response = update_profile(&mut session, update, true).unwrap();
        assert!(response.targets_recalculated);
        // 1658.75 * 1.725 = 2861.34
        assert_eq!(session.profile.daily_calories, 2861);
        assert_eq!(session.profile.macro_targets.protein, 179);
    }

    #[test]
    fn test_update_profile_rejects_invalid() {
        let mut session = Session::sample();
        let before = session.profile.clone();
        let update = UserProfileUpdate {
            age: Some(0),
            ..Default::default()
        };
        assert!(update_profile(&mut session, update, false).is_err());
        assert_eq!(session.profile, before);
        assert!(update_profile(&mut session, UserProfileUpdate::default(), false).is_err());
    }
}

//! NutriSense MCP Server Implementation
//!
//! Exposes the tracker tools over MCP.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::analytics::AnalyticsPeriod;
use crate::models::{ActivityLevel, Gender, GoalType, MealType, UserProfileUpdate};
use crate::recommendations::RecommendationFilter;
use crate::session::Session;
use crate::tools::status::StatusTracker;
use crate::tools::{analytics, dashboard, foods, profile, recommendations};

/// NutriSense MCP Service
#[derive(Clone)]
pub struct NutriSenseService {
    status_tracker: Arc<StatusTracker>,
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<NutriSenseService>,
}

impl NutriSenseService {
    pub fn new(session: Session, profile_path: Option<PathBuf>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(profile_path)),
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, McpError> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
                McpError::invalid_params(format!("Invalid date '{}', expected YYYY-MM-DD", s), None)
            })
        })
        .transpose()
}

fn parse_enum<T>(value: Option<&str>, field: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>, McpError> {
    value
        .map(|s| {
            parse(s).ok_or_else(|| {
                McpError::invalid_params(format!("Invalid {}: '{}'", field, s), None)
            })
        })
        .transpose()
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Weight in kg
    pub weight: Option<f64>,
    /// Height in cm
    pub height: Option<f64>,
    /// male, female or other
    pub gender: Option<String>,
    /// sedentary, light, moderate, active or very_active
    pub activity_level: Option<String>,
    /// lose_weight, gain_weight, maintain_weight or build_muscle
    pub goal_type: Option<String>,
    /// Target weight in kg
    pub target_weight: Option<f64>,
    /// Timeline in weeks
    pub timeline: Option<u32>,
    pub medical_conditions: Option<Vec<String>>,
    /// Reset daily calories and macro targets from the edited profile
    #[serde(default)]
    pub recalculate_targets: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    /// Part of the food name; empty lists everything
    #[serde(default)]
    pub query: String,
    /// Maximum results (1-100); 0 uses the default
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_search_limit() -> usize { foods::DEFAULT_SEARCH_LIMIT }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddFoodParams {
    /// Exact food name from search_foods (case-insensitive)
    pub food_name: String,
    pub quantity: f64,
    /// g, kg, oz, lb, or serving
    #[serde(default = "default_unit")]
    pub unit: String,
    /// breakfast, lunch, dinner or snack
    #[serde(default = "default_meal_type")]
    pub meal_type: String,
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
}

fn default_unit() -> String { "g".to_string() }
fn default_meal_type() -> String { "snack".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListEntriesParams {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetAnalyticsParams {
    /// 7d, 30d, 90d or 1y
    #[serde(default = "default_period")]
    pub period: String,
}

fn default_period() -> String { "7d".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetRecommendationsParams {
    /// all, nutrition, goal, health or exercise
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String { "all".to_string() }

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutriSenseService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriSense service including build info and process information")]
    async fn nutrisense_status(&self) -> Result<CallToolResult, McpError> {
        let entries = self.session.lock().await.entries.len();
        to_json(&self.status_tracker.get_status(entries))
    }

    #[tool(description = "Get instructions for using the NutriSense tools. Call this first when unsure which tool to use.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Profile ---

    #[tool(description = "Get the user profile with goal and activity descriptions, BMI and TDEE")]
    async fn get_profile(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        to_json(&profile::get_profile(&session))
    }

    #[tool(description = "Calculate BMR, TDEE, BMI and category, goal-adjusted daily calories and macro targets for the user profile")]
    async fn get_health_metrics(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        to_json(&profile::get_health_metrics(&session.profile))
    }

    #[tool(description = "Update profile fields. Set recalculate_targets=true to reset daily calories and macro targets from the edited profile.")]
    async fn update_profile(&self, Parameters(p): Parameters<UpdateProfileParams>) -> Result<CallToolResult, McpError> {
        let update = UserProfileUpdate {
            name: p.name,
            age: p.age,
            weight: p.weight,
            height: p.height,
            gender: parse_enum(p.gender.as_deref(), "gender", Gender::from_str)?,
            activity_level: parse_enum(p.activity_level.as_deref(), "activity_level", ActivityLevel::from_str)?,
            goal_type: parse_enum(p.goal_type.as_deref(), "goal_type", GoalType::from_str)?,
            target_weight: p.target_weight,
            timeline: p.timeline,
            medical_conditions: p.medical_conditions,
        };
        let mut session = self.session.lock().await;
        let result = profile::update_profile(&mut session, update, p.recalculate_targets)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Dashboard ---

    #[tool(description = "Get today's dashboard: greeting, intake totals, progress against calorie and macro targets, BMI and recent meals")]
    async fn get_dashboard(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        let now = chrono::Local::now().time();
        to_json(&dashboard::get_dashboard(&session, now))
    }

    // --- Foods ---

    #[tool(description = "Search the food database by name")]
    async fn search_foods(&self, Parameters(p): Parameters<SearchFoodsParams>) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        to_json(&foods::search_foods(&session, &p.query, p.limit))
    }

    #[tool(description = "Log a portion of a food from the database to a meal. Weight units use the food's serving weight; other units count servings.")]
    async fn add_food(&self, Parameters(p): Parameters<AddFoodParams>) -> Result<CallToolResult, McpError> {
        let date = parse_date(p.date.as_deref())?;
        let meal_type = parse_enum(Some(p.meal_type.as_str()), "meal_type", MealType::from_str)?
            .unwrap_or_default();
        let mut session = self.session.lock().await;
        let result = foods::add_food(&mut session, &p.food_name, p.quantity, &p.unit, meal_type, date)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List the food log for a day with totals")]
    async fn list_entries(&self, Parameters(p): Parameters<ListEntriesParams>) -> Result<CallToolResult, McpError> {
        let date = parse_date(p.date.as_deref())?;
        let session = self.session.lock().await;
        to_json(&foods::list_entries(&session, date))
    }

    // --- Analytics ---

    #[tool(description = "Get calorie history summary and chart data for a period (7d, 30d, 90d, 1y), the period's macro split, logging streak and achievements")]
    async fn get_analytics(&self, Parameters(p): Parameters<GetAnalyticsParams>) -> Result<CallToolResult, McpError> {
        let period = parse_enum(Some(p.period.as_str()), "period", AnalyticsPeriod::from_str)?
            .unwrap_or_default();
        let session = self.session.lock().await;
        to_json(&analytics::get_analytics(&session, period))
    }

    // --- Recommendations ---

    #[tool(description = "Get personalized and general recommendations, optionally filtered by category (all, nutrition, goal, health, exercise)")]
    async fn get_recommendations(&self, Parameters(p): Parameters<GetRecommendationsParams>) -> Result<CallToolResult, McpError> {
        let filter = parse_enum(Some(p.category.as_str()), "category", RecommendationFilter::from_str)?
            .unwrap_or_default();
        let session = self.session.lock().await;
        to_json(&recommendations::get_recommendations(&session, filter))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriSenseService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutrisense".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriSense".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriSense - nutrition tracking and health metrics. \
                 Call usage_instructions first. \
                 Profile: get_profile, get_health_metrics, update_profile. \
                 Food: search_foods, add_food, list_entries. \
                 Overview: get_dashboard, get_analytics, get_recommendations. \
                 Status: nutrisense_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(None).unwrap(), None);
        assert_eq!(
            parse_date(Some("2025-01-27")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 27)
        );
        assert!(parse_date(Some("yesterday")).is_err());
    }

    #[test]
    fn test_parse_enum() {
        assert_eq!(
            parse_enum(Some("very_active"), "activity_level", ActivityLevel::from_str).unwrap(),
            Some(ActivityLevel::VeryActive)
        );
        assert!(parse_enum(Some("couch"), "activity_level", ActivityLevel::from_str).is_err());
        assert_eq!(parse_enum::<GoalType>(None, "goal_type", GoalType::from_str).unwrap(), None);
    }

    #[test]
    fn test_unknown_meal_type_rejected() {
        assert_eq!(
            parse_enum(Some("Lunch"), "meal_type", MealType::from_str).unwrap(),
            Some(MealType::Lunch)
        );
        let err = parse_enum(Some("supper"), "meal_type", MealType::from_str).unwrap_err();
        assert!(err.message.contains("meal_type"));
    }
}

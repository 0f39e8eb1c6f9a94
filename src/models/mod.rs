//! Data models
//!
//! Plain records passed between the health formulas, tools and server.

mod entry;
mod food;
mod nutrition;
mod profile;
mod recommendation;

pub use entry::{DailyNutrition, MealType, NutritionEntry};
pub use food::{search_foods, FoodItem};
pub use nutrition::Nutrition;
pub use profile::{
    ActivityLevel, Gender, Goal, GoalType, MacroTargets, UserProfile, UserProfileUpdate,
};
pub use recommendation::{Priority, Recommendation, RecommendationKind};

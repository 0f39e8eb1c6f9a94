//! Recommendation model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Nutrition,
    Exercise,
    Health,
    Goal,
}

impl RecommendationKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "nutrition" => Some(RecommendationKind::Nutrition),
            "exercise" => Some(RecommendationKind::Exercise),
            "health" => Some(RecommendationKind::Health),
            "goal" | "goals" => Some(RecommendationKind::Goal),
            _ => None,
        }
    }
}

/// Ordered low < medium < high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
    pub actionable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(RecommendationKind::from_str("Goals"), Some(RecommendationKind::Goal));
        assert_eq!(RecommendationKind::from_str("sleep"), None);
    }
}

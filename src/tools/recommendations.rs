//! Recommendation Tool

use serde::Serialize;

use crate::models::{DailyNutrition, Recommendation};
use crate::recommendations::{filter_recommendations, generate_recommendations, RecommendationFilter};
use crate::session::Session;

/// Response for get_recommendations
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub filter: RecommendationFilter,
    pub personalized: Vec<Recommendation>,
    pub general: Vec<Recommendation>,
    pub total: usize,
}

pub fn get_recommendations(session: &Session, filter: RecommendationFilter) -> RecommendationsResponse {
    let today = session.today();
    let day = DailyNutrition::from_entries(today, session.entries_on(today));
    let generated = generate_recommendations(&session.profile, &day, &session.profile.macro_targets);

    let personalized = filter_recommendations(&generated, filter);
    let general = filter_recommendations(&session.recommendations, filter);
    let total = personalized.len() + general.len();

    RecommendationsResponse {
        filter,
        personalized,
        general,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_recommendations() {
        let session = Session::sample();
        let all = get_recommendations(&session, RecommendationFilter::All);
        assert_eq!(all.general.len(), 4);
        assert_eq!(all.personalized.len(), 3);
        assert_eq!(all.total, 7);

        let health = get_recommendations(&session, RecommendationFilter::Health);
        assert_eq!(health.general.len(), 1);
        assert_eq!(health.personalized[0].title, "Stay Hydrated");
    }
}

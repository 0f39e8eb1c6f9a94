//! Status Tool
//!
//! Runtime status of the service and usage instructions for assistants.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// How to use the NutriSense tools
pub const USAGE_INSTRUCTIONS: &str = r#"
# NutriSense Instructions

NutriSense tracks what the user eats and derives health metrics from their profile.
Nothing is saved between runs; the log lives in memory.

## Profile & Metrics

- `get_profile` - profile with goal/activity texts, BMI and TDEE
- `get_health_metrics` - BMR, TDEE, BMI + category, goal-adjusted calories and macro targets
- `update_profile` - edit any of: name, age, weight (kg), height (cm), gender,
  activity_level, goal_type, target_weight, timeline, medical_conditions.
  Set `recalculate_targets: true` to reset daily calories and macro targets
  from the edited profile.

Enum values:
- gender: male | female | other
- activity_level: sedentary | light | moderate | active | very_active
- goal_type: lose_weight | gain_weight | maintain_weight | build_muscle

## Logging Food

1. `search_foods` with part of the name (empty query lists everything)
2. `add_food` with the exact food name, a quantity and a unit
   - weight units (g, kg, oz, lb) are converted using the food's serving weight
   - any other unit (e.g. "serving") counts servings
   - meal_type: breakfast | lunch | dinner | snack
3. `list_entries` to review a day's log (defaults to today)

## Overview

- `get_dashboard` - today's totals, progress against targets, recent meals
- `get_analytics` - calorie history for a period (7d, 30d, 90d, 1y), macro split, streak
- `get_recommendations` - personalized and general tips; category: all | nutrition | goal | health | exercise

Dates use ISO format: YYYY-MM-DD
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub build: BuildInfo,
    /// Profile file in use, or None for the sample profile
    pub profile_path: Option<String>,
    pub entries_logged: usize,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

pub struct StatusTracker {
    start_time: Instant,
    profile_path: Option<PathBuf>,
}

impl StatusTracker {
    pub fn new(profile_path: Option<PathBuf>) -> Self {
        Self {
            start_time: Instant::now(),
            profile_path,
        }
    }

    pub fn get_status(&self, entries_logged: usize) -> ServiceStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build: BuildInfo::current(),
            profile_path: self.profile_path.as_ref().map(|p| p.display().to_string()),
            entries_logged,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

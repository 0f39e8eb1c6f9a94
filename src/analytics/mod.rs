//! Analytics
//!
//! Calorie history summaries, macro energy breakdown and progress figures.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::health::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::models::Nutrition;

/// Days within this fraction of the target count as on target
pub const TARGET_TOLERANCE: f64 = 0.10;
/// Streak length that earns the streak achievement
pub const STREAK_ACHIEVEMENT_DAYS: u32 = 7;
/// Days at the protein target that earn the protein achievement
pub const PROTEIN_GOAL_DAYS: usize = 5;
/// Largest per-macro gap, in percentage points, that still counts as balanced
pub const MACRO_BALANCE_POINTS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnalyticsPeriod {
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl AnalyticsPeriod {
    pub fn days(&self) -> usize {
        match self {
            AnalyticsPeriod::Week => 7,
            AnalyticsPeriod::Month => 30,
            AnalyticsPeriod::Quarter => 90,
            AnalyticsPeriod::Year => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsPeriod::Week => "7 Days",
            AnalyticsPeriod::Month => "30 Days",
            AnalyticsPeriod::Quarter => "90 Days",
            AnalyticsPeriod::Year => "1 Year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "7d" | "week" => Some(AnalyticsPeriod::Week),
            "30d" | "month" => Some(AnalyticsPeriod::Month),
            "90d" | "quarter" => Some(AnalyticsPeriod::Quarter),
            "1y" | "year" => Some(AnalyticsPeriod::Year),
            _ => None,
        }
    }
}

/// Calories eaten on one day against that day's target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCalories {
    /// Short weekday, e.g. "Mon"
    pub day: String,
    pub date: NaiveDate,
    pub calories: f64,
    pub target: f64,
}

impl DailyCalories {
    pub fn new(date: NaiveDate, calories: f64, target: f64) -> Self {
        Self {
            day: date.weekday().to_string(),
            date,
            calories,
            target,
        }
    }

    pub fn within_target(&self) -> bool {
        self.target > 0.0 && (self.calories - self.target).abs() <= self.target * TARGET_TOLERANCE
    }
}

/// One bar of the calorie chart, scaled against the period maximum
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub day: String,
    pub date: NaiveDate,
    pub calories: f64,
    pub target: f64,
    /// calories / max calories, 0..=1
    pub height_ratio: f64,
    /// target / max calories; may exceed 1
    pub target_ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalorieSummary {
    pub period: AnalyticsPeriod,
    pub period_label: &'static str,
    pub days_logged: usize,
    pub average_calories: f64,
    pub max_calories: f64,
    pub min_calories: f64,
    pub days_on_target: usize,
    /// Share of logged days on target, 0..=100
    pub adherence_percent: f64,
    pub bars: Vec<ChartBar>,
}

/// Summarize the trailing `period.days()` records of a history.
///
/// An empty history yields an all-zero summary.
pub fn summarize_calories(history: &[DailyCalories], period: AnalyticsPeriod) -> CalorieSummary {
    let start = history.len().saturating_sub(period.days());
    let window = &history[start..];

    if window.is_empty() {
        return CalorieSummary {
            period,
            period_label: period.label(),
            days_logged: 0,
            average_calories: 0.0,
            max_calories: 0.0,
            min_calories: 0.0,
            days_on_target: 0,
            adherence_percent: 0.0,
            bars: Vec::new(),
        };
    }

    let max = window.iter().map(|d| d.calories).fold(f64::MIN, f64::max);
    let min = window.iter().map(|d| d.calories).fold(f64::MAX, f64::min);
    let average = window.iter().map(|d| d.calories).sum::<f64>() / window.len() as f64;
    let on_target = window.iter().filter(|d| d.within_target()).count();
    let ratio = |v: f64| if max > 0.0 { v / max } else { 0.0 };

    let bars = window
        .iter()
        .map(|d| ChartBar {
            day: d.day.clone(),
            date: d.date,
            calories: d.calories,
            target: d.target,
            height_ratio: ratio(d.calories),
            target_ratio: ratio(d.target),
        })
        .collect();

    CalorieSummary {
        period,
        period_label: period.label(),
        days_logged: window.len(),
        average_calories: average.round(),
        max_calories: max,
        min_calories: min,
        days_on_target: on_target,
        adherence_percent: (on_target as f64 / window.len() as f64 * 100.0).round(),
        bars,
    }
}

/// Percent of macro energy coming from each macro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MacroBreakdown {
    pub protein_percent: i64,
    pub carbs_percent: i64,
    pub fat_percent: i64,
}

pub fn macro_breakdown(nutrition: &Nutrition) -> MacroBreakdown {
    let protein = nutrition.protein * KCAL_PER_G_PROTEIN;
    let carbs = nutrition.carbs * KCAL_PER_G_CARBS;
    let fat = nutrition.fat * KCAL_PER_G_FAT;
    let total = protein + carbs + fat;

    if total <= 0.0 {
        return MacroBreakdown::default();
    }

    let pct = |kcal: f64| (kcal / total * 100.0).round() as i64;
    MacroBreakdown {
        protein_percent: pct(protein),
        carbs_percent: pct(carbs),
        fat_percent: pct(fat),
    }
}

impl MacroBreakdown {
    /// Every macro within `MACRO_BALANCE_POINTS` of the target split
    pub fn is_balanced_against(&self, target: &MacroBreakdown) -> bool {
        if *self == MacroBreakdown::default() {
            return false;
        }
        (self.protein_percent - target.protein_percent).abs() <= MACRO_BALANCE_POINTS
            && (self.carbs_percent - target.carbs_percent).abs() <= MACRO_BALANCE_POINTS
            && (self.fat_percent - target.fat_percent).abs() <= MACRO_BALANCE_POINTS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub description: String,
    pub earned: bool,
}

/// Achievements for a period.
///
/// `protein_days` is the number of days in the period at or above the
/// protein target; `macros` is the period's split against `target`.
pub fn achievements(
    streak: u32,
    protein_days: usize,
    macros: &MacroBreakdown,
    target: &MacroBreakdown,
) -> Vec<Achievement> {
    vec![
        Achievement {
            title: "7-Day Streak",
            description: format!("Logged food for {} days in a row", streak),
            earned: streak >= STREAK_ACHIEVEMENT_DAYS,
        },
        Achievement {
            title: "Protein Goal",
            description: format!("Hit protein target {} days this period", protein_days),
            earned: protein_days >= PROTEIN_GOAL_DAYS,
        },
        Achievement {
            title: "Balanced Meals",
            description: format!(
                "Macro split within {} points of target",
                MACRO_BALANCE_POINTS
            ),
            earned: macros.is_balanced_against(target),
        },
    ]
}

/// `current / target * 100`, unclamped; 0 when the target is not positive
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if target > 0.0 {
        current / target * 100.0
    } else {
        0.0
    }
}

/// Progress clamped to 100 for drawing a bar
pub fn bar_fill_percent(current: f64, target: f64) -> f64 {
    progress_percent(current, target).clamp(0.0, 100.0)
}

/// Consecutive logged days ending at `today`
pub fn logging_streak<I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let logged: std::collections::HashSet<NaiveDate> = dates.into_iter().collect();
    let mut streak = 0;
    let mut day = today;
    while logged.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

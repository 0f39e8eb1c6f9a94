//! Print the health metrics for the configured profile
//! Usage: cargo run --bin health_report -- [profile.json]

use std::path::PathBuf;

use nutrisense::config::{load_profile_file, Config};
use nutrisense::health::HealthSummary;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let profile = match args.get(1) {
        Some(path) => load_profile_file(&PathBuf::from(path))?,
        None => Config::from_env()?.load_profile()?,
    };
    let summary = HealthSummary::for_profile(&profile);

    println!("Profile: {} ({})", profile.name, profile.id);
    println!(
        "  {} y, {} kg, {} cm, {}",
        profile.age,
        profile.weight,
        profile.height,
        profile.gender.as_str()
    );
    println!("  Activity: {}", profile.activity_level.description());
    println!("  Goal: {}", profile.goal.goal_type.display_name());
    println!();
    println!("BMR:  {:.2} kcal/day", summary.bmr);
    println!("TDEE: {} kcal/day", summary.tdee);
    println!("BMI:  {:.1} ({})", summary.bmi, summary.bmi_category);
    println!();
    println!("Recommended calories: {} kcal/day", summary.recommended_calories);
    println!(
        "Macro targets: protein {}g, carbs {}g, fat {}g",
        summary.recommended_macros.protein,
        summary.recommended_macros.carbs,
        summary.recommended_macros.fat
    );

    Ok(())
}

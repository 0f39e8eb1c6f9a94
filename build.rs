//! Build script for NutriSense
//!
//! Bumps the persistent build counter and exposes build metadata to the crate.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

fn read_counter(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter_path = Path::new(COUNTER_FILE);
    let build_number = read_counter(counter_path) + 1;

    fs::write(counter_path, build_number.to_string())
        .expect("Failed to persist build counter");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=NUTRISENSE_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=NUTRISENSE_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=NUTRISENSE_BUILD_PROFILE={}", profile);
}

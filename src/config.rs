//! Runtime configuration
//!
//! Read once from the environment at startup.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::data;
use crate::error::{ConfigError, ConfigResult};
use crate::models::UserProfile;

/// Path to a JSON profile file
pub const PROFILE_PATH_VAR: &str = "NUTRISENSE_PROFILE_PATH";
/// Fixed "today" (YYYY-MM-DD), mostly for demos and tests
pub const TODAY_VAR: &str = "NUTRISENSE_TODAY";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub profile_path: Option<PathBuf>,
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let profile_path = get(PROFILE_PATH_VAR).map(PathBuf::from);
        let today = match get(TODAY_VAR) {
            Some(value) => Some(parse_date(TODAY_VAR, &value)?),
            None => None,
        };

        Ok(Self {
            profile_path,
            today,
        })
    }

    /// Configured date, or the local date
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Load the configured profile, falling back to the sample profile
    pub fn load_profile(&self) -> ConfigResult<UserProfile> {
        match &self.profile_path {
            Some(path) => load_profile_file(path),
            None => {
                tracing::info!("No {} set, using the sample profile", PROFILE_PATH_VAR);
                Ok(data::sample_profile())
            }
        }
    }
}

fn parse_date(var: &'static str, value: &str) -> ConfigResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ConfigError::InvalidDate {
        var,
        value: value.to_string(),
    })
}

/// Read, parse and validate a profile file
pub fn load_profile_file(path: &Path) -> ConfigResult<UserProfile> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ProfileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let profile: UserProfile =
        serde_json::from_str(&text).map_err(|source| ConfigError::ProfileParse {
            path: path.to_path_buf(),
            source,
        })?;

    profile.validate().map_err(|source| ConfigError::InvalidProfile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), profile_id = %profile.id, "Loaded profile");
    Ok(profile)
}

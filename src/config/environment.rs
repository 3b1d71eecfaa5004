// ABOUTME: Environment configuration for the weekly report run (seed, days, output, display)
// ABOUTME: Defaults come from constants; environment variables and flags override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for a report run

use crate::constants::{env_vars, generation};
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// When to open saved charts in an image viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Never open a viewer
    Off,
    /// Open a viewer only when a graphical session is detected
    #[default]
    Auto,
    /// Always try to open a viewer
    On,
}

impl FromStr for DisplayMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" | "false" | "0" => Ok(Self::Off),
            "auto" => Ok(Self::Auto),
            "on" | "true" | "1" => Ok(Self::On),
            other => Err(AppError::config(format!(
                "Unknown display mode '{other}' (expected off, auto, or on)"
            ))),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Auto => write!(f, "auto"),
            Self::On => write!(f, "on"),
        }
    }
}

/// Parameters of one report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Seed for the synthetic data stream
    pub seed: u64,
    /// Number of days ending on the report date
    pub days: u32,
    /// Directory chart images are written to
    pub output_dir: PathBuf,
    /// Interactive display policy
    pub display: DisplayMode,
    /// Last day of the report; `None` means the local date at run time
    pub report_date: Option<NaiveDate>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            seed: generation::DEFAULT_SEED,
            days: generation::DEFAULT_DAYS,
            output_dir: PathBuf::from("."),
            display: DisplayMode::default(),
            report_date: None,
        }
    }
}

impl ReportConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            seed: parse_var(&lookup, env_vars::SEED)?.unwrap_or(defaults.seed),
            days: parse_var(&lookup, env_vars::DAYS)?.unwrap_or(defaults.days),
            output_dir: lookup(env_vars::OUTPUT_DIR)
                .filter(|dir| !dir.trim().is_empty())
                .map_or(defaults.output_dir, PathBuf::from),
            display: parse_var(&lookup, env_vars::DISPLAY)?.unwrap_or(defaults.display),
            report_date: parse_var(&lookup, env_vars::DATE)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the day count is too small to correlate metrics
    pub fn validate(&self) -> AppResult<()> {
        if self.days < generation::MIN_REPORT_DAYS {
            return Err(AppError::config(format!(
                "Report must cover at least {} days to correlate metrics, got {}",
                generation::MIN_REPORT_DAYS,
                self.days
            )));
        }
        Ok(())
    }

    /// Report date, falling back to the local calendar date
    #[must_use]
    pub fn resolve_date(&self) -> NaiveDate {
        self.report_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Structured summary for startup logging
    #[must_use]
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "seed": self.seed,
            "days": self.days,
            "output_dir": self.output_dir.display().to_string(),
            "display": self.display.to_string(),
            "report_date": self.report_date.map(|date| date.to_string()),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key)
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                AppError::config(format!("Invalid value '{raw}' for {key}: {e}"))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ReportConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.seed, 42);
        assert_eq!(config.days, 7);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ReportConfig::from_lookup(lookup_from(&[
            (env_vars::SEED, "7"),
            (env_vars::DAYS, "14"),
            (env_vars::OUTPUT_DIR, "/tmp/charts"),
            (env_vars::DISPLAY, "OFF"),
            (env_vars::DATE, "2025-10-19"),
        ]))
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.days, 14);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/charts"));
        assert_eq!(config.display, DisplayMode::Off);
        assert_eq!(
            config.resolve_date(),
            NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
        );
    }

    #[test]
    fn test_malformed_values_rejected() {
        let error = ReportConfig::from_lookup(lookup_from(&[(env_vars::SEED, "forty-two")]))
            .unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ConfigInvalid);
        assert!(error.message.contains(env_vars::SEED));

        assert!(ReportConfig::from_lookup(lookup_from(&[(env_vars::DATE, "19/10/2025")])).is_err());
        assert!(ReportConfig::from_lookup(lookup_from(&[(env_vars::DISPLAY, "maybe")])).is_err());
    }

    #[test]
    fn test_zero_days_rejected() {
        assert!(ReportConfig::from_lookup(lookup_from(&[(env_vars::DAYS, "0")])).is_err());
    }

    #[test]
    fn test_single_day_rejected() {
        let error = ReportConfig::from_lookup(lookup_from(&[(env_vars::DAYS, "1")])).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ConfigInvalid);
        assert!(error.message.contains("got 1"));

        let config = ReportConfig::from_lookup(lookup_from(&[(env_vars::DAYS, "2")])).unwrap();
        assert_eq!(config.days, 2);
    }
}

// ABOUTME: Environment-based configuration for the doughcalc CLI and library callers
// ABOUTME: Typed settings with defaults from constants and thiserror parse errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Configuration
//!
//! Everything is read from the environment; unset variables fall back to the
//! defaults in [`doughcalc_core::constants`]. A variable that is set but
//! cannot be parsed is an error rather than a silent default.
//!
//! ```bash
//! export DOUGHCALC_UNIT_SYSTEM=imperial
//! export DOUGHCALC_DOUGH_RESIDUE_PERCENT=3.5
//! export DOUGHCALC_OUTPUT_FORMAT=json
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use doughcalc_core::constants::{env_config, limits};
use doughcalc_core::errors::AppError;
use doughcalc_core::formatters::OutputFormat;
use doughcalc_core::models::{Settings, UnitSystem};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but is not valid UTF-8
    #[error("Environment variable error for {name}: {source}")]
    EnvVar {
        /// Variable name
        name: &'static str,
        /// Underlying error
        source: env::VarError,
    },

    /// A variable is set but its value cannot be parsed
    #[error("Parse error for {name}: '{value}' is not {expected}")]
    Parse {
        /// Variable name
        name: &'static str,
        /// Raw value found
        value: String,
        /// What was expected
        expected: &'static str,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// How command results are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Aligned human-readable table
    #[default]
    Table,
    /// Pretty JSON document
    Json,
    /// TOON document
    Toon,
}

impl ReportFormat {
    /// Serialization format, or `None` for the table renderer
    #[must_use]
    pub const fn output_format(self) -> Option<OutputFormat> {
        match self {
            Self::Table => None,
            Self::Json => Some(OutputFormat::Json),
            Self::Toon => Some(OutputFormat::Toon),
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "toon" => Ok(Self::Toon),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Unit system and dough residue handed to the editor
    pub settings: Settings,
    /// Default rendering for CLI output
    pub output_format: ReportFormat,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// The dough residue is clamped to its accepted range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        let unit_system = parse_env(
            env_config::UNIT_SYSTEM,
            "metric or imperial",
            defaults.unit_system,
            |raw| raw.parse::<UnitSystem>().ok(),
        )?;

        let dough_residue_percentage = parse_env(
            env_config::DOUGH_RESIDUE_PERCENT,
            "a number",
            defaults.dough_residue_percentage,
            |raw| raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        )?
        .clamp(limits::MIN_DOUGH_RESIDUE, limits::MAX_DOUGH_RESIDUE);

        let output_format = parse_env(
            env_config::OUTPUT_FORMAT,
            "table, json or toon",
            ReportFormat::default(),
            |raw| raw.parse::<ReportFormat>().ok(),
        )?;

        Ok(Self {
            settings: Settings {
                unit_system,
                dough_residue_percentage,
            },
            output_format,
        })
    }
}

fn parse_env<T>(
    name: &'static str,
    expected: &'static str,
    default: T,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(default),
        Ok(raw) => parse(&raw).ok_or(ConfigError::Parse {
            name,
            value: raw,
            expected,
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(source) => Err(ConfigError::EnvVar { name, source }),
    }
}

// ABOUTME: Output format abstraction for serializing recipes and engine results
// ABOUTME: Supports JSON (default) and TOON (token-efficient), plus display number formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Pluggable serialization formats for command output, and the fixed-precision
//! number formatting used wherever weights and percentages are shown.
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, universal compatibility
//! - **TOON**: Token-efficient format (requires the `toon` feature)

use serde::Serialize;
use std::error::Error;
use std::fmt;

use crate::models::UnitSystem;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default) - universal compatibility
    #[default]
    Json,
    /// TOON format - Token-Oriented Object Notation
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "toon" => Self::Toon,
            _ => Self::Json,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize>(_data: &T, format: OutputFormat) -> Result<String, FormatError> {
    Err(FormatError {
        message: "TOON output requires the `toon` feature".to_owned(),
        format,
    })
}

/// Format serializable data to the specified output format
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON serialization fails
/// - TOON encoding fails, or the `toon` feature is disabled
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Toon => encode_toon(data, format)?,
    };

    Ok(FormattedOutput { data, format })
}

/// Format serializable data to pretty-printed output (for display)
///
/// # Errors
/// Same conditions as [`format_output`].
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        // TOON is already human-readable
        OutputFormat::Toon => encode_toon(data, format)?,
    };

    Ok(FormattedOutput { data, format })
}

/// Weight with one decimal and the unit label, e.g. `386.9 g`
///
/// The value must already be expressed in `unit_system`'s weight unit.
#[must_use]
pub fn format_weight(value: f64, unit_system: UnitSystem) -> String {
    format!("{value:.1} {}", unit_system.weight_unit())
}

/// Percentage with one decimal, e.g. `65.0%`
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Temperature with no decimals and the unit label, e.g. `24 °C`
#[must_use]
pub fn format_temperature(value: f64, unit_system: UnitSystem) -> String {
    format!("{value:.0} {}", unit_system.temperature_unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_param_defaults_to_json() {
        assert_eq!(OutputFormat::from_str_param("TOON"), OutputFormat::Toon);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Json);
    }

    #[test]
    fn test_format_output_json() {
        let output = format_output(&vec![1, 2, 3], OutputFormat::Json).unwrap();
        assert_eq!(output.data, "[1,2,3]");
        assert_eq!(output.format, OutputFormat::Json);
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_weight(386.904_76, UnitSystem::Metric), "386.9 g");
        assert_eq!(format_weight(1.0, UnitSystem::Imperial), "1.0 oz");
        assert_eq!(format_percentage(65.0), "65.0%");
        assert_eq!(format_temperature(75.2, UnitSystem::Imperial), "75 °F");
    }
}

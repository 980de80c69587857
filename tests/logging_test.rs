// ABOUTME: Tests for logging configuration resolution and subscriber setup
// ABOUTME: Validates env parsing, the verbose override and one-time initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use doughcalc::logging::{LogFormat, LoggingConfig, RecipeLogger};
use serial_test::serial;

fn clear_env() {
    for name in [
        "RUST_LOG",
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
        "SERVICE_NAME",
    ] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_are_quiet_and_compact() {
    clear_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "doughcalc");
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var("RUST_LOG", "trace");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "trace");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
}

#[test]
fn test_verbose_raises_quiet_levels_only() {
    let quiet = LoggingConfig::default().verbose(true);
    assert_eq!(quiet.level, "debug");

    let trace = LoggingConfig {
        level: "trace".to_owned(),
        ..LoggingConfig::default()
    }
    .verbose(true);
    assert_eq!(trace.level, "trace");

    let untouched = LoggingConfig::default().verbose(false);
    assert_eq!(untouched.level, "warn");
}

#[test]
fn test_second_init_is_an_error() {
    let config = LoggingConfig::default();
    // The first call may race another test for the global subscriber
    let _ = config.init();
    assert!(config.init().is_err());

    RecipeLogger::log_recalculation("Pizza Dough", "forward", 1000.0, 65.0);
}

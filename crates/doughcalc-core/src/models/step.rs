// ABOUTME: Preparation step carried along with a recipe
// ABOUTME: Opaque to the engine; timers and bake sessions key off its identity and duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One preparation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Stable identity
    pub id: Uuid,
    /// Instruction text
    pub description: String,
    /// Waiting time after the step, in minutes
    pub waiting_time_minutes: Option<u32>,
    /// Target temperature
    pub temperature_celsius: Option<f64>,
    /// Position within the recipe
    pub order: u32,
}

impl Step {
    /// Create a step without timer or temperature
    #[must_use]
    pub fn new(description: impl Into<String>, order: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            waiting_time_minutes: None,
            temperature_celsius: None,
            order,
        }
    }

    /// Set the waiting time
    #[must_use]
    pub const fn with_waiting_time(mut self, minutes: u32) -> Self {
        self.waiting_time_minutes = Some(minutes);
        self
    }

    /// Set the target temperature
    #[must_use]
    pub const fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature_celsius = Some(celsius);
        self
    }

    /// A step has a timer when it carries a positive waiting time
    #[must_use]
    pub const fn has_timer(&self) -> bool {
        matches!(self.waiting_time_minutes, Some(minutes) if minutes > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_timer() {
        assert!(!Step::new("Mix", 0).has_timer());
        assert!(!Step::new("Rest", 1).with_waiting_time(0).has_timer());
        assert!(Step::new("Bulk", 2).with_waiting_time(120).has_timer());
    }
}

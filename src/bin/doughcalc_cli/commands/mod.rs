// ABOUTME: Re-exports command modules for the doughcalc CLI
// ABOUTME: Holds the resolved configuration shared by every command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use doughcalc::config::{AppConfig, ReportFormat};
use doughcalc::editor::RecipeEditor;
use doughcalc::models::{CalculatorMode, Settings};

pub mod recipe;
pub mod tools;

/// Settings and output format resolved from env and flags
pub struct CommandContext {
    pub settings: Settings,
    pub format: ReportFormat,
}

impl CommandContext {
    /// Context for `config`, with the dough residue clamped like the env value
    pub fn new(config: &AppConfig) -> Self {
        Self {
            settings: RecipeEditor::new(CalculatorMode::Forward, config.settings).settings(),
            format: config.output_format,
        }
    }

    /// Editor in `mode` using the resolved settings
    pub fn editor(&self, mode: CalculatorMode) -> RecipeEditor {
        RecipeEditor::new(mode, self.settings)
    }
}

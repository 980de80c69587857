// ABOUTME: doughcalc CLI - baker's-percentage calculator on JSON recipe files
// ABOUTME: Handles recipe init, forward/reverse recalculation, scaling, pre-ferments and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Write the default four-ball recipe
//! doughcalc init pizza.json
//!
//! # Derive weights from percentages and save them
//! doughcalc forward pizza.json --write
//!
//! # Derive percentages and hydration from weighed ingredients
//! doughcalc reverse pizza.json
//!
//! # Bake ten balls instead of four
//! doughcalc scale pizza.json --balls 10
//!
//! # Split 200.1 g of poolish into flour, water and yeast
//! doughcalc preferment 200.1 --kind poolish --yeast 0.1
//!
//! # Convert units
//! doughcalc convert g-to-oz 28.3495
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use doughcalc::config::{AppConfig, ReportFormat};
use doughcalc::errors::{AppError, AppResult, ErrorResponse};
use doughcalc::logging::LoggingConfig;
use doughcalc::models::{PreFermentType, UnitSystem};
use tracing::{debug, error};

use commands::CommandContext;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "doughcalc",
    version,
    about = "Baker's-percentage dough calculator",
    long_about = "Compute ingredient weights from baker's percentages, derive percentages and hydration from weights, and split pre-ferments into flour, water and leavening."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format override (table, json, toon)
    #[arg(long, short = 'f', global = true)]
    format: Option<ReportFormat>,

    /// Display unit system override (metric, imperial)
    #[arg(long, short = 'u', global = true)]
    unit: Option<UnitSystem>,

    /// Dough residue percentage override (clamped to 0-20)
    #[arg(long, global = true)]
    residue: Option<f64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Write a new recipe file seeded with the default pizza dough
    Init {
        /// Recipe file to create
        path: PathBuf,

        /// Recipe name
        #[arg(long)]
        name: Option<String>,

        /// Number of dough balls
        #[arg(long)]
        balls: Option<u32>,

        /// Grams per dough ball
        #[arg(long)]
        weight_per_ball: Option<f64>,

        /// Overall hydration percentage
        #[arg(long)]
        hydration: Option<f64>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Derive weights from percentages, hydration and dough size
    Forward {
        /// Recipe file
        path: PathBuf,

        /// Treat the file's weights as authoritative and re-derive the dough
        /// size from them before the forward pass
        #[arg(long)]
        from_weights: bool,

        /// Save the result back to the file
        #[arg(long)]
        write: bool,
    },

    /// Derive percentages and hydration from ingredient weights
    Reverse {
        /// Recipe file
        path: PathBuf,

        /// Save the result back to the file
        #[arg(long)]
        write: bool,
    },

    /// Re-size a recipe by ball count or multiplier
    Scale {
        /// Recipe file
        path: PathBuf,

        #[command(flatten)]
        target: ScaleTarget,

        /// Save the result back to the file
        #[arg(long)]
        write: bool,
    },

    /// Split a pre-ferment weight into flour, water and leavening
    Preferment {
        /// Total pre-ferment weight, in the display unit
        weight: f64,

        /// Pre-ferment type
        #[arg(long, value_enum, default_value_t = PreFermentKind::Poolish)]
        kind: PreFermentKind,

        /// Hydration override (defaults to the type's hydration)
        #[arg(long)]
        hydration: Option<f64>,

        /// Yeast percentage relative to pre-ferment flour
        #[arg(long)]
        yeast: Option<f64>,
    },

    /// Convert a weight or temperature
    Convert {
        /// Conversion to run
        #[arg(value_enum)]
        conversion: Conversion,

        /// Value to convert
        value: f64,
    },
}

/// Exactly one of `--balls` or `--multiplier`
#[derive(Args)]
#[group(required = true, multiple = false)]
struct ScaleTarget {
    /// New ball count
    #[arg(long)]
    balls: Option<u32>,

    /// Weight-per-ball multiplier
    #[arg(long)]
    multiplier: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PreFermentKind {
    Poolish,
    Biga,
    Custom,
}

impl From<PreFermentKind> for PreFermentType {
    fn from(kind: PreFermentKind) -> Self {
        match kind {
            PreFermentKind::Poolish => Self::Poolish,
            PreFermentKind::Biga => Self::Biga,
            PreFermentKind::Custom => Self::Custom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Conversion {
    /// Grams to ounces
    GToOz,
    /// Ounces to grams
    OzToG,
    /// Celsius to Fahrenheit
    CToF,
    /// Fahrenheit to Celsius
    FToC,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("warning: logging disabled: {e}");
    }

    let format_override = cli.format;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, error = %e, "command failed");
            report_error(e, format_override)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::from_env().map_err(AppError::from)?;
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    if let Some(unit) = cli.unit {
        config.settings.unit_system = unit;
    }
    if let Some(residue) = cli.residue {
        config.settings.dough_residue_percentage = residue;
    }
    debug!(?config, "configuration resolved");

    let ctx = CommandContext::new(&config);

    match cli.command {
        Command::Init {
            path,
            name,
            balls,
            weight_per_ball,
            hydration,
            force,
        } => commands::recipe::init(
            &ctx,
            &path,
            commands::recipe::InitOptions {
                name,
                balls,
                weight_per_ball,
                hydration,
                force,
            },
        ),
        Command::Forward {
            path,
            from_weights,
            write,
        } => commands::recipe::forward(&ctx, &path, from_weights, write),
        Command::Reverse { path, write } => commands::recipe::reverse(&ctx, &path, write),
        Command::Scale {
            path,
            target,
            write,
        } => commands::recipe::scale(&ctx, &path, target.balls, target.multiplier, write),
        Command::Preferment {
            weight,
            kind,
            hydration,
            yeast,
        } => commands::tools::preferment(&ctx, weight, kind.into(), hydration, yeast),
        Command::Convert { conversion, value } => commands::tools::convert(&ctx, conversion, value),
    }
}

fn report_error(error: AppError, format: Option<ReportFormat>) -> ExitCode {
    let exit_code = u8::try_from(error.exit_code()).unwrap_or(1);

    if matches!(format, Some(ReportFormat::Json)) {
        let response = ErrorResponse::from(error);
        match serde_json::to_string_pretty(&response) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => eprintln!("error: {e}"),
        }
    } else {
        eprintln!("error: {error}");
    }

    ExitCode::from(exit_code)
}

// ABOUTME: Larder CLI - command-line access to matching, conversion, and reconciliation
// ABOUTME: Parses arguments, builds the service from the environment, and prints JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Grocery list for a JSON document {"required": [...], "pantry": [...]}
//! larder-cli reconcile --input plan.json
//!
//! # Same, reading stdin and including statistics
//! cat plan.json | larder-cli reconcile --input - --stats
//!
//! # Confidence that two names denote the same ingredient
//! larder-cli match "chicken breast" chicken --threshold 0.8
//!
//! # Unit conversion
//! larder-cli convert 4 tbsp tsp
//!
//! # Ranked substitutes
//! larder-cli substitutes butter
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use larder::logging::LoggingConfig;
use larder::service::LarderService;

#[derive(Parser)]
#[command(
    name = "larder-cli",
    about = "Larder ingredient matching and pantry reconciliation",
    long_about = "Matches ingredient names, converts cooking units, and computes grocery lists from recipe requirements and pantry inventory. Results are printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the grocery list for required lines and a pantry
    Reconcile {
        /// JSON file with `required` and `pantry` arrays, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Multiply every required quantity (e.g. servings / base servings)
        #[arg(long)]
        scale: Option<f64>,

        /// Include covered lines and run statistics
        #[arg(long)]
        stats: bool,
    },

    /// Score two ingredient names
    Match {
        /// First ingredient name
        a: String,

        /// Second ingredient name
        b: String,

        /// Confidence threshold (defaults to the configured threshold)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Convert a quantity between units
    Convert {
        /// Quantity to convert
        quantity: f64,

        /// Source unit
        from: String,

        /// Target unit
        to: String,
    },

    /// List substitutes for an ingredient, best first
    Substitutes {
        /// Ingredient name
        ingredient: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let service = LarderService::from_env()?;
    debug!(threshold = service.config().match_threshold, "Service configured");

    let output = match cli.command {
        Command::Reconcile {
            input,
            scale,
            stats,
        } => commands::reconcile(&service, &input, scale, stats)?,
        Command::Match { a, b, threshold } => commands::match_names(&service, &a, &b, threshold),
        Command::Convert { quantity, from, to } => {
            commands::convert(&service, quantity, &from, &to)?
        }
        Command::Substitutes { ingredient } => commands::substitutes(&service, &ingredient),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

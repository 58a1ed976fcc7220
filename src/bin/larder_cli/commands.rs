// ABOUTME: Subcommand implementations for the Larder CLI
// ABOUTME: Each command reads its input, calls the service, and returns a JSON value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

use larder::errors::AppResult;
use larder::models::{PantryItem, RequiredLine};
use larder::service::LarderService;

/// Reconciliation input document
#[derive(Deserialize)]
struct ReconcileInput {
    #[serde(default)]
    required: Vec<RequiredLine>,
    #[serde(default)]
    pantry: Vec<PantryItem>,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

pub fn reconcile(
    service: &LarderService,
    input: &Path,
    scale: Option<f64>,
    with_stats: bool,
) -> Result<Value> {
    let document: ReconcileInput = serde_json::from_str(&read_input(input)?)?;

    let required = match scale {
        Some(factor) => document
            .required
            .iter()
            .map(|line| line.scaled(factor))
            .collect::<AppResult<Vec<_>>>()?,
        None => document.required,
    };

    info!(
        required = required.len(),
        pantry = document.pantry.len(),
        "Reconciling"
    );

    let value = if with_stats {
        serde_json::to_value(service.reconcile_with_stats(&required, &document.pantry))?
    } else {
        serde_json::to_value(service.reconcile(&required, &document.pantry))?
    };
    Ok(value)
}

pub fn match_names(service: &LarderService, a: &str, b: &str, threshold: Option<f64>) -> Value {
    let threshold = threshold.unwrap_or(service.config().match_threshold);
    json!({
        "a": a,
        "b": b,
        "canonical_a": service.canonical_of(a),
        "canonical_b": service.canonical_of(b),
        "confidence": service.confidence(a, b),
        "threshold": threshold,
        "matches": service.matches_at(a, b, threshold),
    })
}

pub fn convert(service: &LarderService, quantity: f64, from: &str, to: &str) -> Result<Value> {
    let result = service.convert(quantity, from, to)?;
    Ok(json!({
        "quantity": quantity,
        "from": from,
        "to": to,
        "result": result,
    }))
}

pub fn substitutes(service: &LarderService, ingredient: &str) -> Value {
    json!({
        "ingredient": ingredient,
        "canonical": service.canonical_of(ingredient),
        "substitutes": service.substitutes(ingredient),
    })
}

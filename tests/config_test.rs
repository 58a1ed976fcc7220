// ABOUTME: Integration tests for environment configuration and YAML table overlays
// ABOUTME: Mutates process environment serially and writes overlay files to temp dirs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::env;
use std::fs;
use std::path::PathBuf;

use helpers::{assert_close, pantry, required};
use larder::config::{LarderConfig, TableOverlay};
use larder::errors::ErrorCode;
use larder::service::LarderService;
use serial_test::serial;
use tempfile::TempDir;

const VARIABLES: [&str; 4] = [
    "LARDER_MATCH_THRESHOLD",
    "LARDER_TABLES_PATH",
    "LARDER_DISABLE_SYNONYMS",
    "LARDER_DISABLE_SUBSTITUTIONS",
];

fn clear_env() {
    for variable in VARIABLES {
        env::remove_var(variable);
    }
}

const OVERLAY: &str = r"
synonyms:
  - canonical: aubergine
    synonyms: [eggplant, brinjal]
substitutions:
  - ingredient: aubergine
    substitute_name: zucchini
    ratio: 1.0
    tier: good
    notes: Softer texture
units:
  - key: pinch
    category: volume
    to_base_factor: 0.31
    aliases: [pinches]
  - key: sprig
    name: sprig
    category: count
    aliases: [sprigs]
";

fn write_overlay(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("tables.yaml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = LarderConfig::from_env();
    assert_eq!(config, LarderConfig::default());
    assert_close(config.match_threshold, 0.7, 0.0);
}

#[test]
#[serial]
fn test_from_env_reads_all_variables() {
    clear_env();
    env::set_var("LARDER_MATCH_THRESHOLD", "0.9");
    env::set_var("LARDER_TABLES_PATH", "/etc/larder/tables.yaml");
    env::set_var("LARDER_DISABLE_SYNONYMS", "1");
    env::set_var("LARDER_DISABLE_SUBSTITUTIONS", "yes");

    let config = LarderConfig::from_env();
    clear_env();

    assert_close(config.match_threshold, 0.9, 1e-12);
    assert_eq!(config.tables_path, Some(PathBuf::from("/etc/larder/tables.yaml")));
    assert!(!config.synonyms_enabled);
    assert!(!config.substitutions_enabled);
}

#[test]
#[serial]
fn test_invalid_threshold_falls_back() {
    clear_env();
    env::set_var("LARDER_MATCH_THRESHOLD", "-0.2");
    let config = LarderConfig::from_env();
    clear_env();
    assert_close(config.match_threshold, 0.7, 0.0);
}

#[test]
#[serial]
fn test_service_from_env_applies_overlay() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_overlay(&dir, OVERLAY);
    env::set_var("LARDER_TABLES_PATH", &path);

    let service = LarderService::from_env();
    clear_env();
    let service = service.unwrap();

    assert_eq!(service.canonical_of("Brinjal"), "aubergine");
    assert!(service.matches("eggplant", "aubergine"));
    assert_close(service.convert(2.0, "pinches", "ml").unwrap(), 0.62, 1e-9);
    assert!(service.units().can_convert("sprig", "sprigs"));
    assert!(!service.units().can_convert("sprig", "clove"));

    let names: Vec<_> = service
        .substitutes("eggplant")
        .iter()
        .map(|entry| entry.substitute_name().to_owned())
        .collect();
    assert!(names.contains(&"zucchini".to_owned()));
}

#[test]
fn test_overlay_substitute_used_in_reconciliation() {
    let overlay = TableOverlay::from_yaml_str(OVERLAY).unwrap();
    let service = LarderService::with_overlay(LarderConfig::default(), overlay).unwrap();

    let outcome = service.reconcile_with_stats(
        &[required("aubergine", 2.0, "whole")],
        &[pantry("zucchini", 1.0, "whole")],
    );
    let line = outcome.grocery_list.get("aubergine", "whole").unwrap();
    assert_close(line.quantity, 1.0, 1e-9);
    assert_eq!(line.substitution.as_ref().unwrap().substitute_name, "zucchini");
}

#[test]
fn test_missing_overlay_file_is_config_missing() {
    let dir = TempDir::new().unwrap();
    let config = LarderConfig {
        tables_path: Some(dir.path().join("absent.yaml")),
        ..LarderConfig::default()
    };

    let error = LarderService::from_config(config).err().unwrap();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.contains("absent.yaml"));
}

#[test]
fn test_overlay_path_is_directory_is_config_invalid() {
    let dir = TempDir::new().unwrap();
    let error = TableOverlay::load(dir.path()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_malformed_overlay_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_overlay(&dir, "synonyms: {canonical: [unterminated");
    let error = TableOverlay::load(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    let path = write_overlay(&dir, "recipes: []\n");
    assert!(TableOverlay::load(&path).is_err());
}

#[test]
fn test_overlay_unit_colliding_with_builtin_rejected() {
    let overlay = TableOverlay::from_yaml_str(
        r"
units:
  - key: tsp
    category: volume
    to_base_factor: 5.0
",
    )
    .unwrap();
    let error = LarderService::with_overlay(LarderConfig::default(), overlay)
        .err()
        .unwrap();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_overlay_linear_unit_needs_factor() {
    let overlay = TableOverlay::from_yaml_str(
        r"
units:
  - key: glug
    category: volume
",
    )
    .unwrap();
    assert_eq!(
        overlay.unit_definitions().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}

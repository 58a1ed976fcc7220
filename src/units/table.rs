// ABOUTME: Built-in unit definitions for cooking measurements
// ABOUTME: Metric, US customary, and imperial volume and weight, temperature, length, and counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{TemperatureScale, UnitCategory, UnitDefinition};

/// (key, name, base units per unit, aliases)
type LinearRow = (&'static str, &'static str, f64, &'static [&'static str]);

/// Base unit: milliliter
const VOLUME: &[LinearRow] = &[
    // Metric
    ("ml", "milliliter", 1.0, &["milliliters", "millilitre", "millilitres"]),
    ("l", "liter", 1000.0, &["liters", "litre", "litres"]),
    ("dl", "deciliter", 100.0, &["deciliters", "decilitre", "decilitres"]),
    // US customary
    ("tsp", "teaspoon", 4.928_92, &["teaspoons", "t", "tsps"]),
    ("tbsp", "tablespoon", 14.786_8, &["tablespoons", "tbs", "tbsps"]),
    ("fl oz", "fluid ounce", 29.573_5, &["fluid ounces", "floz", "fl. oz.", "fl oz."]),
    ("cup", "cup", 236.588, &["cups", "c"]),
    ("pint", "pint", 473.176, &["pints", "pt", "pts"]),
    ("quart", "quart", 946.353, &["quarts", "qt", "qts"]),
    ("gallon", "gallon", 3785.41, &["gallons", "gal", "gals"]),
    // Imperial
    ("imperial tsp", "imperial teaspoon", 5.919_39, &["imperial teaspoons", "imp tsp"]),
    ("imperial tbsp", "imperial tablespoon", 17.758_2, &["imperial tablespoons", "imp tbsp"]),
    ("imperial fl oz", "imperial fluid ounce", 28.413_1, &["imperial fluid ounces", "imp fl oz"]),
    ("imperial cup", "imperial cup", 284.131, &["imperial cups", "imp cup"]),
    ("imperial pint", "imperial pint", 568.261, &["imperial pints", "imp pint"]),
    ("imperial quart", "imperial quart", 1136.52, &["imperial quarts", "imp quart"]),
    ("imperial gallon", "imperial gallon", 4546.09, &["imperial gallons", "imp gallon"]),
];

/// Base unit: gram
const WEIGHT: &[LinearRow] = &[
    ("mg", "milligram", 0.001, &["milligrams", "milligramme", "milligrammes"]),
    ("g", "gram", 1.0, &["grams", "gramme", "grammes"]),
    ("kg", "kilogram", 1000.0, &["kilograms", "kilogramme", "kilogrammes"]),
    ("oz", "ounce", 28.349_5, &["ounces", "oz.", "ozs"]),
    ("lb", "pound", 453.592, &["pounds", "pound", "lbs", "lbs.", "#"]),
    ("ton", "ton", 907_185.0, &["tons", "short ton"]),
    ("metric ton", "metric ton", 1_000_000.0, &["metric tons", "tonne", "tonnes"]),
];

/// Base unit: millimeter
const LENGTH: &[LinearRow] = &[
    ("mm", "millimeter", 1.0, &["millimeters", "millimetre", "millimetres"]),
    ("cm", "centimeter", 10.0, &["centimeters", "centimetre", "centimetres"]),
    ("m", "meter", 1000.0, &["meters", "metre", "metres"]),
    ("in", "inch", 25.4, &["inches", "inch", "\""]),
    ("ft", "foot", 304.8, &["feet", "foot", "'"]),
];

/// (key, aliases); the name equals the key
const COUNT: &[(&str, &[&str])] = &[
    ("piece", &["pieces", "pcs", "pc", "whole", "wholes", "item", "items"]),
    ("clove", &["cloves"]),
    ("slice", &["slices"]),
    ("head", &["heads"]),
    ("bunch", &["bunches"]),
    ("stalk", &["stalks"]),
    ("can", &["cans"]),
    ("package", &["packages", "pkg", "pkgs"]),
    ("bottle", &["bottles"]),
    ("box", &["boxes"]),
    ("bag", &["bags"]),
];

fn linear_rows(category: UnitCategory, rows: &[LinearRow]) -> Vec<UnitDefinition> {
    rows.iter()
        .filter_map(|&(key, name, to_base, aliases)| {
            UnitDefinition::linear(key, name, category, to_base, aliases).ok()
        })
        .collect()
}

/// Every built-in unit; keys and aliases are collision-free
pub(super) fn builtin_definitions() -> Vec<UnitDefinition> {
    let mut definitions = linear_rows(UnitCategory::Volume, VOLUME);
    definitions.extend(linear_rows(UnitCategory::Weight, WEIGHT));
    definitions.extend([
        UnitDefinition::temperature(
            "°c",
            "Celsius",
            TemperatureScale::Celsius,
            &["celsius", "centigrade", "deg c", "degree c"],
        ),
        UnitDefinition::temperature(
            "°f",
            "Fahrenheit",
            TemperatureScale::Fahrenheit,
            &["fahrenheit", "f", "deg f", "degree f"],
        ),
        UnitDefinition::temperature(
            "k",
            "Kelvin",
            TemperatureScale::Kelvin,
            &["kelvin", "deg k", "degree k"],
        ),
    ]);
    definitions.extend(linear_rows(UnitCategory::Length, LENGTH));
    definitions.extend(
        COUNT
            .iter()
            .map(|&(key, aliases)| UnitDefinition::count(key, key, aliases)),
    );
    definitions
}

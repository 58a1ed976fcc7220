// ABOUTME: Ordered grocery list keyed by normalized ingredient name and unit
// ABOUTME: Preserves first-seen order and records per-run reconciliation statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::collections::HashMap;
use std::{slice, vec};

use larder_core::models::{normalize_token, GroceryLineItem};

/// Key of a grocery line: normalized ingredient name and unit text
type LineKey = (String, String);

fn line_key(name: &str, unit: &str) -> LineKey {
    (normalize_token(name), unit.to_owned())
}

/// Grocery lines in first-seen order with keyed lookup
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GroceryList {
    lines: Vec<GroceryLineItem>,
    #[serde(skip)]
    positions: HashMap<LineKey, usize>,
}

impl GroceryList {
    /// Empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line for `(name, unit)`, created with zero quantity on first use
    ///
    /// The first spelling of `name` seen is kept for display.
    pub fn entry(&mut self, name: &str, unit: &str) -> &mut GroceryLineItem {
        let key = line_key(name, unit);
        let position = self.positions.get(&key).copied().unwrap_or_else(|| {
            self.lines.push(GroceryLineItem::new(name, unit));
            let position = self.lines.len() - 1;
            self.positions.insert(key, position);
            position
        });
        &mut self.lines[position]
    }

    /// Line for `(name, unit)`; the name is compared case-insensitively
    #[must_use]
    pub fn get(&self, name: &str, unit: &str) -> Option<&GroceryLineItem> {
        self.positions
            .get(&line_key(name, unit))
            .map(|&position| &self.lines[position])
    }

    /// Lines in first-seen order
    pub fn iter(&self) -> slice::Iter<'_, GroceryLineItem> {
        self.lines.iter()
    }

    /// Mutable lines in first-seen order
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, GroceryLineItem> {
        self.lines.iter_mut()
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the list has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove lines with nothing left to buy and return them in order
    pub fn take_settled(&mut self) -> Vec<GroceryLineItem> {
        let (outstanding, settled): (Vec<_>, Vec<_>) = self
            .lines
            .drain(..)
            .partition(GroceryLineItem::is_outstanding);
        self.lines = outstanding;
        self.positions = self
            .lines
            .iter()
            .enumerate()
            .map(|(position, line)| (line_key(&line.name, &line.unit), position))
            .collect();
        settled
    }

    /// Consume the list, returning its lines
    #[must_use]
    pub fn into_lines(self) -> Vec<GroceryLineItem> {
        self.lines
    }
}

impl<'a> IntoIterator for &'a GroceryList {
    type Item = &'a GroceryLineItem;
    type IntoIter = slice::Iter<'a, GroceryLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut GroceryList {
    type Item = &'a mut GroceryLineItem;
    type IntoIter = slice::IterMut<'a, GroceryLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for GroceryList {
    type Item = GroceryLineItem;
    type IntoIter = vec::IntoIter<GroceryLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

/// Counters describing one reconciliation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconciliationStats {
    /// Required lines read before aggregation
    pub lines_aggregated: usize,
    /// Pantry quantities subtracted from a grocery line
    pub pantry_deductions: usize,
    /// Grocery lines reduced by a substitute
    pub substitutions_applied: usize,
    /// Deductions skipped because units could not be converted
    pub conversions_skipped: usize,
    /// Lines removed because nothing was left to buy
    pub lines_dropped: usize,
}

// ABOUTME: Canonical ingredient index mapping every known synonym to one canonical name
// ABOUTME: Reverse lookup is built lazily and rebuilt wholesale after runtime additions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Canonical Index
//!
//! Holds the synonym table (canonical name followed by its synonyms) and a derived
//! reverse index from normalized synonym to canonical name. The reverse index is
//! built on first query and dropped whenever the table changes.
//!
//! Build rules:
//! - every canonical name maps to itself
//! - a synonym maps to the first canonical entry that lists it
//!
//! # Thread Safety
//!
//! State lives behind a `RwLock`. Readers either see a complete index or trigger
//! a rebuild under the write lock; a partially built index is never visible.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::iter;
use std::sync::RwLock;
use tracing::{debug, warn};

use crate::data::SYNONYM_TABLE;
use crate::normalize::normalize_name;

// ============================================================================
// Synonym Entries
// ============================================================================

/// A canonical ingredient name with its ordered synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// Canonical name
    pub canonical: String,
    /// Known alternative spellings and variants
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl SynonymEntry {
    /// Create an entry
    #[must_use]
    pub fn new(canonical: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            canonical: canonical.into(),
            synonyms,
        }
    }
}

// ============================================================================
// Index State
// ============================================================================

#[derive(Debug, Default)]
struct IndexState {
    /// Entries in table order, canonical names normalized
    entries: Vec<SynonymEntry>,
    /// Position of each canonical name within `entries`
    positions: HashMap<String, usize>,
    /// Normalized synonym -> canonical name; `None` until first query
    reverse: Option<HashMap<String, String>>,
}

impl IndexState {
    fn append(&mut self, canonical: &str, synonyms: impl IntoIterator<Item = String>) {
        let canonical = normalize_name(canonical);
        let position = self.positions.get(&canonical).copied().unwrap_or_else(|| {
            self.entries.push(SynonymEntry::new(canonical.clone(), Vec::new()));
            let position = self.entries.len() - 1;
            self.positions.insert(canonical, position);
            position
        });
        self.entries[position].synonyms.extend(synonyms);
        self.reverse = None;
    }

    fn build_reverse(&self) -> HashMap<String, String> {
        let mut reverse = HashMap::new();
        for entry in &self.entries {
            reverse.insert(entry.canonical.clone(), entry.canonical.clone());
        }
        for entry in &self.entries {
            for synonym in &entry.synonyms {
                reverse
                    .entry(normalize_name(synonym))
                    .or_insert_with(|| entry.canonical.clone());
            }
        }
        debug!(
            canonicals = self.entries.len(),
            keys = reverse.len(),
            "Built canonical ingredient index"
        );
        reverse
    }

    fn lookup(&self, normalized: &str) -> Option<&String> {
        self.reverse.as_ref().and_then(|reverse| reverse.get(normalized))
    }
}

// ============================================================================
// Canonical Index
// ============================================================================

/// Thread-safe synonym table with a lazily built reverse index
///
/// Shared across threads via `Arc`. All queries are total: names without a
/// mapping resolve to themselves.
#[derive(Debug)]
pub struct CanonicalIndex {
    state: RwLock<IndexState>,
}

impl CanonicalIndex {
    /// Create an index over the built-in synonym table
    #[must_use]
    pub fn new() -> Self {
        Self::from_entries(SYNONYM_TABLE.iter().map(|(canonical, synonyms)| {
            SynonymEntry::new(*canonical, synonyms.iter().map(|s| (*s).to_owned()).collect())
        }))
    }

    /// Create an empty index
    #[must_use]
    pub fn empty() -> Self {
        Self {
            state: RwLock::new(IndexState::default()),
        }
    }

    /// Create an index from entries in table order
    ///
    /// Repeated canonical names are merged, their synonyms appended in order.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = SynonymEntry>) -> Self {
        let mut state = IndexState::default();
        for entry in entries {
            state.append(&entry.canonical, entry.synonyms);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Shared normalization: lowercase and trim
    #[must_use]
    pub fn normalize(name: &str) -> String {
        normalize_name(name)
    }

    /// Canonical name for `name`, or `name` unchanged if it has no mapping
    #[must_use]
    pub fn canonical_of(&self, name: &str) -> String {
        let normalized = normalize_name(name);
        self.with_index(|state| state.lookup(&normalized).cloned())
            .flatten()
            .unwrap_or_else(|| name.to_owned())
    }

    /// Canonical name first, then its synonyms, without duplicates
    ///
    /// Names with no mapping return a single-element list holding the input.
    #[must_use]
    pub fn synonyms_of(&self, name: &str) -> Vec<String> {
        let canonical = self.canonical_of(name);
        let listed = self
            .with_index(|state| {
                state
                    .positions
                    .get(&normalize_name(&canonical))
                    .map(|&position| state.entries[position].synonyms.clone())
            })
            .flatten()
            .unwrap_or_default();

        let mut seen = HashSet::new();
        iter::once(canonical)
            .chain(listed)
            .filter(|candidate| seen.insert(normalize_name(candidate)))
            .collect()
    }

    /// Whether both names resolve to the same canonical name
    #[must_use]
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        normalize_name(&self.canonical_of(a)) == normalize_name(&self.canonical_of(b))
    }

    /// Append synonyms to a canonical entry, creating it if needed
    ///
    /// The reverse index is rebuilt on the next query.
    pub fn add_synonym<I, S>(&self, canonical: &str, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Ok(mut state) = self.state.write() else {
            warn!(canonical, "Canonical index lock poisoned, synonym not added");
            return;
        };
        state.append(canonical, synonyms.into_iter().map(Into::into));
    }

    /// Drop the cached reverse index so the next query rebuilds it
    pub fn invalidate(&self) {
        if let Ok(mut state) = self.state.write() {
            state.reverse = None;
        }
    }

    /// All canonical names, sorted
    #[must_use]
    pub fn canonicals(&self) -> Vec<String> {
        let Ok(state) = self.state.read() else {
            return Vec::new();
        };
        let mut names: Vec<String> = state.entries.iter().map(|e| e.canonical.clone()).collect();
        names.sort();
        names
    }

    /// Run `f` against a state whose reverse index is built
    ///
    /// Returns `None` only if the lock is poisoned.
    fn with_index<R>(&self, f: impl FnOnce(&IndexState) -> R) -> Option<R> {
        {
            let state = self.state.read().ok()?;
            if state.reverse.is_some() {
                return Some(f(&*state));
            }
        }

        let mut state = self.state.write().ok()?;
        if state.reverse.is_none() {
            let reverse = state.build_reverse();
            state.reverse = Some(reverse);
        }
        Some(f(&*state))
    }
}

impl Default for CanonicalIndex {
    fn default() -> Self {
        Self::new()
    }
}

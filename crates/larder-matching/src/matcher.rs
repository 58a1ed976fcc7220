// ABOUTME: Confidence matcher deciding whether two ingredient names denote the same item
// ABOUTME: Fixed cascade of exact, canonical, descriptor, fuzzy, substring, and similarity tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient Matching
//!
//! [`ConfidenceMatcher`] scores a pair of free-text names in `[0, 1]`. The first
//! tier that applies decides the score:
//!
//! | Tier | Rule | Score |
//! |------|------|-------|
//! | exact | normalized names equal | 1.0 |
//! | canonical | same canonical name | 1.0 |
//! | stripped | equal once descriptors are removed | 0.9 |
//! | stripped canonical | canonical names equal once descriptors are removed | 0.85 |
//! | single word | plural forms coincide or similarity >= 0.7 | `max(0.7, similarity)` |
//! | multi word | unordered greedy word pairing | `matched / shorter * 0.9` |
//! | substring | shorter name sits on a word boundary of the longer | `0.7 + 0.2 * ratio` |
//! | similarity | whole-string similarity, then on canonical forms | `sim * 0.8`, `sim * 0.75` |
//!
//! Every tier is symmetric, so `confidence(a, b) == confidence(b, a)`.

use std::sync::Arc;
use tracing::trace;

use larder_core::constants::{confidence, thresholds};

use crate::canonical_index::CanonicalIndex;
use crate::normalize::{normalize_name, remove_descriptors, tokens};
use crate::similarity::{fuzzy_word_match, match_words_unordered, similarity_ratio};

/// Decides ingredient identity for reconciliation and substitution lookups
pub trait IngredientMatcher: Send + Sync {
    /// Confidence in `[0, 1]` that both names denote the same ingredient
    fn confidence(&self, a: &str, b: &str) -> f64;

    /// Canonical identity used to group names, or the input when unknown
    fn canonical_of(&self, name: &str) -> String;

    /// Whether `confidence(a, b)` reaches `threshold`
    fn matches(&self, a: &str, b: &str, threshold: f64) -> bool {
        let score = self.confidence(a, b);
        let matched = score >= threshold;
        if matched {
            trace!(a, b, score, threshold, "Ingredient names matched");
        }
        matched
    }
}

// ============================================================================
// Exact Matcher
// ============================================================================

/// Matches only names that are equal after lowercasing and trimming
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl IngredientMatcher for ExactMatcher {
    fn confidence(&self, a: &str, b: &str) -> f64 {
        let a = normalize_name(a);
        if !a.is_empty() && a == normalize_name(b) {
            confidence::EXACT
        } else {
            confidence::NONE
        }
    }

    fn canonical_of(&self, name: &str) -> String {
        name.to_owned()
    }
}

// ============================================================================
// Confidence Matcher
// ============================================================================

/// Rule-cascade matcher backed by a shared [`CanonicalIndex`]
#[derive(Debug, Clone)]
pub struct ConfidenceMatcher {
    index: Arc<CanonicalIndex>,
}

/// Both names prepared once for all tiers
struct Prepared {
    normalized: String,
    canonical: String,
    stripped: String,
    stripped_canonical: String,
}

impl ConfidenceMatcher {
    /// Create a matcher over `index`
    #[must_use]
    pub const fn new(index: Arc<CanonicalIndex>) -> Self {
        Self { index }
    }

    /// Create a matcher over the built-in synonym table
    #[must_use]
    pub fn with_builtin_synonyms() -> Self {
        Self::new(Arc::new(CanonicalIndex::new()))
    }

    /// The index this matcher consults
    #[must_use]
    pub fn index(&self) -> &Arc<CanonicalIndex> {
        &self.index
    }

    fn prepare(&self, normalized: String) -> Prepared {
        let canonical = normalize_name(&self.index.canonical_of(&normalized));
        let stripped = remove_descriptors(&normalized);
        let stripped_canonical = remove_descriptors(&canonical);
        Prepared {
            normalized,
            canonical,
            stripped,
            stripped_canonical,
        }
    }

    fn score(a: &Prepared, b: &Prepared) -> f64 {
        if a.canonical == b.canonical {
            return confidence::CANONICAL;
        }
        if !a.stripped.is_empty() && a.stripped == b.stripped {
            return confidence::DESCRIPTOR_STRIPPED;
        }
        if !a.stripped_canonical.is_empty() && a.stripped_canonical == b.stripped_canonical {
            return confidence::DESCRIPTOR_STRIPPED_CANONICAL;
        }

        let words_a = tokens(&a.normalized);
        let words_b = tokens(&b.normalized);
        if let ([word_a], [word_b]) = (words_a.as_slice(), words_b.as_slice()) {
            if fuzzy_word_match(word_a, word_b, thresholds::WORD_SIMILARITY) {
                return similarity_ratio(word_a, word_b).max(confidence::SINGLE_WORD_FLOOR);
            }
        }
        if words_a.len() > 1 || words_b.len() > 1 {
            let ratio = match_words_unordered(&words_a, &words_b, thresholds::WORD_SIMILARITY);
            if ratio > 0.0 {
                return ratio * confidence::MULTI_WORD_WEIGHT;
            }
        }

        if let Some(score) = substring_confidence(&a.normalized, &b.normalized) {
            return score;
        }

        if let Some(similarity) = gated_similarity(
            or_fallback(&a.stripped, &a.normalized),
            or_fallback(&b.stripped, &b.normalized),
        ) {
            return similarity * confidence::GLOBAL_SIMILARITY_WEIGHT;
        }
        if let Some(similarity) = gated_similarity(
            or_fallback(&a.stripped_canonical, &a.canonical),
            or_fallback(&b.stripped_canonical, &b.canonical),
        ) {
            return similarity * confidence::CANONICAL_SIMILARITY_WEIGHT;
        }

        confidence::NONE
    }
}

impl IngredientMatcher for ConfidenceMatcher {
    fn confidence(&self, a: &str, b: &str) -> f64 {
        let a = normalize_name(a);
        let b = normalize_name(b);
        if a.is_empty() || b.is_empty() {
            return confidence::NONE;
        }
        if a == b {
            return confidence::EXACT;
        }
        Self::score(&self.prepare(a), &self.prepare(b))
    }

    fn canonical_of(&self, name: &str) -> String {
        self.index.canonical_of(name)
    }
}

fn or_fallback<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

/// Similarity of two strings, if both are long enough for it to be meaningful
fn gated_similarity(a: &str, b: &str) -> Option<f64> {
    let shortest = a.chars().count().min(b.chars().count());
    (shortest >= thresholds::MIN_SIMILARITY_LEN).then(|| similarity_ratio(a, b))
}

/// Score for a shorter name occurring in the longer one on a word boundary
fn substring_confidence(a: &str, b: &str) -> Option<f64> {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let shorter_len = shorter.chars().count();
    if shorter_len < thresholds::MIN_SUBSTRING_LEN {
        return None;
    }

    let on_boundary = longer.match_indices(shorter).any(|(start, _)| {
        let before = longer[..start].chars().next_back();
        let after = longer[start + shorter.len()..].chars().next();
        is_boundary(before) && is_boundary(after)
    });
    if !on_boundary {
        return None;
    }

    let ratio = shorter_len as f64 / longer.chars().count() as f64;
    Some(ratio.mul_add(confidence::SUBSTRING_SPAN, confidence::SUBSTRING_BASE))
}

fn is_boundary(neighbour: Option<char>) -> bool {
    matches!(neighbour, None | Some(' ' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_requires_word_boundary() {
        assert!(substring_confidence("ham", "smoked ham").is_some());
        assert!(substring_confidence("ham", "ham-hock").is_some());
        assert!(substring_confidence("ham", "graham").is_none());
        assert!(substring_confidence("ham", "graham ham").is_some());
        assert!(substring_confidence("oi", "soy oil").is_none());
    }

    #[test]
    fn test_substring_score_scales_with_length() {
        let score = substring_confidence("ham", "smoked ham").unwrap_or_default();
        assert!((score - (0.7 + 0.2 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_exact_matcher_ignores_synonyms() {
        let matcher = ExactMatcher;
        assert!(matcher.matches("Flour", " flour ", 0.7));
        assert!(!matcher.matches("egg", "eggs", 0.7));
        assert!(!matcher.matches("", "", 0.7));
    }
}

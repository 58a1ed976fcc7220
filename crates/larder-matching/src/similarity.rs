// ABOUTME: Edit-distance similarity and word-level fuzzy matching primitives
// ABOUTME: Symmetric scoring used by the single-word and multi-word tiers of the matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use crate::normalize::{is_descriptor, normalize_name, plural_forms};

/// Similarity ratio in `[0, 1]`: `1 - levenshtein / max(len)`, counted in characters.
///
/// Identical strings score 1.0; if exactly one side is empty the score is 0.0.
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b)
}

/// Whether two words match allowing plural/singular variation and small typos
#[must_use]
pub fn fuzzy_word_match(a: &str, b: &str, threshold: f64) -> bool {
    let a = normalize_name(a);
    let b = normalize_name(b);
    if a == b {
        return true;
    }

    let forms_a = plural_forms(&a);
    let forms_b = plural_forms(&b);
    forms_a.iter().any(|form_a| {
        forms_b
            .iter()
            .any(|form_b| form_a == form_b || similarity_ratio(form_a, form_b) >= threshold)
    })
}

/// Fraction of the shorter word list that pairs with distinct words of the longer list.
///
/// Descriptors are dropped first. Each word of the shorter list greedily takes its
/// best-scoring unused partner (1.0 on a fuzzy word match, raw similarity otherwise),
/// provided the score reaches `threshold`. Lists of equal length are ordered
/// lexicographically so the result does not depend on argument order.
///
/// Returns 0.0 when either list is empty after dropping descriptors.
#[must_use]
pub fn match_words_unordered(words_a: &[&str], words_b: &[&str], threshold: f64) -> f64 {
    let clean_a: Vec<&str> = words_a.iter().copied().filter(|w| !is_descriptor(w)).collect();
    let clean_b: Vec<&str> = words_b.iter().copied().filter(|w| !is_descriptor(w)).collect();
    if clean_a.is_empty() || clean_b.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = match clean_a.len().cmp(&clean_b.len()) {
        Ordering::Less => (&clean_a, &clean_b),
        Ordering::Greater => (&clean_b, &clean_a),
        Ordering::Equal if clean_a <= clean_b => (&clean_a, &clean_b),
        Ordering::Equal => (&clean_b, &clean_a),
    };

    let mut used = vec![false; longer.len()];
    let mut matched = 0_usize;

    for word in shorter {
        let mut best_index = None;
        let mut best_score = 0.0;
        for (index, candidate) in longer.iter().enumerate() {
            if used[index] {
                continue;
            }
            let score = if fuzzy_word_match(word, candidate, threshold) {
                1.0
            } else {
                similarity_ratio(word, candidate)
            };
            if score > best_score && score >= threshold {
                best_score = score;
                best_index = Some(index);
            }
        }
        if let Some(index) = best_index {
            used[index] = true;
            matched += 1;
        }
    }

    matched as f64 / shorter.len() as f64
}

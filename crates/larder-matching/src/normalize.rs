// ABOUTME: Text normalization helpers for ingredient names
// ABOUTME: Case folding, descriptor stripping, tokenization, and plural/singular candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use std::sync::LazyLock;

/// Modifier words that do not change which ingredient a name refers to
static DESCRIPTORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Preservation and preparation
        "fresh", "dried", "frozen", "canned", "raw", "cooked", "whole", "sliced", "chopped",
        "diced", "minced", "grated", "shredded", "crushed", "ground", "powdered", "boneless",
        "skinless", "bone-in", "organic", "free-range",
        // Size and intensity
        "large", "small", "medium", "extra", "light", "dark", "sweet", "sour", "hot", "mild",
        "spicy", "smoked", "roasted", "toasted", "aged", "young", "ripe", "unripe", "baby",
        "adult", "wild", "farm-raised", "sea", "freshly",
        // Sourcing and dietary variants
        "store-bought", "homemade", "premium", "regular", "low-fat", "full-fat", "skim", "2%",
        "reduced-fat", "fat-free", "sugar-free", "unsalted", "salted", "unsweetened",
        "sweetened", "plain", "flavored", "unflavored",
    ]
    .into_iter()
    .collect()
});

/// Lowercase and trim a name. Empty input yields an empty string.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether a single lowercase word is a descriptor
#[must_use]
pub fn is_descriptor(word: &str) -> bool {
    DESCRIPTORS.contains(word)
}

/// Split a normalized name into whitespace-separated words
#[must_use]
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Drop descriptor words and rejoin the rest with single spaces
#[must_use]
pub fn remove_descriptors(normalized: &str) -> String {
    normalized
        .split_whitespace()
        .filter(|word| !is_descriptor(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Candidate singular/plural spellings of a word, the word itself first.
///
/// `cherries -> cherry`, `boxes -> box`, `tomatoes -> tomatoe`, and for words not
/// ending in `s` the plural: `cherry -> cherries`, `peach -> peaches`, `egg -> eggs`.
/// Words ending in `ss` yield only themselves.
#[must_use]
pub fn plural_forms(word: &str) -> Vec<String> {
    let mut forms = vec![word.to_owned()];

    if let Some(stem) = word.strip_suffix("ies") {
        forms.push(format!("{stem}y"));
    } else if let Some(stem) = word.strip_suffix("es").filter(|stem| has_sibilant_ending(stem)) {
        forms.push(stem.to_owned());
    } else if let Some(stem) = word.strip_suffix('s') {
        if !stem.ends_with('s') {
            forms.push(stem.to_owned());
        }
    } else if let Some(stem) = word.strip_suffix('y') {
        forms.push(format!("{stem}ies"));
    } else if has_sibilant_ending(word) {
        forms.push(format!("{word}es"));
    } else {
        forms.push(format!("{word}s"));
    }

    forms
}

fn has_sibilant_ending(word: &str) -> bool {
    word.ends_with("ch") || word.ends_with("sh") || word.ends_with('x')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_descriptors_keeps_identity_words() {
        assert_eq!(remove_descriptors("fresh diced tomatoes"), "tomatoes");
        assert_eq!(remove_descriptors("extra   virgin olive oil"), "virgin olive oil");
        assert_eq!(remove_descriptors("fresh frozen"), "");
    }

    #[test]
    fn test_plural_forms() {
        assert_eq!(plural_forms("cherries"), vec!["cherries", "cherry"]);
        assert_eq!(plural_forms("boxes"), vec!["boxes", "box"]);
        assert_eq!(plural_forms("peaches"), vec!["peaches", "peach"]);
        assert_eq!(plural_forms("eggs"), vec!["eggs", "egg"]);
        assert_eq!(plural_forms("glass"), vec!["glass"]);
        assert_eq!(plural_forms("cherry"), vec!["cherry", "cherries"]);
        assert_eq!(plural_forms("peach"), vec!["peach", "peaches"]);
        assert_eq!(plural_forms("egg"), vec!["egg", "eggs"]);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Chicken Breast "), "chicken breast");
        assert_eq!(normalize_name("   "), "");
    }
}

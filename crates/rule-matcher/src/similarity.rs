//! Word-overlap similarity between a message and a rule's reference question.

use std::collections::HashSet;

/// A similarity hit requires a score strictly above this value.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Distinct whitespace-separated words of `text`. No stemming or punctuation stripping.
fn words(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// `|A ∩ B| / max(|A|, |B|)` over the distinct words of both inputs.
///
/// Inputs are compared as given; callers lowercase them first. Two empty inputs score `0.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = words(a);
    let b = words(b);
    let denominator = a.len().max(b.len());
    if denominator == 0 {
        return 0.0;
    }
    let shared = a.intersection(&b).count();
    shared as f64 / denominator as f64
}

// Highlight cutoff for the "top 20%" of posts.
//
// Sort scores descending and take the one at index max(1, floor(0.2 * N)) - 1,
// so the single best post always qualifies even when there are fewer than
// five. Every post scoring at or above the cutoff is highlighted, which means
// ties at the boundary all make it in.

use std::collections::BTreeMap;

/// Fraction of posts targeted for highlighting.
pub const HIGHLIGHT_FRACTION: f64 = 0.2;

/// Cutoff score for a list of scores. Zero when there are none.
pub fn highlight_threshold(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let rank = ((HIGHLIGHT_FRACTION * sorted.len() as f64).floor() as usize).max(1);
    sorted[rank - 1]
}

/// Per-post scores together with their highlight cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPosts {
    pub scores: BTreeMap<String, f64>,
    pub threshold: f64,
}

impl ScoredPosts {
    pub fn new(scores: BTreeMap<String, f64>) -> Self {
        let values: Vec<f64> = scores.values().copied().collect();
        let threshold = highlight_threshold(&values);
        Self { scores, threshold }
    }

    pub fn score(&self, post_id: &str) -> f64 {
        self.scores.get(post_id).copied().unwrap_or(0.0)
    }

    pub fn is_highlighted(&self, post_id: &str) -> bool {
        self.scores
            .get(post_id)
            .is_some_and(|&score| score >= self.threshold)
    }

    /// Ids of highlighted posts, in id order.
    pub fn highlighted(&self) -> Vec<&str> {
        self.scores
            .iter()
            .filter(|(_, &score)| score >= self.threshold)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

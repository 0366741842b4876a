//! Frequency ranking: deduplication, descending sort, and truncation

use std::collections::HashMap;

use crate::io::error::{CloudError, Result, invalid_parameter};

/// A word together with its relative weight
///
/// Weights are only ever used relatively: the layout pipeline normalizes
/// against the maximum weight in the active set.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    /// The word itself, non-empty after trimming
    pub word: String,
    /// Non-negative finite weight
    pub weight: f64,
}

/// Ranked word list plus input diagnostics
///
/// `entries` is sorted by weight descending with ties kept in first-occurrence
/// input order, and is never longer than the requested `max_words`.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Words in rank order
    pub entries: Vec<WordEntry>,
    /// Count of input pairs dropped for empty words or unusable weights
    pub dropped: usize,
}

impl Ranking {
    /// Number of ranked words
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ranking holds no words
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest weight in the ranking, if any
    pub fn max_weight(&self) -> Option<f64> {
        self.entries.first().map(|e| e.weight)
    }
}

/// Rank raw (word, weight) pairs into a bounded descending list
///
/// Duplicate words have their weights summed; the first occurrence keeps its
/// input position so ties resolve in input order. Pairs with empty words or
/// non-positive, NaN, or infinite weights are dropped and counted rather
/// than treated as fatal.
///
/// # Errors
///
/// Returns an error if:
/// - `max_words` is zero
/// - no valid words remain after filtering
pub fn rank<S>(pairs: &[(S, f64)], max_words: usize) -> Result<Ranking>
where
    S: AsRef<str>,
{
    if max_words == 0 {
        return Err(invalid_parameter(
            "max_words",
            &max_words,
            &"must be at least 1",
        ));
    }

    let mut entries: Vec<WordEntry> = Vec::new();
    let mut index_by_word: HashMap<String, usize> = HashMap::new();
    let mut dropped = 0;

    for (word, weight) in pairs {
        let word = word.as_ref().trim();
        if word.is_empty() || !weight.is_finite() || *weight <= 0.0 {
            dropped += 1;
            continue;
        }

        match index_by_word.get(word) {
            Some(&index) => {
                if let Some(existing) = entries.get_mut(index) {
                    existing.weight += weight;
                }
            }
            None => {
                index_by_word.insert(word.to_string(), entries.len());
                entries.push(WordEntry {
                    word: word.to_string(),
                    weight: *weight,
                });
            }
        }
    }

    if entries.is_empty() {
        return Err(CloudError::EmptyInput);
    }

    // Stable sort keeps input order on equal weights
    entries.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries.truncate(max_words);

    Ok(Ranking { entries, dropped })
}

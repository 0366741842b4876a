//! Word preparation: pair parsing, frequency ranking, and font sizing

/// Hand-typed "word,count" line parsing
pub mod parse;
/// Deduplication, descending sort, and truncation of weighted words
pub mod ranking;
/// Rank/frequency blended font size scaling
pub mod sizing;

pub use ranking::{Ranking, WordEntry};

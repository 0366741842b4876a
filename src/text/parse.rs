//! Parsing of hand-typed "word,count" pair lines

/// Parsed pairs plus a count of malformed lines that were skipped
#[derive(Debug, Clone)]
pub struct ParsedPairs {
    /// Raw (word, weight) pairs in input order, duplicates preserved
    pub pairs: Vec<(String, f64)>,
    /// Lines skipped because they held no comma or no numeric count
    pub skipped: usize,
}

/// Parse free-form pair input, one `word,count` per line
///
/// The word may itself contain commas; only the last comma separates the
/// count. Blank lines are ignored, malformed lines are skipped and counted.
/// Filtering of non-positive counts is left to the ranker so the skip count
/// here reflects syntax problems only.
pub fn parse_pairs(input: &str) -> ParsedPairs {
    let mut pairs = Vec::new();
    let mut skipped = 0;

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((word, count)) = line.rsplit_once(',') else {
            skipped += 1;
            continue;
        };

        match count.trim().parse::<f64>() {
            Ok(weight) => pairs.push((word.trim().to_string(), weight)),
            Err(_) => skipped += 1,
        }
    }

    ParsedPairs { pairs, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_lines_and_counts_malformed_ones() {
        let parsed = parse_pairs("사람,536\n사랑,423\n\nno-comma\n행복,notanumber\n");
        assert_eq!(
            parsed.pairs,
            vec![
                ("사람".to_string(), 536.0),
                ("사랑".to_string(), 423.0),
            ]
        );
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn test_last_comma_separates_count() {
        let parsed = parse_pairs("hello, world,7");
        assert_eq!(parsed.pairs, vec![("hello, world".to_string(), 7.0)]);
        assert_eq!(parsed.skipped, 0);
    }
}

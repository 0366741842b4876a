//! Validates the rank/frequency blended font size law

use wordbloom::CloudError;
use wordbloom::text::ranking::rank;
use wordbloom::text::sizing::scale;

fn ranking_of(pairs: &[(&str, f64)]) -> wordbloom::text::Ranking {
    rank(pairs, 100).unwrap()
}

#[test]
fn test_single_entry_gets_max_font_size() {
    let ranking = ranking_of(&[("alone", 7.0)]);
    let sized = scale(&ranking, 5, 120, 0.5).unwrap();
    assert_eq!(sized.first().unwrap().font_size, 120);
}

#[test]
fn test_pure_frequency_scaling_tracks_weight_ratio() {
    let ranking = ranking_of(&[("big", 100.0), ("half", 50.0), ("tenth", 10.0)]);
    let sized = scale(&ranking, 1, 100, 1.0).unwrap();

    let sizes: Vec<_> = sized.iter().map(|s| s.font_size).collect();
    assert_eq!(sizes, vec![100, 50, 10]);
}

#[test]
fn test_pure_rank_scaling_ignores_weight_magnitudes() {
    // Wildly different weights, same result as evenly spaced ranks
    let ranking = ranking_of(&[("a", 9000.0), ("b", 2.0)]);
    let sized = scale(&ranking, 1, 100, 0.0).unwrap();

    let sizes: Vec<_> = sized.iter().map(|s| s.font_size).collect();
    assert_eq!(sizes, vec![100, 50]);
}

#[test]
fn test_min_font_size_floors_small_words() {
    let ranking = ranking_of(&[("big", 1000.0), ("tiny", 1.0)]);
    let sized = scale(&ranking, 20, 100, 1.0).unwrap();
    assert_eq!(sized.last().unwrap().font_size, 20);
}

#[test]
fn test_scaling_is_deterministic() {
    let ranking = ranking_of(&[("a", 30.0), ("b", 20.0), ("c", 10.0)]);
    let first = scale(&ranking, 5, 80, 0.5).unwrap();
    let second = scale(&ranking, 5, 80, 0.5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let ranking = ranking_of(&[("a", 1.0)]);

    assert!(matches!(
        scale(&ranking, 5, 100, 1.5).unwrap_err(),
        CloudError::InvalidParameter { .. }
    ));
    assert!(matches!(
        scale(&ranking, 0, 100, 0.5).unwrap_err(),
        CloudError::InvalidParameter { .. }
    ));
    assert!(matches!(
        scale(&ranking, 50, 10, 0.5).unwrap_err(),
        CloudError::InvalidParameter { .. }
    ));
}

//! Tests for genre classification

use super::{classify, compiled_pattern_count, Genre, GENRE_PATTERNS};

#[test]
fn test_every_pattern_compiles() {
    let declared: usize = GENRE_PATTERNS.iter().map(|(_, patterns)| patterns.len()).sum();
    assert_eq!(compiled_pattern_count(), declared);
}

#[test]
fn test_first_genre_in_table_wins() {
    // Also matches Portrait ("portrait") and Landscape ("v01").
    assert_eq!(classify("gr.portrait_v01"), Genre::RicohGr);
    assert_eq!(classify("gr.portrait_v01").label(), "Ricoh GR");
}

#[test]
fn test_portrait_beats_landscape() {
    assert_eq!(classify("portrait_v01"), Genre::Portrait);
}

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(classify("Kodak_Portra"), Genre::KodakFilm);
    assert_eq!(classify("OPPO_Default"), Genre::OppoOriginal);
}

#[test]
fn test_anchored_patterns() {
    assert_eq!(classify("insjuno"), Genre::InstagramFilters);
    // "^ins" only anchors at the start; "cabins" falls through to no match.
    assert_eq!(classify("cabins"), Genre::Uncategorized);
}

#[test]
fn test_unmatched_name_is_uncategorized() {
    assert_eq!(classify("xyz_0042"), Genre::Uncategorized);
    assert_eq!(classify(""), Genre::Uncategorized);
}

#[test]
fn test_table_order_matches_declaration() {
    let order: Vec<Genre> = GENRE_PATTERNS.iter().map(|(genre, _)| *genre).collect();
    assert_eq!(order.first(), Some(&Genre::RicohGr));
    assert_eq!(order.last(), Some(&Genre::GoldenTouch));
    assert_eq!(order.len(), 20);
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_dir_names_are_sanitized() {
    assert_eq!(Genre::Cinematic.dir_name(), "Cinematic Movie");
    assert_eq!(Genre::VintageRetro.dir_name(), "Vintage-Retro");
    assert_eq!(Genre::HdrVideo.dir_name(), "HDR-Video");
    assert_eq!(Genre::BlackAndWhite.dir_name(), "Black & White");
}

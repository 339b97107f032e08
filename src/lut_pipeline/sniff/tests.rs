//! Tests for format sniffing

use super::byte_order::{container_fallback, detect_from_samples, raw_default};
use super::strategies::{
    brute_force, cube_root, exact_profile, first_match, known_raw_size, size_band,
    CONTAINER_STRATEGIES, RAW_STRATEGIES,
};
use super::text::is_text_lut;
use super::{
    parse_header, sniff, sniff_with_encoding, ByteOrder, FormatGuess, Geometry,
    Sniffed, MAGIC,
};
use super::PayloadEncoding::{Byte, Float32};
use crate::lut_pipeline::common::error::ConversionError;

/// Magic, version 1, zero padding up to `header_len`, then `payload`.
fn container(header_len: usize, payload: &[u8]) -> Vec<u8> {
    let mut blob = MAGIC.to_vec();
    blob.extend_from_slice(&1u32.to_le_bytes());
    blob.resize(header_len, 0);
    blob.extend_from_slice(payload);
    blob
}

/// Payload whose first rows climb in byte 0 (red first, RGB storage).
fn ascending_first_byte(len: usize, channels: usize) -> Vec<u8> {
    let mut payload = vec![0u8; len];
    for row in 0..4 {
        payload[row * channels] = (row * 40) as u8;
        payload[row * channels + 2] = 7;
    }
    payload
}

fn binary(sniffed: Sniffed) -> FormatGuess {
    match sniffed {
        Sniffed::Binary(guess) => guess,
        Sniffed::AlreadyText => panic!("expected a binary guess"),
    }
}

// ========================================================================
// Text short-circuit
// ========================================================================

#[test]
fn test_cube_text_is_detected() {
    let text = b"TITLE \"warm\"\nLUT_3D_SIZE 2\nDOMAIN_MIN 0.0 0.0 0.0\n";
    assert!(is_text_lut(text));
    assert_eq!(sniff(text, Some("warm.bin")).unwrap(), Sniffed::AlreadyText);
}

#[test]
fn test_size_marker_alone_is_enough() {
    let text = b"# generated by some tool\nLUT_3D_SIZE 17\n";
    assert!(is_text_lut(text));
}

#[test]
fn test_printable_text_without_markers_is_not_a_cube() {
    assert!(!is_text_lut(b"just some plain ascii words here, nothing else"));
}

#[test]
fn test_binary_lead_in_is_not_text_even_with_marker() {
    let mut blob = vec![0u8, 1, 2, 3];
    blob.extend_from_slice(b"LUT_3D_SIZE 17");
    assert!(!is_text_lut(&blob));
}

#[test]
fn test_marker_past_scan_window_is_ignored() {
    let mut blob = vec![b'x'; 600];
    blob.extend_from_slice(b"LUT_3D_SIZE 17");
    assert!(!is_text_lut(&blob));
}

#[test]
fn test_empty_blob_is_not_text() {
    assert!(!is_text_lut(b""));
}

#[test]
fn test_container_magic_is_not_text() {
    let blob = container(116, &vec![0u8; 17 * 17 * 17 * 3]);
    assert!(!is_text_lut(&blob));
}

// ========================================================================
// Container header
// ========================================================================

#[test]
fn test_header_version_is_read() {
    let mut blob = container(64, &[]);
    blob[8..12].copy_from_slice(&7u32.to_le_bytes());
    let header = parse_header(&blob).unwrap();
    assert_eq!(header.version, 7);
    assert_eq!(header.offset_hint, None);
}

#[test]
fn test_header_prefers_first_offset_field() {
    let mut blob = container(64, &[0u8; 200]);
    blob[0x20..0x28].copy_from_slice(&48u64.to_le_bytes());
    blob[0x28..0x30].copy_from_slice(&56u64.to_le_bytes());
    assert_eq!(parse_header(&blob).unwrap().offset_hint, Some(48));
}

#[test]
fn test_header_skips_out_of_range_offset() {
    let mut blob = container(64, &[0u8; 200]);
    blob[0x20..0x28].copy_from_slice(&u64::MAX.to_le_bytes());
    blob[0x28..0x30].copy_from_slice(&56u64.to_le_bytes());
    assert_eq!(parse_header(&blob).unwrap().offset_hint, Some(56));
}

#[test]
fn test_truncated_container_is_undeterminable() {
    let blob = &MAGIC[..];
    let result = sniff(blob, None);
    assert!(matches!(result, Err(ConversionError::UndeterminableFormat(_))));
}

// ========================================================================
// Geometry strategies
// ========================================================================

#[test]
fn test_exact_profiles() {
    assert_eq!(
        exact_profile(14855, Byte),
        Some(Geometry { grid_size: 17, channel_count: 3, data_offset: 116 })
    );
    assert_eq!(
        exact_profile(98480, Byte),
        Some(Geometry { grid_size: 32, channel_count: 3, data_offset: 176 })
    );
    assert_eq!(exact_profile(14856, Byte), None);
}

#[test]
fn test_brute_force_finds_small_header() {
    let size = 48 + 17 * 17 * 17 * 3;
    assert_eq!(
        brute_force(size, Byte),
        Some(Geometry { grid_size: 17, channel_count: 3, data_offset: 48 })
    );
}

#[test]
fn test_brute_force_respects_candidate_order() {
    // 17x4 leaves a 3000 byte header and is tried before 32x3.
    let size = 17 * 17 * 17 * 4 + 3000;
    assert_eq!(
        brute_force(size, Byte),
        Some(Geometry { grid_size: 17, channel_count: 4, data_offset: 3000 })
    );
}

#[test]
fn test_brute_force_rejects_oversized_header() {
    assert_eq!(brute_force(10_000, Byte), None);
    assert_eq!(brute_force(200_000, Byte), None);
}

#[test]
fn test_size_band_fallback() {
    assert_eq!(
        size_band(10_000, Byte),
        Some(Geometry { grid_size: 17, channel_count: 3, data_offset: 0 })
    );
    assert_eq!(size_band(16_001, Byte).map(|g| g.grid_size), Some(21));
    assert_eq!(size_band(100_000, Byte).map(|g| g.grid_size), Some(32));
    assert_eq!(
        size_band(200_000, Byte),
        Some(Geometry { grid_size: 33, channel_count: 3, data_offset: 200_000 - 33 * 33 * 33 * 3 })
    );
}

#[test]
fn test_container_strategy_order() {
    // 14855 also satisfies brute force with a 116 byte header, but the exact
    // profile is consulted first.
    assert_eq!(first_match(CONTAINER_STRATEGIES, 14855, Byte).map(|(name, _)| name), Some("exact_profile"));
    assert_eq!(first_match(CONTAINER_STRATEGIES, 10_000, Byte).map(|(name, _)| name), Some("size_band"));
}

#[test]
fn test_known_raw_sizes() {
    assert_eq!(known_raw_size(16384, Byte).map(|g| (g.grid_size, g.channel_count)), Some((16, 4)));
    assert_eq!(known_raw_size(131072, Byte).map(|g| (g.grid_size, g.channel_count)), Some((32, 4)));
    assert_eq!(known_raw_size(98304, Byte).map(|g| (g.grid_size, g.channel_count)), Some((32, 3)));
    assert_eq!(known_raw_size(12288, Byte).map(|g| (g.grid_size, g.channel_count)), Some((16, 3)));
    assert_eq!(known_raw_size(12289, Byte), None);
}

#[test]
fn test_cube_root_prefers_four_channels() {
    assert_eq!(cube_root(17 * 17 * 17 * 4, Byte).map(|g| (g.grid_size, g.channel_count)), Some((17, 4)));
    assert_eq!(cube_root(33 * 33 * 33 * 3, Byte).map(|g| (g.grid_size, g.channel_count)), Some((33, 3)));
    assert_eq!(cube_root(0, Byte), None);
}

#[test]
fn test_cube_root_tolerates_trailing_bytes() {
    assert_eq!(
        cube_root(17 * 17 * 17 * 3 + 100, Byte),
        Some(Geometry { grid_size: 17, channel_count: 3, data_offset: 0 })
    );
}

#[test]
fn test_cube_root_tolerates_truncation() {
    assert_eq!(
        cube_root(17 * 17 * 17 * 3 - 30, Byte),
        Some(Geometry { grid_size: 17, channel_count: 3, data_offset: 0 })
    );
}

#[test]
fn test_float_strategies_use_twelve_byte_records() {
    let payload = 17 * 17 * 17 * 12;
    assert_eq!(exact_profile(14855, Float32), None);
    assert_eq!(known_raw_size(16384, Float32), None);
    assert_eq!(
        brute_force(payload + 116, Float32),
        Some(Geometry { grid_size: 17, channel_count: 3, data_offset: 116 })
    );
    assert_eq!(
        cube_root(payload, Float32),
        Some(Geometry { grid_size: 17, channel_count: 3, data_offset: 0 })
    );
    assert_eq!(size_band(payload, Float32).map(|g| g.grid_size), Some(17));
}

#[test]
fn test_raw_strategy_order() {
    assert_eq!(first_match(RAW_STRATEGIES, 16384, Byte).map(|(name, _)| name), Some("known_raw_size"));
    assert_eq!(first_match(RAW_STRATEGIES, 17 * 17 * 17 * 3, Byte).map(|(name, _)| name), Some("cube_root"));
}

// ========================================================================
// Byte order
// ========================================================================

#[test]
fn test_ascending_red_pattern_is_rgb() {
    let geometry = Geometry { grid_size: 17, channel_count: 3, data_offset: 0 };
    let blob = ascending_first_byte(64, 3);
    assert_eq!(detect_from_samples(&blob, &geometry), Some(ByteOrder::Rgb));
}

#[test]
fn test_ascending_third_byte_is_bgr() {
    let geometry = Geometry { grid_size: 17, channel_count: 4, data_offset: 8 };
    let mut blob = vec![0u8; 64];
    for row in 0..4 {
        blob[8 + row * 4 + 2] = (row * 50) as u8;
    }
    assert_eq!(detect_from_samples(&blob, &geometry), Some(ByteOrder::Bgr));
}

#[test]
fn test_equal_deltas_are_rgb() {
    let geometry = Geometry { grid_size: 17, channel_count: 3, data_offset: 0 };
    assert_eq!(detect_from_samples(&[9u8; 12], &geometry), Some(ByteOrder::Rgb));
}

#[test]
fn test_single_row_cannot_be_sampled() {
    let geometry = Geometry { grid_size: 17, channel_count: 3, data_offset: 10 };
    assert_eq!(detect_from_samples(&[0u8; 15], &geometry), None);
}

#[test]
fn test_container_filename_fallback() {
    assert_eq!(container_fallback(None), ByteOrder::Bgr);
    assert_eq!(container_fallback(Some("film.bin")), ByteOrder::Bgr);
    assert_eq!(container_fallback(Some("Film.RGBA.bin")), ByteOrder::Rgb);
}

#[test]
fn test_raw_filename_default() {
    assert_eq!(raw_default(None), ByteOrder::Bgr);
    assert_eq!(raw_default(Some("lut.rgb.bin")), ByteOrder::Rgb);
    assert_eq!(raw_default(Some("lut.rgba.bin")), ByteOrder::Bgr);
    assert_eq!(raw_default(Some("lut")), ByteOrder::Bgr);
}

#[test]
fn test_byte_order_round_trip() {
    let stored = [10u8, 20, 30];
    for order in [ByteOrder::Rgb, ByteOrder::Bgr] {
        assert_eq!(order.from_rgb(order.to_rgb(stored)), stored);
    }
    assert_eq!(ByteOrder::Bgr.to_rgb(stored), [30, 20, 10]);
}

// ========================================================================
// End-to-end sniffing
// ========================================================================

#[test]
fn test_sniff_known_17_profile() {
    let blob = container(116, &ascending_first_byte(17 * 17 * 17 * 3, 3));
    assert_eq!(blob.len(), 14855);

    let guess = binary(sniff(&blob, Some("profile.bin")).unwrap());
    assert_eq!(guess.grid_size, 17);
    assert_eq!(guess.channel_count, 3);
    assert_eq!(guess.data_offset, 116);
    assert_eq!(guess.byte_order, ByteOrder::Rgb);
    assert_eq!(guess.entry_count(), 4913);
}

#[test]
fn test_sniff_known_32_profile() {
    let blob = container(176, &vec![0u8; 32 * 32 * 32 * 3]);
    assert_eq!(blob.len(), 98480);

    let guess = binary(sniff(&blob, None).unwrap());
    assert_eq!(guess.grid_size, 32);
    assert_eq!(guess.channel_count, 3);
    assert_eq!(guess.data_offset, 176);
}

#[test]
fn test_sniff_container_brute_force() {
    let blob = container(64, &vec![0u8; 33 * 33 * 33 * 4]);
    let guess = binary(sniff(&blob, None).unwrap());
    assert_eq!((guess.grid_size, guess.channel_count, guess.data_offset), (33, 4, 64));
}

#[test]
fn test_sniff_headerless_16_by_4_defaults_to_bgr() {
    let blob = vec![0u8; 16384];
    let guess = binary(sniff(&blob, Some("lut")).unwrap());
    assert_eq!(guess.grid_size, 16);
    assert_eq!(guess.channel_count, 4);
    assert_eq!(guess.data_offset, 0);
    assert_eq!(guess.byte_order, ByteOrder::Bgr);
}

#[test]
fn test_sniff_headerless_rgb_name() {
    let blob = vec![0u8; 12288];
    let guess = binary(sniff(&blob, Some("lut.rgb.bin")).unwrap());
    assert_eq!(guess.byte_order, ByteOrder::Rgb);
}

#[test]
fn test_sniff_headerless_with_trailing_bytes() {
    let blob = vec![0x80u8; 17 * 17 * 17 * 3 + 100];
    let guess = binary(sniff(&blob, Some("lut")).unwrap());
    assert_eq!((guess.grid_size, guess.channel_count, guess.data_offset), (17, 3, 0));
}

#[test]
fn test_sniff_empty_headerless_is_undeterminable() {
    let result = sniff(&[], None);
    assert!(matches!(result, Err(ConversionError::UndeterminableFormat(_))));
}

#[test]
fn test_sniff_float_container() {
    let blob = container(116, &vec![0u8; 17 * 17 * 17 * 12]);
    let guess = binary(sniff_with_encoding(&blob, Some("lut.bin"), Float32).unwrap());
    assert_eq!(
        guess,
        FormatGuess { grid_size: 17, channel_count: 3, data_offset: 116, byte_order: ByteOrder::Rgb }
    );
}

#[test]
fn test_sniff_headerless_float_dump() {
    let blob = vec![0u8; 17 * 17 * 17 * 12];
    let guess = binary(sniff_with_encoding(&blob, Some("lut"), Float32).unwrap());
    assert_eq!((guess.grid_size, guess.data_offset, guess.byte_order), (17, 0, ByteOrder::Rgb));
}

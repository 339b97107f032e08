//! Geometry strategies
//!
//! Each strategy looks at the file size and the payload encoding and either
//! proposes a [`Geometry`] or declines. The tables below are evaluated top to
//! bottom and the first proposal wins.

use crate::lut_pipeline::sniff::types::{Geometry, PayloadEncoding};

/// A named geometry heuristic.
pub type Strategy = fn(usize, PayloadEncoding) -> Option<Geometry>;

/// Grid sizes tried by the brute-force search, in priority order.
pub const CANDIDATE_GRID_SIZES: [usize; 8] = [17, 32, 33, 21, 16, 25, 20, 64];

/// Containers never carry a header this large.
pub const MAX_HEADER_SIZE: usize = 4096;

/// Strategies for `.MS-LUT` containers. `size_band` always matches.
pub const CONTAINER_STRATEGIES: &[(&str, Strategy)] = &[
    ("exact_profile", exact_profile),
    ("brute_force", brute_force),
    ("size_band", size_band),
];

/// Strategies for headerless dumps.
pub const RAW_STRATEGIES: &[(&str, Strategy)] = &[
    ("known_raw_size", known_raw_size),
    ("cube_root", cube_root),
];

/// Runs `strategies` in order and returns the first proposal with the name of
/// the strategy that produced it.
pub fn first_match(
    strategies: &[(&'static str, Strategy)],
    file_size: usize,
    encoding: PayloadEncoding,
) -> Option<(&'static str, Geometry)> {
    strategies.iter().find_map(|(name, strategy)| {
        strategy(file_size, encoding).map(|geometry| (*name, geometry))
    })
}

fn payload_len(grid_size: usize, channel_count: usize, encoding: PayloadEncoding) -> usize {
    grid_size.pow(3) * channel_count * encoding.bytes_per_channel()
}

/// Container sizes observed in the wild with a fixed header length.
/// Both are 8-bit profiles.
pub fn exact_profile(file_size: usize, encoding: PayloadEncoding) -> Option<Geometry> {
    if encoding != PayloadEncoding::Byte {
        return None;
    }
    let (grid_size, data_offset) = match file_size {
        14855 => (17, 116),
        98480 => (32, 176),
        _ => return None,
    };
    Some(Geometry { grid_size, channel_count: 3, data_offset })
}

/// First candidate geometry that leaves a small non-negative header.
pub fn brute_force(file_size: usize, encoding: PayloadEncoding) -> Option<Geometry> {
    CANDIDATE_GRID_SIZES.iter().find_map(|&grid_size| {
        encoding.candidate_channels().iter().find_map(|&channel_count| {
            let header = file_size.checked_sub(payload_len(grid_size, channel_count, encoding))?;
            (header < MAX_HEADER_SIZE).then_some(Geometry {
                grid_size,
                channel_count,
                data_offset: header,
            })
        })
    })
}

/// Last resort: guess the grid from the overall size band.
///
/// Bands are defined for 8-bit payloads; wider samples scale the file size
/// down first.
pub fn size_band(file_size: usize, encoding: PayloadEncoding) -> Option<Geometry> {
    let grid_size = match file_size / encoding.bytes_per_channel() {
        0..=16000 => 17,
        16001..=30000 => 21,
        30001..=100000 => 32,
        _ => 33,
    };
    Some(Geometry {
        grid_size,
        channel_count: 3,
        data_offset: file_size.saturating_sub(payload_len(grid_size, 3, encoding)),
    })
}

/// Headerless 8-bit dump sizes that map to a single layout.
pub fn known_raw_size(file_size: usize, encoding: PayloadEncoding) -> Option<Geometry> {
    if encoding != PayloadEncoding::Byte {
        return None;
    }
    let (grid_size, channel_count) = match file_size {
        16384 => (16, 4),
        131072 => (32, 4),
        98304 => (32, 3),
        12288 => (16, 3),
        _ => return None,
    };
    Some(Geometry { grid_size, channel_count, data_offset: 0 })
}

fn rounded_grid(file_size: usize, channel_count: usize, encoding: PayloadEncoding) -> usize {
    let record_len = channel_count * encoding.bytes_per_channel();
    (file_size as f64 / record_len as f64).cbrt().round() as usize
}

/// Four channels when the size is an exact 4-channel cube, otherwise the
/// nearest 3-channel grid. Trailing or missing bytes are left for the
/// normalizer's coverage check.
pub fn cube_root(file_size: usize, encoding: PayloadEncoding) -> Option<Geometry> {
    if encoding.candidate_channels().contains(&4) {
        let grid_size = rounded_grid(file_size, 4, encoding);
        if grid_size > 0 && payload_len(grid_size, 4, encoding) == file_size {
            return Some(Geometry { grid_size, channel_count: 4, data_offset: 0 });
        }
    }

    let grid_size = rounded_grid(file_size, 3, encoding);
    (grid_size > 0).then_some(Geometry {
        grid_size,
        channel_count: 3,
        data_offset: 0,
    })
}

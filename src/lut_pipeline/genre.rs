//! Genre classification
//!
//! Buckets a LUT by matching its lower-cased file stem against an ordered
//! keyword table. Several genres share triggers (a `portrait_v01` name hits
//! both Portrait and Landscape), so table order is the tie-break and must not
//! change.

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Genre {
    RicohGr,
    HasselbladMaster,
    Fujifilm,
    KodakFilm,
    Cinematic,
    InstagramFilters,
    OppoOriginal,
    BlackAndWhite,
    Portrait,
    Landscape,
    Food,
    Night,
    WarmTones,
    CoolTones,
    VintageRetro,
    HdrVideo,
    AppFilters,
    Artistic,
    JapaneseStyle,
    GoldenTouch,
    Uncategorized,
}

impl Genre {
    pub fn label(self) -> &'static str {
        match self {
            Genre::RicohGr => "Ricoh GR",
            Genre::HasselbladMaster => "Hasselblad Master",
            Genre::Fujifilm => "Fujifilm",
            Genre::KodakFilm => "Kodak Film",
            Genre::Cinematic => "Cinematic (Movie)",
            Genre::InstagramFilters => "Instagram Filters",
            Genre::OppoOriginal => "OPPO Original",
            Genre::BlackAndWhite => "Black & White",
            Genre::Portrait => "Portrait",
            Genre::Landscape => "Landscape",
            Genre::Food => "Food",
            Genre::Night => "Night",
            Genre::WarmTones => "Warm Tones",
            Genre::CoolTones => "Cool Tones",
            Genre::VintageRetro => "Vintage/Retro",
            Genre::HdrVideo => "HDR/Video",
            Genre::AppFilters => "App Filters",
            Genre::Artistic => "Artistic",
            Genre::JapaneseStyle => "Japanese Style",
            Genre::GoldenTouch => "Golden Touch",
            Genre::Uncategorized => "Uncategorized",
        }
    }

    /// Folder name for this genre: `/` becomes `-`, parentheses are dropped.
    pub fn dir_name(self) -> String {
        self.label().replace('/', "-").replace(['(', ')'], "")
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered trigger table. First genre with any matching pattern wins.
pub const GENRE_PATTERNS: &[(Genre, &[&str])] = &[
    (Genre::RicohGr, &[r"^gr\.", r"gr\.bw", r"gr\.hi", r"gr\.nega", r"gr\.posi"]),
    (Genre::HasselbladMaster, &[r"radiance", r"serenity", r"emerald"]),
    (
        Genre::Fujifilm,
        &[r"fuji", r"type_fuji", r"provia", r"velvia", r"astia", r"acros", r"eterna", r"chrome"],
    ),
    (Genre::KodakFilm, &[r"kodak", r"800t", r"delta400"]),
    (
        Genre::Cinematic,
        &[r"moneyball", r"inception", r"cyberpunk", r"interstellar", r"neon", r"city"],
    ),
    (Genre::InstagramFilters, &[r"^ins", r"insclarendon", r"insjuno", r"insvalencia"]),
    (Genre::OppoOriginal, &[r"^oplus", r"^oppo", r"^opc_"]),
    (Genre::BlackAndWhite, &[r"b-w", r"blackandwhite", r"mono", r"grayscale"]),
    (Genre::Portrait, &[r"portrait", r"pp1", r"pp2", r"pp3", r"v02"]),
    (
        Genre::Landscape,
        &[
            r"landscape", r"v01", r"mountains", r"island", r"lake", r"beach", r"desert", r"forest",
            r"senlin",
        ],
    ),
    (Genre::Food, &[r"food", r"v03", r"gourmet", r"meiwei"]),
    (Genre::Night, &[r"night", r"v04", r"moonlight"]),
    (Genre::WarmTones, &[r"warm", r"cola", r"candy", r"sweet", r"gold"]),
    (Genre::CoolTones, &[r"cold", r"cool", r"azure", r"blue"]),
    (Genre::VintageRetro, &[r"old", r"vintage", r"retro", r"drjw", r"ccd"]),
    (Genre::HdrVideo, &[r"hdr", r"log_video", r"dolby", r"bt2020", r"bt709", r"p3_"]),
    (
        Genre::AppFilters,
        &[r"b612", r"beautyplus", r"faceapp", r"snapseed", r"sweetsnap", r"youcam"],
    ),
    (Genre::Artistic, &[r"morandi", r"texture", r"vivid"]),
    (Genre::JapaneseStyle, &[r"japan", r"jiari", r"bowu", r"yuanqi", r"qiuri", r"lvtu"]),
    (Genre::GoldenTouch, &[r"gt-", r"glow", r"rosy", r"steaming"]),
];

static COMPILED_PATTERNS: LazyLock<Vec<(Genre, Vec<Regex>)>> = LazyLock::new(|| {
    GENRE_PATTERNS
        .iter()
        .map(|(genre, patterns)| {
            let compiled = patterns
                .iter()
                .filter_map(|pattern| {
                    RegexBuilder::new(pattern)
                        .case_insensitive(true)
                        .build()
                        .inspect_err(|e| warn!("Skipping genre pattern {:?}: {}", pattern, e))
                        .ok()
                })
                .collect();
            (*genre, compiled)
        })
        .collect()
});

/// Classifies a LUT by its file stem.
pub fn classify(stem: &str) -> Genre {
    let name = stem.to_lowercase();
    COMPILED_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|pattern| pattern.is_match(&name)))
        .map_or(Genre::Uncategorized, |(genre, _)| *genre)
}

#[cfg(test)]
pub(crate) fn compiled_pattern_count() -> usize {
    COMPILED_PATTERNS.iter().map(|(_, patterns)| patterns.len()).sum()
}

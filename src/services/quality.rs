use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref PATTERN_UHD: Regex = Regex::new(r"(?i)\b(4k|uhd)\b").unwrap();
    static ref PATTERN_QHD: Regex = Regex::new(r"(?i)\b(2k|qhd)\b").unwrap();
    static ref PATTERN_NUMERIC: Regex = Regex::new(r"(?i)\b(\d{3,4})\s*p?\b").unwrap();
    static ref PATTERN_FHD: Regex = Regex::new(r"(?i)\b(fhd|full\s*hd)\b").unwrap();
    static ref PATTERN_HD: Regex = Regex::new(r"(?i)\bhd\b").unwrap();
    static ref PATTERN_SD: Regex = Regex::new(r"(?i)\bsd\b").unwrap();
}

/// Quality tier of a playable link
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Qualities {
    Unknown,
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

impl Default for Qualities {
    fn default() -> Self {
        Self::Unknown
    }
}

const TIERS: [Qualities; 8] = [
    Qualities::P144,
    Qualities::P240,
    Qualities::P360,
    Qualities::P480,
    Qualities::P720,
    Qualities::P1080,
    Qualities::P1440,
    Qualities::P2160,
];

impl Qualities {
    /// Numeric score used by the host for sorting (vertical resolution, 400 for unknown)
    pub fn value(self) -> i32 {
        match self {
            Qualities::Unknown => 400,
            Qualities::P144 => 144,
            Qualities::P240 => 240,
            Qualities::P360 => 360,
            Qualities::P480 => 480,
            Qualities::P720 => 720,
            Qualities::P1080 => 1080,
            Qualities::P1440 => 1440,
            Qualities::P2160 => 2160,
        }
    }

    /// Highest tier not above `height`
    pub fn from_height(height: i64) -> Self {
        TIERS
            .iter()
            .rev()
            .find(|tier| i64::from(tier.value()) <= height)
            .copied()
            .unwrap_or(Qualities::Unknown)
    }
}

/// Classify a resolution label such as "1080p", "4K" or "FHD"
pub fn quality_from_name(name: Option<&str>) -> Qualities {
    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n,
        _ => return Qualities::Unknown,
    };

    if PATTERN_UHD.is_match(name) {
        return Qualities::P2160;
    }
    if PATTERN_QHD.is_match(name) {
        return Qualities::P1440;
    }
    if let Some(height) = PATTERN_NUMERIC
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
    {
        return Qualities::from_height(height);
    }
    if PATTERN_FHD.is_match(name) {
        return Qualities::P1080;
    }
    if PATTERN_HD.is_match(name) {
        return Qualities::P720;
    }
    if PATTERN_SD.is_match(name) {
        return Qualities::P480;
    }

    Qualities::Unknown
}

/// Classify a stream resolution, falling back to its pixel height when the name says nothing
pub fn classify_resolution(name: Option<&str>, height: Option<i64>) -> Qualities {
    match quality_from_name(name) {
        Qualities::Unknown => height.map(Qualities::from_height).unwrap_or_default(),
        quality => quality,
    }
}

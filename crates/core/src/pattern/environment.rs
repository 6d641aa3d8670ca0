//! Normalization of free-text environment inputs into small enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClarityBand {
    Clear,
    Stained,
    Dirty,
    Unknown,
}

impl ClarityBand {
    pub fn as_str(self) -> &'static str {
        match self {
            ClarityBand::Clear => "clear",
            ClarityBand::Stained => "stained",
            ClarityBand::Dirty => "dirty",
            ClarityBand::Unknown => "unknown",
        }
    }
}

const DIRTY_KEYWORDS: &[&str] = &["dirty", "mud", "heavily stained", "chocolate"];
const CLEAR_KEYWORDS: &[&str] = &["clear"];
const STAINED_KEYWORDS: &[&str] = &["stain", "moderate", "off-color", "color"];

/// Bucket a clarity description into clear / stained / dirty / unknown.
pub fn classify_clarity_band(clarity: Option<&str>) -> ClarityBand {
    let Some(c) = clarity.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty()) else {
        return ClarityBand::Unknown;
    };

    // "heavily stained" is dirty, so the dirty keywords are checked first.
    if DIRTY_KEYWORDS.iter().any(|k| c.contains(k)) {
        ClarityBand::Dirty
    } else if CLEAR_KEYWORDS.iter().any(|k| c.contains(k)) {
        ClarityBand::Clear
    } else if STAINED_KEYWORDS.iter().any(|k| c.contains(k)) {
        ClarityBand::Stained
    } else {
        ClarityBand::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyBand {
    Sunny,
    PartlyCloudy,
    Overcast,
    LowLight,
    Unknown,
}

impl SkyBand {
    pub fn as_str(self) -> &'static str {
        match self {
            SkyBand::Sunny => "sunny",
            SkyBand::PartlyCloudy => "partly_cloudy",
            SkyBand::Overcast => "overcast",
            SkyBand::LowLight => "low_light",
            SkyBand::Unknown => "unknown",
        }
    }

    pub fn is_sunny(self) -> bool {
        self == SkyBand::Sunny
    }
}

/// Normalize a sky description (user input or provider text).
pub fn normalize_sky_condition(sky: Option<&str>) -> SkyBand {
    let Some(s) = sky.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty()) else {
        return SkyBand::Unknown;
    };
    let has = |keys: &[&str]| keys.iter().any(|k| s.contains(k));

    if has(&["sun", "bluebird", "bright", "clear"]) {
        SkyBand::Sunny
    } else if has(&["partly", "scattered", "broken", "few clouds"]) {
        SkyBand::PartlyCloudy
    } else if has(&["overcast", "cloud", "rain", "drizzle", "storm", "thunder", "fog", "mist"]) {
        SkyBand::Overcast
    } else if has(&["dawn", "dusk", "low light", "dark", "night"]) {
        SkyBand::LowLight
    } else {
        SkyBand::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityEstimate {
    Low,
    Moderate,
    High,
}

/// Rough feeding-activity estimate from wind, clarity and (optionally) sky.
///
/// Without a sky reading the thresholds drop by one, since the sky term can
/// contribute up to two points.
pub fn infer_activity_level(
    wind_speed: f64,
    clarity: ClarityBand,
    sky: Option<SkyBand>,
) -> ActivityEstimate {
    let mut score = 0u8;

    if (3.0..=12.0).contains(&wind_speed) {
        score += 2;
    } else if wind_speed > 12.0 {
        score += 1;
    }

    score += match clarity {
        ClarityBand::Stained => 2,
        ClarityBand::Clear | ClarityBand::Dirty => 1,
        ClarityBand::Unknown => 0,
    };

    let (high, moderate) = match sky {
        Some(sky) => {
            score += match sky {
                SkyBand::PartlyCloudy | SkyBand::Overcast | SkyBand::LowLight => 2,
                SkyBand::Sunny | SkyBand::Unknown => 1,
            };
            (5, 3)
        }
        None => (4, 2),
    };

    if score >= high {
        ActivityEstimate::High
    } else if score >= moderate {
        ActivityEstimate::Moderate
    } else {
        ActivityEstimate::Low
    }
}

/// Bottom composition as a set of keyword flags; the input is free text
/// like "rock and grass".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bottom {
    pub rock: bool,
    pub grass: bool,
    pub soft: bool,
    pub wood: bool,
}

impl Bottom {
    pub fn parse(bottom_composition: Option<&str>) -> Self {
        let b = bottom_composition.unwrap_or_default().to_lowercase();
        Self {
            rock: b.contains("rock") || b.contains("riprap") || b.contains("gravel"),
            grass: b.contains("grass") || b.contains("vegetation") || b.contains("weed"),
            soft: b.contains("sand") || b.contains("clay") || b.contains("mud"),
            wood: b.contains("wood") || b.contains("timber") || b.contains("dock"),
        }
    }

    pub fn has_cover(self) -> bool {
        self.rock || self.grass
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LakeType {
    HighlandReservoir,
    LowlandReservoir,
    NaturalLake,
    River,
    Pond,
}

impl LakeType {
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim().to_lowercase();
        if s.contains("highland") || s.contains("canyon") || s.contains("deep clear") {
            Some(LakeType::HighlandReservoir)
        } else if s.contains("lowland") || s.contains("reservoir") || s.contains("impoundment") {
            Some(LakeType::LowlandReservoir)
        } else if s.contains("natural") || s.contains("glacial") || s.contains("grass lake") {
            Some(LakeType::NaturalLake)
        } else if s.contains("river") || s.contains("tidal") || s.contains("creek") {
            Some(LakeType::River)
        } else if s.contains("pond") || s.contains("small") {
            Some(LakeType::Pond)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForageKind {
    Shad,
    Herring,
    Bluegill,
    Crawfish,
    Perch,
    Shiner,
}

impl ForageKind {
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim().to_lowercase();
        if s.contains("shad") {
            Some(ForageKind::Shad)
        } else if s.contains("herring") || s.contains("alewife") {
            Some(ForageKind::Herring)
        } else if s.contains("bluegill") || s.contains("bream") || s.contains("sunfish") {
            Some(ForageKind::Bluegill)
        } else if s.contains("craw") {
            Some(ForageKind::Crawfish)
        } else if s.contains("perch") {
            Some(ForageKind::Perch)
        } else if s.contains("shiner") || s.contains("minnow") {
            Some(ForageKind::Shiner)
        } else {
            None
        }
    }

    /// Parse a forage list, dropping unknown entries and repeats.
    pub fn parse_all(raw: &[String]) -> Vec<Self> {
        let mut out = Vec::new();
        for kind in raw.iter().filter_map(|s| Self::parse(s)) {
            if !out.contains(&kind) {
                out.push(kind);
            }
        }
        out
    }
}

impl fmt::Display for ClarityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SkyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clarity_bands() {
        assert_eq!(classify_clarity_band(Some("Gin clear")), ClarityBand::Clear);
        assert_eq!(classify_clarity_band(Some("stained")), ClarityBand::Stained);
        assert_eq!(classify_clarity_band(Some("heavily stained")), ClarityBand::Dirty);
        assert_eq!(classify_clarity_band(Some("muddy")), ClarityBand::Dirty);
        assert_eq!(classify_clarity_band(Some("chocolate milk")), ClarityBand::Dirty);
        assert_eq!(classify_clarity_band(Some("  ")), ClarityBand::Unknown);
        assert_eq!(classify_clarity_band(None), ClarityBand::Unknown);
        assert_eq!(classify_clarity_band(Some("green")), ClarityBand::Unknown);
    }

    #[test]
    fn sky_bands() {
        assert_eq!(normalize_sky_condition(Some("Sunny")), SkyBand::Sunny);
        assert_eq!(normalize_sky_condition(Some("partly cloudy")), SkyBand::PartlyCloudy);
        assert_eq!(normalize_sky_condition(Some("partly_cloudy")), SkyBand::PartlyCloudy);
        assert_eq!(normalize_sky_condition(Some("cloudy")), SkyBand::Overcast);
        assert_eq!(normalize_sky_condition(Some("light rain")), SkyBand::Overcast);
        assert_eq!(normalize_sky_condition(Some("dusk")), SkyBand::LowLight);
        assert_eq!(normalize_sky_condition(None), SkyBand::Unknown);
    }

    #[test]
    fn activity_estimate() {
        assert_eq!(
            infer_activity_level(8.0, ClarityBand::Stained, Some(SkyBand::Overcast)),
            ActivityEstimate::High
        );
        assert_eq!(
            infer_activity_level(0.0, ClarityBand::Unknown, Some(SkyBand::Sunny)),
            ActivityEstimate::Low
        );
        assert_eq!(
            infer_activity_level(20.0, ClarityBand::Clear, None),
            ActivityEstimate::Moderate
        );
    }

    #[test]
    fn bottom_flags() {
        let b = Bottom::parse(Some("Rock and Grass"));
        assert!(b.rock && b.grass && !b.soft && !b.wood);
        assert!(b.has_cover());
        assert_eq!(Bottom::parse(None), Bottom::default());
    }

    #[test]
    fn forage_and_lake_parsing() {
        let forage = ForageKind::parse_all(&[
            "Threadfin Shad".to_string(),
            "gizzard shad".to_string(),
            "crawdads".to_string(),
            "worms".to_string(),
        ]);
        assert_eq!(forage, vec![ForageKind::Shad, ForageKind::Crawfish]);
        assert_eq!(LakeType::parse("Highland reservoir"), Some(LakeType::HighlandReservoir));
        assert_eq!(LakeType::parse("river"), Some(LakeType::River));
        assert_eq!(LakeType::parse("??"), None);
    }
}

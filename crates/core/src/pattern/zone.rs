//! Depth vocabularies.
//!
//! Three label sets coexist: the coarse [`DepthZone`] used by the Basic tier,
//! the finer [`DepthBand`] used by Pro and Elite, and the sonar-derived
//! [`BiteZone`] produced by fusion. [`PatternZone`] is what a Pro/Elite
//! response carries, because a high-confidence vision overlay may replace the
//! band with a bite zone.

use crate::pattern::phase::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse depth zone: shallow → mid-depth → offshore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DepthZone {
    #[serde(rename = "shallow")]
    Shallow,
    #[serde(rename = "mid-depth")]
    MidDepth,
    #[serde(rename = "offshore")]
    Offshore,
}

impl DepthZone {
    pub fn as_str(self) -> &'static str {
        match self {
            DepthZone::Shallow => "shallow",
            DepthZone::MidDepth => "mid-depth",
            DepthZone::Offshore => "offshore",
        }
    }
}

/// Fine depth band: ultra_shallow → mid_shallow → mid_depth → deep → offshore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthBand {
    UltraShallow,
    MidShallow,
    MidDepth,
    Deep,
    Offshore,
}

impl DepthBand {
    pub fn as_str(self) -> &'static str {
        match self {
            DepthBand::UltraShallow => "ultra_shallow",
            DepthBand::MidShallow => "mid_shallow",
            DepthBand::MidDepth => "mid_depth",
            DepthBand::Deep => "deep",
            DepthBand::Offshore => "offshore",
        }
    }

    pub fn coarse(self) -> DepthZone {
        match self {
            DepthBand::UltraShallow | DepthBand::MidShallow => DepthZone::Shallow,
            DepthBand::MidDepth => DepthZone::MidDepth,
            DepthBand::Deep | DepthBand::Offshore => DepthZone::Offshore,
        }
    }

    pub fn is_deep_water(self) -> bool {
        matches!(self, DepthBand::Deep | DepthBand::Offshore)
    }
}

/// Sonar-derived zone used by fusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiteZone {
    Shallow,
    Mid,
    Deep,
}

impl BiteZone {
    pub fn as_str(self) -> &'static str {
        match self {
            BiteZone::Shallow => "shallow",
            BiteZone::Mid => "mid",
            BiteZone::Deep => "deep",
        }
    }

    /// ≤ 8 ft shallow, ≤ 15 ft mid, deeper is deep.
    pub fn from_depth(depth_ft: f64) -> Self {
        if depth_ft <= 8.0 {
            BiteZone::Shallow
        } else if depth_ft <= 15.0 {
            BiteZone::Mid
        } else {
            BiteZone::Deep
        }
    }
}

/// Depth focus of a Pro/Elite pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternZone {
    Band(DepthBand),
    Vision(BiteZone),
}

impl PatternZone {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternZone::Band(band) => band.as_str(),
            PatternZone::Vision(zone) => zone.as_str(),
        }
    }

    /// The bite zone spelled with the same label, if there is one.
    ///
    /// Only `deep` is shared between the band and bite vocabularies, so a
    /// vision override can only start from `deep` or from an earlier override.
    pub fn as_bite_zone(self) -> Option<BiteZone> {
        match self {
            PatternZone::Band(DepthBand::Deep) => Some(BiteZone::Deep),
            PatternZone::Band(_) => None,
            PatternZone::Vision(zone) => Some(zone),
        }
    }

    pub fn band(self) -> Option<DepthBand> {
        match self {
            PatternZone::Band(band) => Some(band),
            PatternZone::Vision(_) => None,
        }
    }
}

impl From<DepthBand> for PatternZone {
    fn from(band: DepthBand) -> Self {
        PatternZone::Band(band)
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_via_as_str!(DepthZone, DepthBand, BiteZone, PatternZone);

/// Coarse zone from an explicit depth, or from the phase when depth is unknown.
pub fn infer_depth_zone(phase: Phase, depth_ft: Option<f64>) -> DepthZone {
    if let Some(depth) = depth_ft.filter(|d| !d.is_nan()) {
        return if depth < 8.0 {
            DepthZone::Shallow
        } else if depth <= 15.0 {
            DepthZone::MidDepth
        } else {
            DepthZone::Offshore
        };
    }

    match phase {
        Phase::Winter | Phase::Summer => DepthZone::Offshore,
        Phase::PreSpawn | Phase::SpawnPostSpawn => DepthZone::Shallow,
        Phase::Fall => DepthZone::MidDepth,
    }
}

/// Fine band from an explicit depth, or from the phase when depth is unknown.
pub fn infer_depth_band(phase: Phase, depth_ft: Option<f64>) -> DepthBand {
    if let Some(depth) = depth_ft.filter(|d| !d.is_nan()) {
        return if depth < 4.0 {
            DepthBand::UltraShallow
        } else if depth < 8.0 {
            DepthBand::MidShallow
        } else if depth <= 15.0 {
            DepthBand::MidDepth
        } else if depth <= 25.0 {
            DepthBand::Deep
        } else {
            DepthBand::Offshore
        };
    }

    match phase {
        Phase::Winter => DepthBand::Deep,
        Phase::PreSpawn => DepthBand::MidShallow,
        Phase::SpawnPostSpawn => DepthBand::UltraShallow,
        Phase::Summer => DepthBand::Offshore,
        Phase::Fall => DepthBand::MidDepth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_depth_thresholds() {
        assert_eq!(infer_depth_zone(Phase::PreSpawn, Some(5.0)), DepthZone::Shallow);
        assert_eq!(infer_depth_zone(Phase::PreSpawn, Some(12.0)), DepthZone::MidDepth);
        assert_eq!(infer_depth_zone(Phase::PreSpawn, Some(25.0)), DepthZone::Offshore);
        assert_eq!(infer_depth_zone(Phase::Winter, Some(15.0)), DepthZone::MidDepth);
    }

    #[test]
    fn phase_fallback_without_depth() {
        assert_eq!(infer_depth_zone(Phase::Winter, None), DepthZone::Offshore);
        assert_eq!(infer_depth_zone(Phase::PreSpawn, None), DepthZone::Shallow);
        assert_eq!(infer_depth_zone(Phase::Fall, None), DepthZone::MidDepth);
        assert_eq!(infer_depth_band(Phase::Summer, None), DepthBand::Offshore);
        assert_eq!(infer_depth_band(Phase::SpawnPostSpawn, None), DepthBand::UltraShallow);
    }

    #[test]
    fn zones_are_monotonic_in_depth() {
        let depths: Vec<f64> = (0..=80).map(|d| d as f64 * 0.5).collect();
        for phase in Phase::ALL {
            for pair in depths.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(infer_depth_zone(phase, Some(a)) <= infer_depth_zone(phase, Some(b)));
                assert!(infer_depth_band(phase, Some(a)) <= infer_depth_band(phase, Some(b)));
                assert!(BiteZone::from_depth(a) <= BiteZone::from_depth(b));
            }
        }
    }

    #[test]
    fn band_coarsens_consistently() {
        for d in [1.0, 5.0, 10.0, 20.0, 40.0] {
            let band = infer_depth_band(Phase::Summer, Some(d));
            let zone = infer_depth_zone(Phase::Summer, Some(d));
            assert_eq!(band.coarse(), zone, "depth {d}");
        }
    }

    #[test]
    fn bite_zone_thresholds() {
        assert_eq!(BiteZone::from_depth(8.0), BiteZone::Shallow);
        assert_eq!(BiteZone::from_depth(12.5), BiteZone::Mid);
        assert_eq!(BiteZone::from_depth(15.1), BiteZone::Deep);
    }

    #[test]
    fn only_deep_band_maps_to_a_bite_zone() {
        assert_eq!(PatternZone::Band(DepthBand::Deep).as_bite_zone(), Some(BiteZone::Deep));
        assert_eq!(PatternZone::Band(DepthBand::MidDepth).as_bite_zone(), None);
        assert_eq!(PatternZone::Vision(BiteZone::Mid).as_bite_zone(), Some(BiteZone::Mid));
    }

    #[test]
    fn pattern_zone_serializes_as_plain_label() {
        let band = serde_json::to_value(PatternZone::Band(DepthBand::MidShallow)).unwrap();
        assert_eq!(band, serde_json::json!("mid_shallow"));
        let vision = serde_json::to_value(PatternZone::Vision(BiteZone::Mid)).unwrap();
        assert_eq!(vision, serde_json::json!("mid"));
        let coarse = serde_json::to_value(DepthZone::MidDepth).unwrap();
        assert_eq!(coarse, serde_json::json!("mid-depth"));
    }
}

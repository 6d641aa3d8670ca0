use crate::fusion::{ConfidenceLevel, VisionContext};
use crate::pattern::environment::{ActivityEstimate, ClarityBand, SkyBand};
use crate::pattern::gear::LureSetup;
use crate::pattern::phase::Phase;
use crate::pattern::zone::{BiteZone, DepthZone, PatternZone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Basic tier: seasonal pattern and techniques only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicPatternResponse {
    pub phase: Phase,
    pub depth_zone: DepthZone,
    pub recommended_techniques: Vec<String>,
    pub targets: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProPatternResponse {
    pub phase: Phase,
    pub depth_zone: PatternZone,
    pub recommended_lures: Vec<String>,
    pub recommended_targets: Vec<String>,
    pub strategy_tips: Vec<String>,
    pub color_recommendations: Vec<String>,
    pub lure_setups: Vec<LureSetup>,
    pub conditions: PatternConditions,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElitePatternResponse {
    #[serde(flatten)]
    pub pattern: ProPatternResponse,
    pub gameplan: Vec<String>,
    pub adjustments: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Pro,
    Elite,
}

/// Where temperature, wind and sky came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSource {
    /// All three were supplied by the caller.
    Request,
    /// All three came from the resolved weather.
    Weather,
    Mixed,
}

impl WeatherSource {
    pub fn from_explicit(temp: bool, wind: bool, sky: bool) -> Self {
        match (temp, wind, sky) {
            (true, true, true) => WeatherSource::Request,
            (false, false, false) => WeatherSource::Weather,
            _ => WeatherSource::Mixed,
        }
    }
}

/// Resolved inputs and annotations attached to Pro, Elite and vision-tier
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConditions {
    pub tier: Tier,
    pub temp_f: f64,
    pub month: u32,
    pub clarity: Option<String>,
    pub clarity_band: ClarityBand,
    pub wind_speed: f64,
    pub sky_condition: Option<String>,
    pub sky_band: SkyBand,
    pub depth_ft: Option<f64>,
    pub bottom_composition: Option<String>,
    pub forage: Vec<String>,
    pub lake_type: Option<String>,
    pub activity_estimate: ActivityEstimate,
    pub weather_source: WeatherSource,
    pub weather_timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub session: Option<SessionConditions>,
    #[serde(flatten)]
    pub vision: Option<VisionConditions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_trend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_level_trend: Option<String>,
    pub tournament_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConditions {
    pub session_context: SessionContext,
    pub time_of_day_normalized: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisionSummary {
    pub should_camp: bool,
    pub likely_quality_bite_zone: BiteZone,
    pub confidence_level: ConfidenceLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionWeather {
    pub temp_f: f64,
    pub wind_mph: f64,
    pub cloud_cover: SkyBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionReport {
    pub sonar: VisionContext,
    pub weather: FusionWeather,
    pub strength: ConfidenceLevel,
    pub should_camp: bool,
    pub likely_quality_bite_zone: BiteZone,
}

/// Added by the vision overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionConditions {
    pub base_depth_zone: PatternZone,
    pub vision_enhanced: bool,
    pub vision_depth_zone: BiteZone,
    pub vision_summary: VisionSummary,
    pub vision_signals: VisionContext,
    pub vision: VisionContext,
    pub fusion: FusionReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_source_classification() {
        assert_eq!(WeatherSource::from_explicit(true, true, true), WeatherSource::Request);
        assert_eq!(WeatherSource::from_explicit(false, false, false), WeatherSource::Weather);
        assert_eq!(WeatherSource::from_explicit(true, false, false), WeatherSource::Mixed);
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Tier::Pro).unwrap(), "pro");
        assert_eq!(serde_json::to_value(Tier::Elite).unwrap(), "elite");
    }
}

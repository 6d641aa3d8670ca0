use crate::pattern::environment::SkyBand;
use crate::pattern::zone::BiteZone;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather snapshot used by Pro/Elite and by fusion. Always fully populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherContext {
    pub temp_f: f64,
    pub wind_speed: f64,
    pub sky_condition: SkyBand,
    pub timestamp: DateTime<Utc>,
}

impl WeatherContext {
    pub const STUB_TEMP_F: f64 = 60.0;
    pub const STUB_WIND_SPEED: f64 = 5.0;
    pub const STUB_SKY: SkyBand = SkyBand::PartlyCloudy;

    /// Mild, partly cloudy conditions stamped with the current time.
    pub fn stub() -> Self {
        Self::stub_at(Utc::now())
    }

    pub fn stub_at(timestamp: DateTime<Utc>) -> Self {
        Self {
            temp_f: Self::STUB_TEMP_F,
            wind_speed: Self::STUB_WIND_SPEED,
            sky_condition: Self::STUB_SKY,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ActivityLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "low" => Some(ActivityLevel::Low),
            "medium" => Some(ActivityLevel::Medium),
            "high" => Some(ActivityLevel::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BottomHardness {
    Soft,
    #[default]
    Medium,
    Hard,
}

impl BottomHardness {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "soft" => Some(BottomHardness::Soft),
            "medium" => Some(BottomHardness::Medium),
            "hard" => Some(BottomHardness::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopOrKeepMoving {
    Stop,
    #[default]
    KeepMoving,
}

impl StopOrKeepMoving {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "stop" => Some(StopOrKeepMoving::Stop),
            "keep_moving" => Some(StopOrKeepMoving::KeepMoving),
            _ => None,
        }
    }
}

/// Distilled sonar reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionContext {
    pub depth_ft: f64,
    pub arch_count: u32,
    pub activity_level: ActivityLevel,
    pub bait_present: bool,
    pub bottom_hardness: BottomHardness,
    pub stop_or_keep_moving: StopOrKeepMoving,
}

impl Default for VisionContext {
    fn default() -> Self {
        Self {
            depth_ft: 10.0,
            arch_count: 3,
            activity_level: ActivityLevel::Medium,
            bait_present: false,
            bottom_hardness: BottomHardness::Medium,
            stop_or_keep_moving: StopOrKeepMoving::KeepMoving,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// Weather and sonar combined into a single judgement about an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedContext {
    pub weather: WeatherContext,
    pub vision: VisionContext,
    pub should_camp: bool,
    pub likely_quality_bite_zone: BiteZone,
    pub confidence_level: ConfidenceLevel,
}

//! Weather and sonar fusion.
//!
//! [`fuse_weather_and_vision`] turns the two independent signals into a
//! [`FusedContext`]; [`apply_vision_adjustments`] overlays it on an Elite
//! pattern.

mod adjust;
mod context;

pub use adjust::apply_vision_adjustments;
pub use context::{
    ActivityLevel, BottomHardness, ConfidenceLevel, FusedContext, StopOrKeepMoving,
    VisionContext, WeatherContext,
};

use crate::pattern::zone::BiteZone;

const ARCH_CAP: u32 = 10;
const HIGH_CONFIDENCE_SCORE: u32 = 12;
const MEDIUM_CONFIDENCE_SCORE: u32 = 6;

fn estimate_confidence(vision: &VisionContext) -> ConfidenceLevel {
    let mut score = vision.arch_count.min(ARCH_CAP);
    score += match vision.activity_level {
        ActivityLevel::High => 3,
        ActivityLevel::Medium => 1,
        ActivityLevel::Low => 0,
    };
    if vision.bait_present {
        score += 3;
    }

    if score >= HIGH_CONFIDENCE_SCORE {
        ConfidenceLevel::High
    } else if score >= MEDIUM_CONFIDENCE_SCORE {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

pub fn fuse_weather_and_vision(weather: &WeatherContext, vision: &VisionContext) -> FusedContext {
    let should_camp = vision.arch_count >= 5
        && matches!(vision.activity_level, ActivityLevel::Medium | ActivityLevel::High)
        && vision.bait_present
        && vision.stop_or_keep_moving == StopOrKeepMoving::Stop;

    FusedContext {
        weather: weather.clone(),
        vision: vision.clone(),
        should_camp,
        likely_quality_bite_zone: BiteZone::from_depth(vision.depth_ft),
        confidence_level: estimate_confidence(vision),
    }
}

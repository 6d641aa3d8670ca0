//! Snapshot analyzers for on-water photos and fishfinder screens.
//!
//! The analyzers return fixed readings until a model is wired in; the shapes
//! are what clients and the fusion layer consume.

use crate::fusion::{ActivityLevel, BottomHardness, StopOrKeepMoving, VisionContext};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRequest {
    #[serde(default)]
    pub stub: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnWaterReading {
    pub request_id: Uuid,
    pub water_clarity: String,
    pub visible_structure: String,
    pub vegetation: String,
    pub bank_angle: String,
    pub shade_cover: String,
    pub light_penetration: String,
    pub worth_fishing: bool,
    pub raw_attributes: Map<String, Value>,
}

pub fn analyze_on_water() -> OnWaterReading {
    OnWaterReading {
        request_id: Uuid::new_v4(),
        water_clarity: "stained".into(),
        visible_structure: "riprap".into(),
        vegetation: "none".into(),
        bank_angle: "steep".into(),
        shade_cover: "low".into(),
        light_penetration: "medium".into(),
        worth_fishing: true,
        raw_attributes: Map::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishfinderReading {
    pub request_id: Uuid,
    pub depth_ft: f64,
    pub bottom_hardness: BottomHardness,
    pub bait_present: bool,
    pub fish_present: bool,
    pub arch_count: u32,
    pub activity_level: ActivityLevel,
    pub worth_fishing: bool,
    pub stop_or_keep_moving: StopOrKeepMoving,
    pub raw_attributes: Map<String, Value>,
}

impl FishfinderReading {
    pub fn to_vision_context(&self) -> VisionContext {
        VisionContext {
            depth_ft: self.depth_ft,
            arch_count: self.arch_count,
            activity_level: self.activity_level,
            bait_present: self.bait_present,
            bottom_hardness: self.bottom_hardness,
            stop_or_keep_moving: self.stop_or_keep_moving,
        }
    }
}

pub fn analyze_fishfinder() -> FishfinderReading {
    FishfinderReading {
        request_id: Uuid::new_v4(),
        depth_ft: 14.0,
        bottom_hardness: BottomHardness::Hard,
        bait_present: true,
        fish_present: true,
        arch_count: 7,
        activity_level: ActivityLevel::Medium,
        worth_fishing: true,
        stop_or_keep_moving: StopOrKeepMoving::KeepMoving,
        raw_attributes: Map::new(),
    }
}

/// Sonar fields as sent by clients. Every field is optional, and a field of
/// the wrong type reads as absent instead of rejecting the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawVisionSignals {
    #[serde(default, deserialize_with = "lenient")]
    pub depth_ft: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub arch_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub activity_level: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bait_present: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub bottom_hardness: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub stop_or_keep_moving: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Arch counts also arrive as whole floats (`5.0`) or numeric strings (`"7"`).
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.and_then(|c| u32::try_from(c).ok()))
}

impl RawVisionSignals {
    /// Missing or unrecognized fields take the [`VisionContext`] defaults.
    pub fn into_context(self) -> VisionContext {
        let defaults = VisionContext::default();
        VisionContext {
            depth_ft: self
                .depth_ft
                .filter(|d| d.is_finite() && *d >= 0.0)
                .unwrap_or(defaults.depth_ft),
            arch_count: self.arch_count.unwrap_or(defaults.arch_count),
            activity_level: self
                .activity_level
                .as_deref()
                .and_then(ActivityLevel::parse)
                .unwrap_or(defaults.activity_level),
            bait_present: self.bait_present.unwrap_or(defaults.bait_present),
            bottom_hardness: self
                .bottom_hardness
                .as_deref()
                .and_then(BottomHardness::parse)
                .unwrap_or(defaults.bottom_hardness),
            stop_or_keep_moving: self
                .stop_or_keep_moving
                .as_deref()
                .and_then(StopOrKeepMoving::parse)
                .unwrap_or(defaults.stop_or_keep_moving),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyVisionRequest {
    pub pattern_conditions: Map<String, Value>,
    #[serde(default)]
    pub on_water: Option<Value>,
    #[serde(default)]
    pub fishfinder: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyVisionResponse {
    pub updated_conditions: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionFlags {
    pub has_on_water: bool,
    pub has_fishfinder: bool,
    pub fusion_ready: bool,
}

/// Annotate a caller-supplied conditions object with snapshot readings.
pub fn apply_vision_to_conditions(
    mut conditions: Map<String, Value>,
    on_water: Option<Value>,
    fishfinder: Option<Value>,
) -> Map<String, Value> {
    let flags = VisionFlags {
        has_on_water: on_water.is_some(),
        has_fishfinder: fishfinder.is_some(),
        fusion_ready: on_water.is_some() && fishfinder.is_some(),
    };

    if let Some(reading) = on_water {
        conditions.insert("vision_on_water".into(), reading);
    }
    if let Some(reading) = fishfinder {
        conditions.insert("vision_fishfinder".into(), reading);
    }
    let applied = flags.has_on_water || flags.has_fishfinder;
    conditions.insert(
        "vision_flags".into(),
        serde_json::to_value(flags).unwrap_or_default(),
    );
    conditions.insert("vision_applied".into(), Value::Bool(applied));
    conditions
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fishfinder_stub_feeds_fusion() {
        let reading = analyze_fishfinder();
        let ctx = reading.to_vision_context();
        assert_eq!(ctx.depth_ft, 14.0);
        assert_eq!(ctx.arch_count, 7);
        assert_eq!(ctx.stop_or_keep_moving, StopOrKeepMoving::KeepMoving);

        let body = serde_json::to_value(&reading).unwrap();
        assert_eq!(body["bottom_hardness"], "hard");
        assert_eq!(body["stop_or_keep_moving"], "keep_moving");
    }

    #[test]
    fn each_snapshot_gets_its_own_request_id() {
        assert_ne!(analyze_on_water().request_id, analyze_on_water().request_id);
    }

    #[test]
    fn raw_signals_fill_defaults() {
        let ctx = RawVisionSignals {
            depth_ft: Some(f64::NAN),
            activity_level: Some("frantic".into()),
            bait_present: Some(true),
            ..RawVisionSignals::default()
        }
        .into_context();
        assert_eq!(
            ctx,
            VisionContext {
                bait_present: true,
                ..VisionContext::default()
            }
        );
    }

    #[test]
    fn raw_signals_parse_from_json() {
        let raw: RawVisionSignals = serde_json::from_value(json!({
            "depth_ft": 12.5,
            "arch_count": 5,
            "activity_level": "medium",
            "bait_present": true,
            "bottom_hardness": "hard",
            "stop_or_keep_moving": "stop"
        }))
        .unwrap();
        let ctx = raw.into_context();
        assert_eq!(ctx.depth_ft, 12.5);
        assert_eq!(ctx.bottom_hardness, BottomHardness::Hard);
        assert_eq!(ctx.stop_or_keep_moving, StopOrKeepMoving::Stop);
    }

    #[test]
    fn mistyped_fields_fall_back_per_field() {
        let raw: RawVisionSignals = serde_json::from_value(json!({
            "depth_ft": "deep",
            "arch_count": -1,
            "activity_level": 3,
            "bait_present": "yes",
            "bottom_hardness": "hard",
            "stop_or_keep_moving": null
        }))
        .unwrap();
        assert_eq!(
            raw.into_context(),
            VisionContext {
                bottom_hardness: BottomHardness::Hard,
                ..VisionContext::default()
            }
        );
    }

    #[test]
    fn arch_count_accepts_whole_floats_and_numeric_strings() {
        let count = |v: Value| {
            serde_json::from_value::<RawVisionSignals>(json!({ "arch_count": v }))
                .unwrap()
                .arch_count
        };
        assert_eq!(count(json!(5.0)), Some(5));
        assert_eq!(count(json!("7")), Some(7));
        assert_eq!(count(json!(2.5)), None);
        assert_eq!(count(json!(-1)), None);
        assert_eq!(count(json!(true)), None);
    }

    #[test]
    fn apply_sets_flags_and_keeps_caller_fields() {
        let mut base = Map::new();
        base.insert("phase".into(), json!("pre-spawn"));

        let out = apply_vision_to_conditions(base.clone(), Some(json!({"water_clarity": "stained"})), None);
        assert_eq!(out["phase"], "pre-spawn");
        assert_eq!(out["vision_on_water"]["water_clarity"], "stained");
        assert!(!out.contains_key("vision_fishfinder"));
        assert_eq!(
            out["vision_flags"],
            json!({"has_on_water": true, "has_fishfinder": false, "fusion_ready": false})
        );
        assert_eq!(out["vision_applied"], true);

        let untouched = apply_vision_to_conditions(base, None, None);
        assert_eq!(untouched["vision_applied"], false);
    }
}

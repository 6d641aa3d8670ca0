use crate::domain::{BasicPatternRequest, BasicPatternResponse};
use crate::pattern::environment::classify_clarity_band;
use crate::pattern::phase::classify_phase;
use crate::pattern::targets::build_targets_and_tips;
use crate::pattern::techniques::{adjust_techniques_for_conditions, recommend_techniques};
use crate::pattern::zone::infer_depth_zone;

/// Full English month name, or a neutral phrase outside 1..=12.
pub(crate) fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("this time of year")
}

pub(crate) fn clarity_text(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "unknown-clarity".to_string())
}

pub fn build_basic_pattern(req: &BasicPatternRequest) -> BasicPatternResponse {
    let phase = classify_phase(req.temp_f, req.month);
    let depth_zone = infer_depth_zone(phase, None);
    let clarity = classify_clarity_band(Some(&req.clarity));

    let recommended_techniques = adjust_techniques_for_conditions(
        &recommend_techniques(phase, depth_zone),
        clarity,
        req.wind_speed,
    );
    let targets =
        build_targets_and_tips(phase, depth_zone, clarity, req.wind_speed, None).recommended_targets;

    let notes = format!(
        "With water temperatures around {:.0}°F in {}, {} water, and roughly {:.0} mph wind, \
         SAGE identifies this as a '{phase}' pattern. The inferred depth zone is '{depth_zone}', \
         so these core techniques are a solid starting point for the conditions.",
        req.temp_f,
        month_name(req.month),
        clarity_text(Some(&req.clarity)),
        req.wind_speed,
    );

    BasicPatternResponse {
        phase,
        depth_zone,
        recommended_techniques,
        targets,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::phase::Phase;
    use crate::pattern::zone::DepthZone;

    fn request(temp_f: f64, month: u32) -> BasicPatternRequest {
        BasicPatternRequest {
            temp_f,
            month,
            clarity: "Stained".into(),
            wind_speed: 8.0,
        }
    }

    #[test]
    fn early_spring_is_shallow_pre_spawn() {
        let resp = build_basic_pattern(&request(55.0, 3));
        assert_eq!(resp.phase, Phase::PreSpawn);
        assert_eq!(resp.depth_zone, DepthZone::Shallow);
        assert!(!resp.recommended_techniques.is_empty());
        assert!(!resp.targets.is_empty());
        assert!(resp.notes.contains("March"));
        assert!(resp.notes.contains("stained water"));
        assert!(resp.notes.contains("'pre-spawn'"));
    }

    #[test]
    fn response_omits_pro_fields() {
        let body = serde_json::to_value(build_basic_pattern(&request(42.0, 1))).unwrap();
        let obj = body.as_object().unwrap();
        for key in [
            "recommended_lures",
            "recommended_targets",
            "strategy_tips",
            "color_recommendations",
            "conditions",
            "lure_setups",
        ] {
            assert!(!obj.contains_key(key), "{key} leaked into basic response");
        }
        assert_eq!(body["phase"], "winter");
        assert_eq!(body["depth_zone"], "offshore");
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "this time of year");
    }
}

use crate::domain::{ElitePatternResponse, FusionReport, FusionWeather, VisionConditions, VisionSummary};
use crate::fusion::{ConfidenceLevel, FusedContext};
use crate::pattern::zone::PatternZone;

/// Overlay a fused sonar reading on an Elite pattern.
///
/// With `None` the pattern is returned untouched. Otherwise the depth focus
/// may tilt toward the sonar zone (high confidence only, and only when the
/// current label is one of the bite-zone labels), conditions gain the vision
/// and fusion blocks, and one gameplan and one adjustment line are appended.
pub fn apply_vision_adjustments(
    mut base: ElitePatternResponse,
    fused: Option<&FusedContext>,
) -> ElitePatternResponse {
    let Some(fused) = fused else {
        return base;
    };

    let pattern = &mut base.pattern;
    let original_zone = pattern.depth_zone;
    let vision_zone = fused.likely_quality_bite_zone;

    let overridable = original_zone.as_bite_zone().is_some();
    if fused.confidence_level == ConfidenceLevel::High
        && overridable
        && original_zone.as_bite_zone() != Some(vision_zone)
    {
        pattern.depth_zone = PatternZone::Vision(vision_zone);
        pattern.notes.push_str(&format!(
            " Vision suggests most activity around {vision_zone} depth; \
             pattern depth focus has been lightly tilted toward that zone."
        ));
        tracing::debug!(from = %original_zone, to = %vision_zone, "depth focus tilted by vision");
    }

    // A second overlay keeps the zone the rules engine chose.
    let base_depth_zone = pattern
        .conditions
        .vision
        .as_ref()
        .map_or(original_zone, |v| v.base_depth_zone);

    pattern.conditions.vision = Some(VisionConditions {
        base_depth_zone,
        vision_enhanced: true,
        vision_depth_zone: vision_zone,
        vision_summary: VisionSummary {
            should_camp: fused.should_camp,
            likely_quality_bite_zone: vision_zone,
            confidence_level: fused.confidence_level,
        },
        vision_signals: fused.vision.clone(),
        vision: fused.vision.clone(),
        fusion: FusionReport {
            sonar: fused.vision.clone(),
            weather: FusionWeather {
                temp_f: fused.weather.temp_f,
                wind_mph: fused.weather.wind_speed,
                cloud_cover: fused.weather.sky_condition,
            },
            strength: fused.confidence_level,
            should_camp: fused.should_camp,
            likely_quality_bite_zone: vision_zone,
        },
    });

    base.gameplan.push(if fused.should_camp {
        "Sonar shows enough life here to work this area thoroughly before moving on.".to_string()
    } else {
        "Sonar does not show overwhelming life; be ready to keep moving if you don't see signs of activity.".to_string()
    });

    base.adjustments.push(
        match fused.confidence_level {
            ConfidenceLevel::High => {
                "Fusion confidence is high: trust this area and rotate through multiple looks before abandoning it."
            }
            ConfidenceLevel::Medium => {
                "Fusion confidence is moderate: give this area a fair look, then compare it with your next best spot."
            }
            ConfidenceLevel::Low => {
                "Fusion confidence is low: treat this as a quick check rather than a long-term stop."
            }
        }
        .to_string(),
    );

    base
}

use crate::pattern::environment::ClarityBand;
use crate::pattern::list::dedupe_case_insensitive;
use crate::pattern::phase::Phase;
use crate::pattern::zone::DepthZone;

/// Basic-tier technique suggestions (no specific lures).
pub fn recommend_techniques(phase: Phase, depth_zone: DepthZone) -> Vec<String> {
    let techniques: &[&str] = match depth_zone {
        DepthZone::Offshore => &["dropshot", "carolina rig", "football jig"],
        DepthZone::MidDepth => &["texas rig", "mid-depth crankbait", "swimbait on a jighead"],
        DepthZone::Shallow => match phase {
            Phase::PreSpawn | Phase::SpawnPostSpawn => {
                &["weightless fluke", "wacky rig", "texas rig around cover"]
            }
            _ => &[
                "shallow squarebill crankbait",
                "spinnerbait",
                "texas rig around shallow cover",
            ],
        },
    };
    dedupe_case_insensitive(techniques.iter().copied())
}

/// Append clarity and wind techniques; existing entries keep their order.
pub fn adjust_techniques_for_conditions(
    techniques: &[String],
    clarity: ClarityBand,
    wind_speed: f64,
) -> Vec<String> {
    let mut out = techniques.to_vec();
    match clarity {
        ClarityBand::Dirty => out.push("bladed jig or big-blade spinnerbait for vibration".into()),
        ClarityBand::Clear => out.push("finesse presentations on light line".into()),
        ClarityBand::Stained | ClarityBand::Unknown => {}
    }
    if wind_speed >= 10.0 {
        out.push("moving baits on wind-blown banks".into());
    }
    dedupe_case_insensitive(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn techniques_change_with_depth_zone() {
        let shallow = recommend_techniques(Phase::PreSpawn, DepthZone::Shallow);
        let offshore = recommend_techniques(Phase::Summer, DepthZone::Offshore);
        assert!(offshore.iter().any(|t| t.eq_ignore_ascii_case("dropshot")));
        assert!(shallow
            .iter()
            .any(|t| t.contains("fluke") || t.contains("wacky")));
    }

    #[test]
    fn shallow_outside_spawn_uses_moving_baits() {
        let fall = recommend_techniques(Phase::Fall, DepthZone::Shallow);
        assert_eq!(fall[0], "shallow squarebill crankbait");
    }

    #[test]
    fn condition_adjustment_appends_only() {
        let base = recommend_techniques(Phase::Winter, DepthZone::Offshore);
        let out = adjust_techniques_for_conditions(&base, ClarityBand::Dirty, 14.0);
        assert_eq!(&out[..base.len()], &base[..]);
        assert_eq!(out.len(), base.len() + 2);
        let again = adjust_techniques_for_conditions(&out, ClarityBand::Dirty, 14.0);
        assert_eq!(again, out);
    }
}

use crate::pattern::environment::{Bottom, ClarityBand};
use crate::pattern::list::{any_contains, dedupe_case_insensitive};
use crate::pattern::phase::Phase;
use crate::pattern::zone::DepthZone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetsAndTips {
    pub recommended_targets: Vec<String>,
    pub strategy_tips: Vec<String>,
}

struct Situation {
    phase: Phase,
    depth_zone: DepthZone,
    clarity: ClarityBand,
    wind_speed: f64,
    bottom: Bottom,
}

/// A keyword the output must mention, and the phrase added when it does not.
struct Guarantee {
    keyword: &'static str,
    phrase: &'static str,
}

struct CompoundRule {
    applies: fn(&Situation) -> bool,
    targets: &'static [Guarantee],
    tips: &'static [Guarantee],
}

fn pre_spawn_dirty_wind_on_cover(s: &Situation) -> bool {
    s.phase == Phase::PreSpawn
        && s.depth_zone == DepthZone::Shallow
        && s.clarity == ClarityBand::Dirty
        && s.wind_speed >= 10.0
        && s.bottom.has_cover()
}

fn summer_offshore_clear_calm(s: &Situation) -> bool {
    s.phase == Phase::Summer
        && s.depth_zone == DepthZone::Offshore
        && s.clarity == ClarityBand::Clear
        && s.wind_speed <= 3.0
}

fn winter_dirty(s: &Situation) -> bool {
    s.phase == Phase::Winter && s.clarity == ClarityBand::Dirty
}

const COMPOUND_RULES: &[CompoundRule] = &[
    CompoundRule {
        applies: pre_spawn_dirty_wind_on_cover,
        targets: &[
            Guarantee {
                keyword: "secondary points",
                phrase: "secondary points near spawning flats",
            },
            Guarantee {
                keyword: "wind-blown",
                phrase: "wind-blown banks with grass or rock close to spawning pockets",
            },
        ],
        tips: &[Guarantee {
            keyword: "wind-blown",
            phrase: "Work loud, bulky baits along wind-blown cover where pre-spawn fish push up to feed in dirty water.",
        }],
    },
    CompoundRule {
        applies: summer_offshore_clear_calm,
        targets: &[],
        tips: &[
            Guarantee {
                keyword: "dropshot",
                phrase: "Slick, clear summer days favor a dropshot on offshore schools.",
            },
            Guarantee {
                keyword: "early",
                phrase: "Fish shallow cover early before the sun gets high, then commit offshore.",
            },
        ],
    },
    CompoundRule {
        applies: winter_dirty,
        targets: &[],
        tips: &[Guarantee {
            keyword: "bottom",
            phrase: "Cold, dirty water means a slow, deliberate retrieve with constant bottom contact.",
        }],
    },
];

fn inject(items: &mut Vec<String>, guarantees: &[Guarantee]) {
    for g in guarantees {
        if !any_contains(items, g.keyword) {
            items.push(g.phrase.to_string());
        }
    }
}

/// Compose target areas and strategy tips.
///
/// Phrases are added in a fixed order (phase, depth, clarity, bottom, wind),
/// then compound rules guarantee their keywords appear.
pub fn build_targets_and_tips(
    phase: Phase,
    depth_zone: DepthZone,
    clarity: ClarityBand,
    wind_speed: f64,
    bottom_composition: Option<&str>,
) -> TargetsAndTips {
    let bottom = Bottom::parse(bottom_composition);
    let mut targets: Vec<String> = Vec::new();
    let mut tips: Vec<String> = Vec::new();

    let (phase_targets, phase_tip): (&[&str], &str) = match phase {
        Phase::PreSpawn => (
            &["secondary points near spawning flats", "channel swings close to shallow flats"],
            "Use your baits to cover secondary points and channel swings leading into spawning pockets.",
        ),
        Phase::SpawnPostSpawn => (
            &["protected spawning pockets and flats", "nearby bluegill beds or docks"],
            "Focus on protected shallow areas and nearby cover where post-spawn bass can recover and feed.",
        ),
        Phase::Winter => (
            &["steep channel swings and main-lake drops", "offshore structure close to deep water"],
            "Slow down around steep structure close to deep water; fish are less willing to chase.",
        ),
        Phase::Summer => (
            &["offshore humps, ledges, and river channels", "current-related structure if available"],
            "Use your electronics to find groups of fish on offshore structure and rotate through key spots.",
        ),
        Phase::Fall => (
            &["wind-blown banks and points", "shad-filled pockets and creek arms"],
            "Follow the bait into creeks and pockets, especially where wind pushes bait toward the bank.",
        ),
    };
    targets.extend(phase_targets.iter().map(|s| s.to_string()));
    tips.push(phase_tip.to_string());

    tips.push(
        match depth_zone {
            DepthZone::Shallow => "Prioritize shoreline cover, docks, laydowns, and shallow grass; keep your bait in the top 0–8 feet.",
            DepthZone::MidDepth => "Spend time on mid-depth structure like secondary points, channel bends, and inside turns in 8–15 feet.",
            DepthZone::Offshore => "Focus on offshore structure and subtle contour changes; let electronics guide you more than visible cover.",
        }
        .to_string(),
    );

    match clarity {
        ClarityBand::Clear => tips.push(
            "In clear water, stay a bit farther from the targets, use more natural colors, and rely on finesse or realistic presentations.".into(),
        ),
        ClarityBand::Dirty => tips.push(
            "In muddy water, target obvious shallow cover and high-percentage spots, using loud, bulky baits bass can feel.".into(),
        ),
        ClarityBand::Stained | ClarityBand::Unknown => {}
    }

    if bottom.rock {
        targets.push("rock transitions, chunk rock banks, and riprap".into());
        tips.push("Fish angles that let crankbaits and jigs deflect off rock to trigger reaction bites.".into());
    }
    if bottom.grass {
        targets.push("edges and holes in grass lines".into());
        tips.push("Key on irregularities in grass: points, holes, and edges where bass can ambush prey.".into());
    }
    if bottom.wood {
        targets.push("laydowns, stumps, and dock posts".into());
        tips.push("Make multiple presentations to each piece of wood; the best fish often sit on the shady side.".into());
    }

    if wind_speed >= 10.0 {
        targets.push("wind-blown banks, points, and flats".into());
        tips.push(
            "Use wind to your advantage: fish wind-blown structure where bait is being pushed toward the bank or into ambush spots.".into(),
        );
    } else if wind_speed <= 3.0 && clarity == ClarityBand::Clear {
        tips.push("On calm, clear days, downsize and slow down; fish may be spooky and less willing to chase.".into());
    }

    let situation = Situation {
        phase,
        depth_zone,
        clarity,
        wind_speed,
        bottom,
    };
    for rule in COMPOUND_RULES.iter().filter(|r| (r.applies)(&situation)) {
        inject(&mut targets, rule.targets);
        inject(&mut tips, rule.tips);
    }

    TargetsAndTips {
        recommended_targets: dedupe_case_insensitive(targets),
        strategy_tips: dedupe_case_insensitive(tips),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_spawn_muddy_grass_windy() {
        let data = build_targets_and_tips(
            Phase::PreSpawn,
            DepthZone::Shallow,
            ClarityBand::Dirty,
            12.0,
            Some("grass and rock"),
        );
        let targets = data.recommended_targets.join(" ").to_lowercase();
        let tips = data.strategy_tips.join(" ").to_lowercase();
        assert!(targets.contains("secondary points") || targets.contains("channel swings"));
        assert!(targets.contains("wind-blown"));
        assert!(tips.contains("wind-blown"));
    }

    #[test]
    fn inject_adds_only_missing_keywords() {
        let rule = &COMPOUND_RULES[0];
        let situation = Situation {
            phase: Phase::PreSpawn,
            depth_zone: DepthZone::Shallow,
            clarity: ClarityBand::Dirty,
            wind_speed: 12.0,
            bottom: Bottom::parse(Some("rock")),
        };
        assert!((rule.applies)(&situation));
        assert!(!(rule.applies)(&Situation {
            bottom: Bottom::parse(Some("sand")),
            ..situation
        }));

        let mut targets = vec!["Secondary Points off the main lake".to_string()];
        inject(&mut targets, rule.targets);
        assert_eq!(
            targets,
            vec![
                "Secondary Points off the main lake".to_string(),
                "wind-blown banks with grass or rock close to spawning pockets".to_string(),
            ]
        );

        let mut tips = Vec::new();
        inject(&mut tips, rule.tips);
        assert_eq!(tips.len(), 1);
        assert!(tips[0].contains("wind-blown"));
    }

    #[test]
    fn compound_rule_fills_missing_keywords() {
        // The base phrases already mention electronics twice; only the missing
        // keywords are injected.
        let data = build_targets_and_tips(
            Phase::Summer,
            DepthZone::Offshore,
            ClarityBand::Clear,
            1.0,
            None,
        );
        let electronics = data
            .strategy_tips
            .iter()
            .filter(|t| t.to_lowercase().contains("electronics"))
            .count();
        assert_eq!(electronics, 2);
        assert!(data
            .strategy_tips
            .iter()
            .any(|t| t.contains("dropshot on offshore schools")));
        assert!(data.strategy_tips.iter().any(|t| t.contains("early before the sun")));
    }

    #[test]
    fn lists_have_no_case_insensitive_duplicates() {
        for phase in Phase::ALL {
            for zone in [DepthZone::Shallow, DepthZone::MidDepth, DepthZone::Offshore] {
                let data = build_targets_and_tips(
                    phase,
                    zone,
                    ClarityBand::Dirty,
                    15.0,
                    Some("rock, grass, wood"),
                );
                assert_eq!(
                    dedupe_case_insensitive(data.recommended_targets.clone()),
                    data.recommended_targets
                );
                assert_eq!(
                    dedupe_case_insensitive(data.strategy_tips.clone()),
                    data.strategy_tips
                );
                assert!(!data.recommended_targets.is_empty());
            }
        }
    }

    #[test]
    fn winter_dirty_mentions_bottom_contact() {
        let data = build_targets_and_tips(Phase::Winter, DepthZone::Offshore, ClarityBand::Dirty, 5.0, None);
        assert!(data.strategy_tips.iter().any(|t| t.contains("bottom contact")));
        let clear = build_targets_and_tips(Phase::Winter, DepthZone::Offshore, ClarityBand::Clear, 5.0, None);
        assert!(!clear.strategy_tips.iter().any(|t| t.contains("bottom contact")));
    }
}

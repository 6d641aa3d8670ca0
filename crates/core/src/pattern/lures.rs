use crate::pattern::environment::{Bottom, ClarityBand, ForageKind, LakeType};
use crate::pattern::list::{dedupe_case_insensitive, reorder_by_preference, Preference};
use crate::pattern::phase::Phase;

/// Confidence baits for a seasonal phase, most important first.
pub fn recommend_lures(phase: Phase) -> Vec<String> {
    let lures: &[&str] = match phase {
        Phase::Winter => &["suspending jerkbait", "blade bait", "finesse jig"],
        Phase::PreSpawn => &["lipless crankbait", "spinnerbait", "jig"],
        Phase::SpawnPostSpawn => &[
            "texas-rigged creature bait",
            "wacky-rigged worm",
            "light finesse jig",
        ],
        Phase::Summer => &[
            "deep-diving crankbait",
            "carolina rig",
            "big worm on offshore structure",
        ],
        Phase::Fall => &["shad-style swimbait", "squarebill crankbait", "spinnerbait"],
    };
    lures.iter().map(|s| s.to_string()).collect()
}

/// Add clarity-, bottom- and wind-specific lures to a base list.
///
/// Base entries are never removed; the result is deduplicated
/// case-insensitively with first occurrences kept.
pub fn adjust_lures_for_clarity_and_bottom(
    base_lures: &[String],
    clarity: ClarityBand,
    bottom_composition: Option<&str>,
    wind_speed: f64,
) -> Vec<String> {
    let bottom = Bottom::parse(bottom_composition);
    let mut lures: Vec<String> = base_lures.to_vec();
    let mut add = |items: &[&str]| lures.extend(items.iter().map(|s| s.to_string()));

    match clarity {
        ClarityBand::Clear => add(&["finesse worm on light line", "natural shad-style swimbait"]),
        ClarityBand::Stained => add(&["medium-diving crankbait"]),
        ClarityBand::Dirty => add(&["chatterbait", "black/blue jig"]),
        ClarityBand::Unknown => {}
    }

    if bottom.rock {
        add(&["jig dragged on rock", "squarebill deflected off rock"]);
    }
    if bottom.grass {
        add(&[
            "swim jig over grass",
            "texas-rigged creature bait for flipping grass",
        ]);
    }
    if bottom.soft {
        add(&["lipless crankbait ticking bottom"]);
    }
    if bottom.wood {
        add(&["texas-rigged worm pitched to wood", "squarebill bumped through laydowns"]);
    }

    if wind_speed >= 10.0 {
        add(&[
            "spinnerbait in wind-blown areas",
            "chatterbait along wind-blown banks",
        ]);
    } else if wind_speed <= 3.0 && clarity == ClarityBand::Clear {
        add(&["finesse jerkbait worked slowly"]);
    }

    dedupe_case_insensitive(lures)
}

fn lake_type_preferences(lake_type: LakeType) -> &'static [Preference] {
    match lake_type {
        LakeType::HighlandReservoir => &[
            Preference { keyword: "jerkbait", lure: "suspending jerkbait" },
            Preference { keyword: "drop shot", lure: "drop shot" },
            Preference { keyword: "football jig", lure: "football jig" },
        ],
        LakeType::LowlandReservoir => &[
            Preference { keyword: "crankbait", lure: "squarebill crankbait" },
            Preference { keyword: "spinnerbait", lure: "spinnerbait" },
        ],
        LakeType::NaturalLake => &[
            Preference { keyword: "swim jig", lure: "swim jig over grass" },
            Preference { keyword: "lipless", lure: "lipless crankbait" },
            Preference { keyword: "texas", lure: "texas-rigged creature bait" },
        ],
        LakeType::River => &[
            Preference { keyword: "squarebill", lure: "squarebill crankbait" },
            Preference { keyword: "spinnerbait", lure: "spinnerbait" },
            Preference { keyword: "ned", lure: "ned rig" },
        ],
        LakeType::Pond => &[
            Preference { keyword: "worm", lure: "wacky-rigged worm" },
            Preference { keyword: "fluke", lure: "weightless fluke" },
        ],
    }
}

/// Move lures suited to the lake type to the front. Nothing is removed.
pub fn apply_lake_type_lure_bias(lures: &[String], lake_type: Option<LakeType>) -> Vec<String> {
    match lake_type {
        Some(lake_type) => reorder_by_preference(lures, lake_type_preferences(lake_type)),
        None => lures.to_vec(),
    }
}

fn forage_preferences(forage: ForageKind) -> &'static [Preference] {
    match forage {
        ForageKind::Shad => &[
            Preference { keyword: "swimbait", lure: "shad-style swimbait" },
            Preference { keyword: "lipless", lure: "lipless crankbait" },
        ],
        ForageKind::Herring => &[
            Preference { keyword: "fluke", lure: "fluke-style jerkbait" },
            Preference { keyword: "swimbait", lure: "herring-profile swimbait" },
        ],
        ForageKind::Bluegill => &[
            Preference { keyword: "bluegill", lure: "bluegill-pattern swimbait" },
            Preference { keyword: "creature", lure: "texas-rigged creature bait" },
        ],
        ForageKind::Crawfish => &[
            Preference { keyword: "jig", lure: "football jig" },
            Preference { keyword: "craw", lure: "texas-rigged craw" },
        ],
        ForageKind::Perch => &[
            Preference { keyword: "crankbait", lure: "perch-pattern crankbait" },
            Preference { keyword: "drop shot", lure: "drop shot" },
        ],
        ForageKind::Shiner => &[
            Preference { keyword: "jerkbait", lure: "suspending jerkbait" },
            Preference { keyword: "fluke", lure: "weightless fluke" },
        ],
    }
}

/// Move lures matching the forage to the front; earlier forage entries win.
pub fn apply_forage_bias_to_lures(lures: &[String], forage: &[ForageKind]) -> Vec<String> {
    let preferences: Vec<Preference> = forage
        .iter()
        .flat_map(|kind| forage_preferences(*kind).iter().copied())
        .collect();
    if preferences.is_empty() {
        return lures.to_vec();
    }
    reorder_by_preference(lures, &preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::environment::classify_clarity_band;
    use crate::pattern::list::any_contains;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lures_vary_by_phase() {
        let winter = recommend_lures(Phase::Winter);
        let summer = recommend_lures(Phase::Summer);
        assert!(winter.contains(&"suspending jerkbait".to_string()));
        assert!(summer.contains(&"deep-diving crankbait".to_string()));
        assert_ne!(winter, summer);
        for phase in Phase::ALL {
            let lures = recommend_lures(phase);
            assert_eq!(dedupe_case_insensitive(lures.clone()), lures);
        }
    }

    #[test]
    fn muddy_rock_grass_windy() {
        let base = strings(&["spinnerbait"]);
        let lures = adjust_lures_for_clarity_and_bottom(
            &base,
            classify_clarity_band(Some("muddy")),
            Some("rock and grass"),
            15.0,
        );
        let joined = lures.join(" ").to_lowercase();
        assert!(joined.contains("chatterbait"));
        assert!(joined.contains("jig"));
        assert!(joined.contains("grass") || joined.contains("rock"));
        assert_eq!(lures[0], "spinnerbait");
    }

    #[test]
    fn adjustment_is_superset_and_idempotent() {
        let cases = [
            (ClarityBand::Clear, Some("sand"), 1.0),
            (ClarityBand::Stained, Some("wood and rock"), 9.0),
            (ClarityBand::Dirty, None, 22.0),
            (ClarityBand::Unknown, Some("vegetation"), 10.0),
        ];
        for phase in Phase::ALL {
            for (clarity, bottom, wind) in cases {
                let base = recommend_lures(phase);
                let once = adjust_lures_for_clarity_and_bottom(&base, clarity, bottom, wind);
                for lure in &base {
                    assert!(once.iter().any(|l| l.eq_ignore_ascii_case(lure)));
                }
                let twice = adjust_lures_for_clarity_and_bottom(&once, clarity, bottom, wind);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn calm_clear_adds_finesse() {
        let lures = adjust_lures_for_clarity_and_bottom(&[], ClarityBand::Clear, None, 2.0);
        assert!(any_contains(&lures, "finesse jerkbait"));
        let stained = adjust_lures_for_clarity_and_bottom(&[], ClarityBand::Stained, None, 2.0);
        assert!(!any_contains(&stained, "finesse jerkbait"));
    }

    #[test]
    fn lake_bias_reorders_without_loss() {
        let base = recommend_lures(Phase::Winter);
        let biased = apply_lake_type_lure_bias(&base, Some(LakeType::HighlandReservoir));
        assert_eq!(biased[0], "suspending jerkbait");
        assert_eq!(biased[1], "drop shot");
        assert_eq!(biased[2], "football jig");
        for lure in &base {
            assert!(biased.contains(lure));
        }
        assert_eq!(apply_lake_type_lure_bias(&base, None), base);
    }

    #[test]
    fn forage_bias_puts_matching_lures_first() {
        let base = strings(&["spinnerbait", "squarebill crankbait", "shad-style swimbait"]);
        let biased = apply_forage_bias_to_lures(&base, &[ForageKind::Shad]);
        assert_eq!(biased[0], "shad-style swimbait");
        assert_eq!(biased[1], "lipless crankbait");
        assert_eq!(biased.len(), 4);
        assert_eq!(apply_forage_bias_to_lures(&base, &[]), base);
    }
}

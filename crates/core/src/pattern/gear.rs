use crate::pattern::environment::{Bottom, ClarityBand, SkyBand};
use crate::pattern::phase::Phase;
use crate::pattern::zone::DepthBand;
use serde::{Deserialize, Serialize};

/// Gear recommendation for a single lure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LureSetup {
    pub lure: String,
    pub technique: String,
    pub rod: String,
    pub reel: String,
    pub line: String,
    pub hook_or_leader: String,
    pub lure_size: String,
}

#[derive(Debug, Clone, Copy)]
struct GearTemplate {
    technique: &'static str,
    rod: &'static str,
    gear_ratio: &'static str,
    line: &'static str,
    hook_or_leader: &'static str,
    lure_size: &'static str,
    bottom_contact: bool,
}

struct GearRule {
    keywords: &'static [&'static str],
    template: GearTemplate,
}

impl GearRule {
    fn matches(&self, lure_lower: &str) -> bool {
        self.keywords.iter().any(|k| lure_lower.contains(k))
    }
}

// Specific families sit above the generic ones they contain ("football jig"
// before "jig", "deep-diving" before "crankbait", "jerkbait" before "finesse").
const GEAR_RULES: &[GearRule] = &[
    GearRule {
        keywords: &["football jig"],
        template: GearTemplate {
            technique: "football jig dragged across rock and hard bottom",
            rod: "7'3\" heavy casting rod, fast action",
            gear_ratio: "7.1:1",
            line: "15–17 lb fluorocarbon",
            hook_or_leader: "built-in 4/0–5/0 jig hook",
            lure_size: "3/4–1 oz football head with craw trailer",
            bottom_contact: true,
        },
    },
    GearRule {
        keywords: &["swim jig"],
        template: GearTemplate {
            technique: "swim jig reeled steadily over and along grass",
            rod: "7'2\" medium-heavy casting rod, fast action",
            gear_ratio: "7.5:1",
            line: "40–50 lb braid (or 17–20 lb fluorocarbon in sparse cover)",
            hook_or_leader: "built-in 4/0 swim jig hook",
            lure_size: "1/4–3/8 oz with a paddle-tail trailer",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["jerkbait"],
        template: GearTemplate {
            technique: "suspending jerkbait with long pauses over points and channel swings",
            rod: "6'10\" medium casting rod, moderate-fast action",
            gear_ratio: "6.3:1",
            line: "10–12 lb fluorocarbon",
            hook_or_leader: "stock trebles; upgrade one size for stronger hooks",
            lure_size: "3.5–4.5 inch, shad or shiner pattern",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["dropshot", "drop shot", "finesse", "ned rig"],
        template: GearTemplate {
            technique: "finesse / dropshot",
            rod: "7'0\" medium-light spinning rod, fast action",
            gear_ratio: "6.2:1",
            line: "10 lb braid main line to 6–8 lb fluorocarbon leader",
            hook_or_leader: "size 1 or 1/0 dropshot hook; 12–18\" leader below weight",
            lure_size: "3–4 inch finesse worm or minnow profile",
            bottom_contact: true,
        },
    },
    GearRule {
        keywords: &["blade bait"],
        template: GearTemplate {
            technique: "blade bait hopped vertically off the bottom",
            rod: "7'0\" medium-heavy casting rod, fast action",
            gear_ratio: "7.1:1",
            line: "12 lb fluorocarbon",
            hook_or_leader: "stock trebles; snap on the front hole",
            lure_size: "1/2–3/4 oz",
            bottom_contact: true,
        },
    },
    GearRule {
        keywords: &["lipless"],
        template: GearTemplate {
            technique: "lipless crankbait yo-yoed or burned over flats and grass tops",
            rod: "7'0\" medium-heavy casting rod, moderate action",
            gear_ratio: "7.1:1",
            line: "14–17 lb fluorocarbon",
            hook_or_leader: "stock trebles",
            lure_size: "1/2–3/4 oz",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["deep-diving", "deep diving", "deep crank"],
        template: GearTemplate {
            technique: "deep cranking to grind offshore structure",
            rod: "7'6\" medium casting rod, moderate action",
            gear_ratio: "5.2:1",
            line: "10–12 lb fluorocarbon",
            hook_or_leader: "stock trebles",
            lure_size: "3/4–1 oz, 15–20+ ft diver",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["squarebill"],
        template: GearTemplate {
            technique: "squarebill deflected off shallow cover",
            rod: "7'0\" medium casting rod, moderate action",
            gear_ratio: "6.3:1",
            line: "14–17 lb fluorocarbon",
            hook_or_leader: "stock trebles",
            lure_size: "1.5–2.5 size squarebill, 1/2 oz class",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["crankbait"],
        template: GearTemplate {
            technique: "crankbait worked through the target depth",
            rod: "7'0\"–7'3\" medium casting rod, moderate action",
            gear_ratio: "6.3:1",
            line: "12–15 lb fluorocarbon",
            hook_or_leader: "stock trebles",
            lure_size: "2–3 inch body, 1/2–5/8 oz",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["spinnerbait"],
        template: GearTemplate {
            technique: "slow-roll or burn spinnerbait around cover and wind-blown banks",
            rod: "7'0\"–7'2\" medium-heavy casting rod, moderate-fast action",
            gear_ratio: "6.3:1–7.1:1",
            line: "14–17 lb fluorocarbon or mono",
            hook_or_leader: "built-in hook; add a trailer hook in open water",
            lure_size: "3/8–1/2 oz",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["chatterbait", "bladed jig"],
        template: GearTemplate {
            technique: "bladed jig ripped through grass and along banks",
            rod: "7'1\" medium-heavy casting rod, moderate-fast action",
            gear_ratio: "6.8:1",
            line: "17–20 lb fluorocarbon (or 40 lb braid in grass)",
            hook_or_leader: "built-in 5/0 hook with swimbait trailer",
            lure_size: "3/8–1/2 oz",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["swimbait"],
        template: GearTemplate {
            technique: "swimbait slow-rolled at the depth of the bait",
            rod: "7'3\" medium-heavy casting rod, moderate-fast action",
            gear_ratio: "7.1:1",
            line: "15–17 lb fluorocarbon",
            hook_or_leader: "3/8–1/2 oz swimbait jighead or 5/0 weighted swimbait hook",
            lure_size: "3.5–5 inch paddle tail",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["fluke", "weightless"],
        template: GearTemplate {
            technique: "weightless fluke twitched near the surface",
            rod: "7'0\" medium-heavy casting rod, fast action",
            gear_ratio: "7.1:1",
            line: "20 lb braid to 15 lb fluorocarbon leader",
            hook_or_leader: "4/0–5/0 offset EWG hook",
            lure_size: "5 inch soft jerkbait",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["wacky"],
        template: GearTemplate {
            technique: "wacky rig falling slowly around shallow cover",
            rod: "7'0\" medium spinning rod, fast action",
            gear_ratio: "6.2:1",
            line: "10 lb braid to 8–10 lb fluorocarbon leader",
            hook_or_leader: "size 1 wacky hook with o-ring",
            lure_size: "5 inch stick worm",
            bottom_contact: false,
        },
    },
    GearRule {
        keywords: &["carolina"],
        template: GearTemplate {
            technique: "carolina rig dragged across flats and offshore structure",
            rod: "7'4\" heavy casting rod, moderate-fast action",
            gear_ratio: "6.3:1",
            line: "17–20 lb main line to 12–15 lb fluorocarbon leader",
            hook_or_leader: "2/0–3/0 offset hook; 18–36\" leader behind 3/4 oz weight",
            lure_size: "4–6 inch lizard, craw, or finesse worm",
            bottom_contact: true,
        },
    },
    GearRule {
        keywords: &["texas", "creature", "craw", "big worm", "worm"],
        template: GearTemplate {
            technique: "bottom-contact (Texas rig / worm / creature bait)",
            rod: "7'1\"–7'3\" medium-heavy casting rod, fast action",
            gear_ratio: "7.1:1",
            line: "14–20 lb fluorocarbon (or 40–50 lb braid in heavy cover)",
            hook_or_leader: "3/0–4/0 EWG or straight-shank hook",
            lure_size: "3.5–5 inch creature bait or worm; 3/16–1/2 oz weight",
            bottom_contact: true,
        },
    },
    GearRule {
        keywords: &["jig"],
        template: GearTemplate {
            technique: "jig pitched and dragged around cover",
            rod: "7'2\" heavy casting rod, fast action",
            gear_ratio: "7.1:1",
            line: "15–20 lb fluorocarbon",
            hook_or_leader: "built-in 4/0 flipping jig hook",
            lure_size: "3/8–1/2 oz with craw trailer",
            bottom_contact: true,
        },
    },
];

const FALLBACK_TEMPLATE: GearTemplate = GearTemplate {
    technique: "confidence presentation around high-percentage cover",
    rod: "7'0\" medium-heavy casting rod, fast action",
    gear_ratio: "7.1:1",
    line: "12–17 lb fluorocarbon",
    hook_or_leader: "appropriate for lure category",
    lure_size: "standard size for that bait category",
    bottom_contact: false,
};

fn template_for(lure: &str) -> &'static GearTemplate {
    let lower = lure.to_lowercase();
    GEAR_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| &rule.template)
        .unwrap_or(&FALLBACK_TEMPLATE)
}

fn reel_for(rod: &str, gear_ratio: &str) -> String {
    if rod.to_lowercase().contains("spinning") {
        format!("2500-size spinning reel, {gear_ratio} gear ratio")
    } else {
        format!("{gear_ratio} baitcasting reel")
    }
}

/// Build one gear setup per lure, aligned with the input order.
pub fn build_pro_setups(
    lures: &[String],
    phase: Phase,
    depth_band: DepthBand,
    clarity: ClarityBand,
    wind_speed: f64,
    bottom_composition: Option<&str>,
    sky: SkyBand,
) -> Vec<LureSetup> {
    let bottom = Bottom::parse(bottom_composition);

    lures
        .iter()
        .map(|lure| {
            let template = template_for(lure);
            let mut technique = template.technique.to_string();
            let mut line = template.line.to_string();
            let mut hook_or_leader = template.hook_or_leader.to_string();
            let mut lure_size = template.lure_size.to_string();

            if clarity == ClarityBand::Clear {
                line.push_str("; step down one line size in clear water");
            }
            if bottom.grass && template.bottom_contact {
                line = "50–65 lb braid for pulling fish out of grass".to_string();
            }
            if depth_band.is_deep_water() && template.bottom_contact {
                lure_size.push_str("; go up one weight size to hold bottom in deep water");
            }
            if wind_speed >= 15.0 {
                hook_or_leader.push_str("; heavier head or weight to keep contact in strong wind");
            }
            if sky == SkyBand::LowLight || (phase == Phase::Winter && !sky.is_sunny()) {
                technique.push_str("; favor a bulkier profile in low light");
            }

            LureSetup {
                lure: lure.clone(),
                technique,
                rod: template.rod.to_string(),
                reel: reel_for(template.rod, template.gear_ratio),
                line,
                hook_or_leader,
                lure_size,
            }
        })
        .collect()
}

use crate::pattern::environment::{ClarityBand, ForageKind, SkyBand};
use crate::pattern::list::dedupe_case_insensitive;

/// General color guidance for a clarity and sky combination.
pub fn recommend_color_palettes(clarity: ClarityBand, sky: SkyBand) -> Vec<String> {
    let sunny = sky.is_sunny();
    let lines: [&str; 2] = match clarity {
        ClarityBand::Clear => [
            if sunny {
                "In clear & sunny conditions, favor natural translucent shad colors, finesse green pumpkin, and subtle metallic finishes."
            } else {
                "In clear & cloudy conditions, still lean natural (shad, green pumpkin) but add a bit more contrast with slightly darker backs."
            },
            "Use lighter line and less flashy hardware in ultra-clear water to avoid spooking fish.",
        ],
        ClarityBand::Stained => [
            if sunny {
                "In stained & sunny water, balance realism and visibility: green pumpkin with chartreuse, white/chartreuse, and craw patterns with some orange."
            } else {
                "In stained & cloudy water, lean into contrast: white/chartreuse, firetiger, and darker-back crankbaits or jigs that stand out."
            },
            "Stained water usually rewards some flash or vibration, so pair these colors with baits that move water.",
        ],
        ClarityBand::Dirty => [
            if sunny {
                "In muddy & sunny conditions, high contrast is key: black/blue, black/red, and solid chartreuse help bass locate the bait."
            } else {
                "In muddy & cloudy conditions, go all-in on silhouette: solid black, black/blue, and bold chartreuse/black back patterns."
            },
            "Focus on profile and vibration first, then choose colors that maximize contrast against the water.",
        ],
        ClarityBand::Unknown => [
            "Without a clarity read, start with versatile colors: green pumpkin for bottom baits and a white or shad pattern for moving baits.",
            "Check how far you can see a lure below the surface, then shift natural in clear water or bolder in dirty water.",
        ],
    };
    dedupe_case_insensitive(lines)
}

/// Append forage-matching color notes. Existing lines are kept in place.
pub fn apply_forage_bias_to_colors(colors: &[String], forage: &[ForageKind]) -> Vec<String> {
    let extra = forage.iter().map(|kind| match kind {
        ForageKind::Shad => "Shad are the main forage: keep white, pearl, and translucent shad tones in the rotation.",
        ForageKind::Herring => "Herring lakes reward pearl, ghost, and blue-back translucent colors with a bit of flash.",
        ForageKind::Bluegill => "Bluegill are around: add green/orange bluegill patterns with dark vertical bars.",
        ForageKind::Crawfish => "Crawfish forage favors brown, green pumpkin, and red/orange craw accents on bottom baits.",
        ForageKind::Perch => "Perch forage calls for yellow/green perch patterns with orange bellies.",
        ForageKind::Shiner => "Shiner forage pairs with gold and silver flash finishes and olive backs.",
    });
    dedupe_case_insensitive(colors.iter().cloned().chain(extra.map(str::to_string)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_vary_by_clarity_and_sky() {
        let clear_sun = recommend_color_palettes(ClarityBand::Clear, SkyBand::Sunny)
            .join(" ")
            .to_lowercase();
        let muddy_cloud = recommend_color_palettes(ClarityBand::Dirty, SkyBand::Overcast)
            .join(" ")
            .to_lowercase();
        assert!(clear_sun.contains("translucent") || clear_sun.contains("natural"));
        assert!(muddy_cloud.contains("black/blue") || muddy_cloud.contains("silhouette"));
        assert_ne!(clear_sun, muddy_cloud);
    }

    #[test]
    fn forage_colors_are_appended() {
        let base = recommend_color_palettes(ClarityBand::Stained, SkyBand::Sunny);
        let biased = apply_forage_bias_to_colors(&base, &[ForageKind::Crawfish, ForageKind::Crawfish]);
        assert_eq!(&biased[..base.len()], &base[..]);
        assert_eq!(biased.len(), base.len() + 1);
        assert!(biased.last().unwrap().contains("craw"));
    }
}

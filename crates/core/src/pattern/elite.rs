use crate::domain::{
    ElitePatternRequest, ElitePatternResponse, ProPatternResponse, SessionConditions,
    SessionContext, Tier, VisionTierRequest,
};
use crate::fusion::{apply_vision_adjustments, fuse_weather_and_vision, VisionContext, WeatherContext};
use crate::pattern::environment::ClarityBand;
use crate::pattern::phase::Phase;
use crate::pattern::pro::{build_pro_pattern, weather_for_request};
use crate::weather::WeatherProvider;
use chrono::{DateTime, Timelike, Utc};

const TIME_OF_DAY_SYNONYMS: &[(&str, &[&str])] = &[
    ("dawn", &["dawn", "sunrise", "first_light", "daybreak"]),
    ("morning", &["morning", "am", "early_morning", "late_morning"]),
    ("midday", &["midday", "noon", "mid-day", "mid_day", "lunch"]),
    ("afternoon", &["afternoon", "pm", "late_afternoon"]),
    ("evening", &["evening", "dusk", "sunset", "twilight"]),
    ("night", &["night", "after_dark", "overnight", "midnight"]),
];

const DEFAULT_TIME_OF_DAY: &str = "afternoon";

fn time_of_day_from_hour(hour: u32) -> &'static str {
    match hour {
        5..=7 => "dawn",
        8..=10 => "morning",
        11..=13 => "midday",
        14..=17 => "afternoon",
        18..=20 => "evening",
        _ => "night",
    }
}

/// Canonical time-of-day label.
///
/// Known synonyms map to `dawn`, `morning`, `midday`, `afternoon`, `evening`
/// or `night`; anything else passes through lower-cased. Without a label the
/// hour of `timestamp` decides.
pub fn normalize_time_of_day(raw: Option<&str>, timestamp: Option<DateTime<Utc>>) -> String {
    if let Some(t) = raw.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty()) {
        let key = t.replace(' ', "_");
        return TIME_OF_DAY_SYNONYMS
            .iter()
            .find(|(_, synonyms)| synonyms.contains(&key.as_str()))
            .map(|(label, _)| label.to_string())
            .unwrap_or(t);
    }

    timestamp
        .map(|ts| time_of_day_from_hour(ts.hour()))
        .unwrap_or(DEFAULT_TIME_OF_DAY)
        .to_string()
}

fn opening_move(time_of_day: &str) -> &'static str {
    match time_of_day {
        "dawn" | "evening" => {
            "Low light favors moving baits: cover water with topwater or a spinnerbait before switching to bottom baits."
        }
        "morning" => "Use the morning window to run your highest-percentage water before boat traffic builds.",
        "midday" => "Midday sun pushes fish tight to cover or deeper; slow down and fish shade and depth changes.",
        "afternoon" => "Afternoon warming can turn fish on; revisit spots that showed life earlier with a different bait.",
        "night" => "After dark, fish slow with dark silhouettes and noisy baits around the same structure you'd fish by day.",
        _ => "Open with the bait you trust most on the water that best fits today's conditions.",
    }
}

fn phase_step(phase: Phase) -> &'static str {
    match phase {
        Phase::Winter => "Work steep structure slowly, making several casts to every spot that holds bait.",
        Phase::PreSpawn => "Work from staging points toward spawning flats as the water warms through the day.",
        Phase::SpawnPostSpawn => "Check protected pockets for beds, then slide out to the first cover where post-spawn fish recover.",
        Phase::Summer => "Rotate through offshore spots and time your visits for when current or wind gets the school active.",
        Phase::Fall => "Follow the bait: move until you find shad activity, then slow down in that creek or pocket.",
    }
}

fn clarity_step(clarity: ClarityBand) -> Option<&'static str> {
    match clarity {
        ClarityBand::Clear => Some("Make long casts and lean on natural finesse presentations in the clear water."),
        ClarityBand::Stained => Some("Mix reaction baits with bottom contact; stained water supports both."),
        ClarityBand::Dirty => Some("Stay tight to visible shallow cover and let vibration and profile call fish in."),
        ClarityBand::Unknown => None,
    }
}

fn build_gameplan(
    pro: &ProPatternResponse,
    time_of_day: &str,
    tournament_mode: bool,
) -> Vec<String> {
    let first_target = pro
        .recommended_targets
        .first()
        .map(String::as_str)
        .unwrap_or("high-percentage cover");

    let mut gameplan = vec![
        format!(
            "Start on {} targets at {time_of_day}, focusing on {first_target}.",
            pro.depth_zone
        ),
        opening_move(time_of_day).to_string(),
        phase_step(pro.phase).to_string(),
    ];
    if let Some(step) = clarity_step(pro.conditions.clarity_band) {
        gameplan.push(step.to_string());
    }

    let deep_water = pro.depth_zone.band().map_or(false, |b| b.is_deep_water());
    gameplan.push(if deep_water {
        "Idle key offshore spots with your electronics and only fish where you mark bait or fish.".to_string()
    } else {
        "Fish shallow targets methodically and keep moving until one cover type produces.".to_string()
    });

    gameplan.push(if tournament_mode {
        "Tournament mode: fill a limit early with your highest-percentage bait, then rotate to big-fish water.".to_string()
    } else {
        "Rotate through your top confidence baits and cover water methodically.".to_string()
    });
    gameplan
}

fn build_adjustments(pressure_trend: Option<&str>, water_level_trend: Option<&str>) -> Vec<String> {
    let mut adjustments = Vec::new();

    let pressure = pressure_trend.map(str::to_lowercase).unwrap_or_default();
    if pressure.contains("fall") || pressure.contains("drop") {
        adjustments.push(
            "Falling pressure often triggers a feed; lean on moving baits and cover water while it lasts.".to_string(),
        );
    } else if pressure.contains("ris") {
        adjustments.push(
            "Rising pressure pulls fish tight to cover; downsize, slow down, and make precise casts.".to_string(),
        );
    } else if pressure.contains("stab") || pressure.contains("steady") {
        adjustments.push(
            "Stable pressure: stay with what works and repeat productive patterns on similar spots.".to_string(),
        );
    }

    let water = water_level_trend.map(str::to_lowercase).unwrap_or_default();
    if water.contains("ris") {
        adjustments.push(
            "Rising water pulls fish shallow into fresh cover; push into newly flooded bushes and grass.".to_string(),
        );
    } else if water.contains("fall") || water.contains("drop") {
        adjustments.push(
            "Falling water pulls fish off the bank; key on the first drop and points near deeper water.".to_string(),
        );
    }

    if adjustments.is_empty() {
        adjustments.push(
            "If fish slow down, switch to more subtle presentations and slow your retrieve.".to_string(),
        );
        adjustments.push(
            "If wind or falling pressure picks up, lean into moving baits and cover more water.".to_string(),
        );
    }
    adjustments
}

/// Elite pattern from a request and an already-resolved weather context.
pub fn build_elite_pattern(req: &ElitePatternRequest, weather: &WeatherContext) -> ElitePatternResponse {
    let mut pro = build_pro_pattern(&req.pro, weather);
    let time_of_day = normalize_time_of_day(req.time_of_day.as_deref(), Some(weather.timestamp));

    let gameplan = build_gameplan(&pro, &time_of_day, req.tournament_mode);
    let adjustments = build_adjustments(req.pressure_trend.as_deref(), req.water_level_trend.as_deref());

    pro.conditions.tier = Tier::Elite;
    pro.conditions.session = Some(SessionConditions {
        session_context: SessionContext {
            time_of_day: req.time_of_day.clone(),
            pressure_trend: req.pressure_trend.clone(),
            water_level_trend: req.water_level_trend.clone(),
            tournament_mode: req.tournament_mode,
        },
        time_of_day_normalized: time_of_day,
    });

    ElitePatternResponse {
        pattern: pro,
        gameplan,
        adjustments,
    }
}

/// Elite pattern with an optional sonar overlay. Without vision the result
/// is exactly the Elite pattern.
pub fn build_vision_tier_pattern(
    req: &ElitePatternRequest,
    vision: Option<&VisionContext>,
    weather: &WeatherContext,
) -> ElitePatternResponse {
    let elite = build_elite_pattern(req, weather);
    let fused = vision.map(|v| fuse_weather_and_vision(weather, v));
    apply_vision_adjustments(elite, fused.as_ref())
}

pub async fn generate_elite_pattern(
    provider: &dyn WeatherProvider,
    req: &ElitePatternRequest,
) -> ElitePatternResponse {
    let weather = weather_for_request(provider, &req.pro).await;
    build_elite_pattern(req, &weather)
}

pub async fn generate_vision_tier_pattern(
    provider: &dyn WeatherProvider,
    req: &VisionTierRequest,
) -> ElitePatternResponse {
    let weather = weather_for_request(provider, &req.pattern.pro).await;
    let vision = req.vision.clone().map(|raw| raw.into_context());
    build_vision_tier_pattern(&req.pattern, vision.as_ref(), &weather)
}

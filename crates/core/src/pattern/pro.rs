use crate::domain::{PatternConditions, ProPatternRequest, ProPatternResponse, Tier, WeatherSource};
use crate::fusion::WeatherContext;
use crate::pattern::basic::{clarity_text, month_name};
use crate::pattern::colors::{apply_forage_bias_to_colors, recommend_color_palettes};
use crate::pattern::environment::{
    classify_clarity_band, infer_activity_level, normalize_sky_condition, ClarityBand, ForageKind,
    LakeType, SkyBand,
};
use crate::pattern::gear::build_pro_setups;
use crate::pattern::list::dedupe_case_insensitive;
use crate::pattern::lures::{
    adjust_lures_for_clarity_and_bottom, apply_forage_bias_to_lures, apply_lake_type_lure_bias,
    recommend_lures,
};
use crate::pattern::phase::{classify_phase, Phase};
use crate::pattern::targets::build_targets_and_tips;
use crate::pattern::zone::{infer_depth_band, DepthBand};
use crate::weather::{resolve_weather, WeatherProvider};
use chrono::Datelike;

/// Request fields merged with the resolved weather.
struct Inputs {
    temp_f: f64,
    month: u32,
    wind_speed: f64,
    clarity: ClarityBand,
    sky: SkyBand,
    source: WeatherSource,
}

impl Inputs {
    fn resolve(req: &ProPatternRequest, weather: &WeatherContext) -> Self {
        let sky = match req.sky_condition.as_deref() {
            Some(raw) => normalize_sky_condition(Some(raw)),
            None => weather.sky_condition,
        };
        Self {
            temp_f: req.temp_f.unwrap_or(weather.temp_f),
            month: req.month.unwrap_or_else(|| weather.timestamp.month()),
            wind_speed: req.wind_speed.unwrap_or(weather.wind_speed),
            clarity: classify_clarity_band(req.clarity.as_deref()),
            sky,
            source: WeatherSource::from_explicit(
                req.temp_f.is_some(),
                req.wind_speed.is_some(),
                req.sky_condition.is_some(),
            ),
        }
    }
}

fn depth_band_tip(band: DepthBand) -> &'static str {
    match band {
        DepthBand::UltraShallow => {
            "In ultra-shallow water, keep noise down and make long casts; fish up here spook easily."
        }
        DepthBand::MidShallow => {
            "Work the first break off the bank in 4–8 feet, where fish stage between cover and deeper water."
        }
        DepthBand::MidDepth => {
            "Mid-depth fish key on the nearest hard change; slow down once you find rock, shell, or a channel edge."
        }
        DepthBand::Deep => {
            "In 15–25 feet, watch your electronics for bait balls and fish hugging the bottom before committing."
        }
        DepthBand::Offshore => {
            "Offshore fish roam; idle likely structure and mark schools before making a cast."
        }
    }
}

fn sky_text(raw: Option<&str>, sky: SkyBand) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| sky.as_str().replace('_', " "))
}

/// Pro pattern from a request and an already-resolved weather context.
pub fn build_pro_pattern(req: &ProPatternRequest, weather: &WeatherContext) -> ProPatternResponse {
    let inputs = Inputs::resolve(req, weather);
    let bottom = req.bottom_composition.as_deref();
    let forage = ForageKind::parse_all(&req.forage);
    let lake_type = req.lake_type.as_deref().and_then(LakeType::parse);

    let phase: Phase = classify_phase(inputs.temp_f, inputs.month);
    let depth_band = infer_depth_band(phase, req.depth_ft);

    let lures = adjust_lures_for_clarity_and_bottom(
        &recommend_lures(phase),
        inputs.clarity,
        bottom,
        inputs.wind_speed,
    );
    let lures = apply_lake_type_lure_bias(&lures, lake_type);
    let lures = apply_forage_bias_to_lures(&lures, &forage);

    let colors = apply_forage_bias_to_colors(
        &recommend_color_palettes(inputs.clarity, inputs.sky),
        &forage,
    );

    let lure_setups = build_pro_setups(
        &lures,
        phase,
        depth_band,
        inputs.clarity,
        inputs.wind_speed,
        bottom,
        inputs.sky,
    );

    let mut targets_and_tips = build_targets_and_tips(
        phase,
        depth_band.coarse(),
        inputs.clarity,
        inputs.wind_speed,
        bottom,
    );
    targets_and_tips.strategy_tips.push(depth_band_tip(depth_band).to_string());
    let strategy_tips = dedupe_case_insensitive(targets_and_tips.strategy_tips);

    let sky_reading = (inputs.sky != SkyBand::Unknown).then_some(inputs.sky);
    let conditions = PatternConditions {
        tier: Tier::Pro,
        temp_f: inputs.temp_f,
        month: inputs.month,
        clarity: req.clarity.clone(),
        clarity_band: inputs.clarity,
        wind_speed: inputs.wind_speed,
        sky_condition: req.sky_condition.clone(),
        sky_band: inputs.sky,
        depth_ft: req.depth_ft,
        bottom_composition: req.bottom_composition.clone(),
        forage: req.forage.clone(),
        lake_type: req.lake_type.clone(),
        activity_estimate: infer_activity_level(inputs.wind_speed, inputs.clarity, sky_reading),
        weather_source: inputs.source,
        weather_timestamp: weather.timestamp,
        session: None,
        vision: None,
    };

    let notes = format!(
        "In {} with water around {:.0}°F, {} water, about {:.0} mph wind, and {} skies, \
         SAGE identifies this as a '{phase}' pattern with a '{depth_band}' focus. \
         The recommended lures, target areas, color guidelines, and gear setups are all \
         tuned to this seasonal window and water color.",
        month_name(inputs.month),
        inputs.temp_f,
        clarity_text(req.clarity.as_deref()),
        inputs.wind_speed,
        sky_text(req.sky_condition.as_deref(), inputs.sky),
    );

    tracing::debug!(
        phase = %phase,
        depth_band = %depth_band,
        lures = lures.len(),
        weather_source = ?inputs.source,
        "pro pattern built"
    );

    ProPatternResponse {
        phase,
        depth_zone: depth_band.into(),
        recommended_lures: lures,
        recommended_targets: targets_and_tips.recommended_targets,
        strategy_tips,
        color_recommendations: colors,
        lure_setups,
        conditions,
        notes,
    }
}

/// Weather for a Pro-family request. The provider is skipped when the caller
/// already supplied temperature, wind and sky.
pub async fn weather_for_request(
    provider: &dyn WeatherProvider,
    req: &ProPatternRequest,
) -> WeatherContext {
    if req.has_explicit_weather() {
        return WeatherContext::stub();
    }
    resolve_weather(provider, &req.weather_query()).await
}

pub async fn generate_pro_pattern(
    provider: &dyn WeatherProvider,
    req: &ProPatternRequest,
) -> ProPatternResponse {
    let weather = weather_for_request(provider, req).await;
    build_pro_pattern(req, &weather)
}

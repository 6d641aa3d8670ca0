use anyhow::Context;
use chrono::{DateTime, Datelike, Utc};
use clap::{Parser, ValueEnum};

use sage_core::domain::{
    BasicPatternRequest, ElitePatternRequest, ProPatternRequest, VisionTierRequest,
};
use sage_core::vision::RawVisionSignals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tier {
    Basic,
    Pro,
    Elite,
    Vision,
}

#[derive(Debug, Parser)]
#[command(name = "sage_cli", about = "Evaluate one fishing pattern and print it as JSON")]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Tier::Pro)]
    pub tier: Tier,

    /// Lake or town name used for the weather lookup.
    #[arg(long)]
    pub location_name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// Water temperature in °F. Required for the basic tier.
    #[arg(long)]
    pub temp_f: Option<f64>,

    /// Month 1-12. Basic defaults to the current month.
    #[arg(long)]
    pub month: Option<u32>,

    #[arg(long)]
    pub clarity: Option<String>,

    #[arg(long)]
    pub wind_speed: Option<f64>,

    #[arg(long)]
    pub sky_condition: Option<String>,

    #[arg(long)]
    pub depth_ft: Option<f64>,

    #[arg(long)]
    pub bottom_composition: Option<String>,

    /// Repeatable, e.g. `--forage shad --forage crawfish`.
    #[arg(long)]
    pub forage: Vec<String>,

    #[arg(long)]
    pub lake_type: Option<String>,

    #[arg(long)]
    pub time_of_day: Option<String>,

    #[arg(long)]
    pub pressure_trend: Option<String>,

    #[arg(long)]
    pub water_level_trend: Option<String>,

    #[arg(long)]
    pub tournament_mode: bool,

    /// Sonar signals as a JSON object (vision tier).
    #[arg(long)]
    pub vision_json: Option<String>,
}

impl Args {
    pub fn basic_request(&self, now: DateTime<Utc>) -> anyhow::Result<BasicPatternRequest> {
        Ok(BasicPatternRequest {
            temp_f: self.temp_f.context("--temp-f is required for the basic tier")?,
            month: self.month.unwrap_or_else(|| now.month()),
            clarity: self.clarity.clone().unwrap_or_else(|| "stained".to_string()),
            wind_speed: self.wind_speed.unwrap_or(0.0),
        })
    }

    pub fn pro_request(&self) -> ProPatternRequest {
        ProPatternRequest {
            location_name: self.location_name.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            temp_f: self.temp_f,
            month: self.month,
            clarity: self.clarity.clone(),
            wind_speed: self.wind_speed,
            sky_condition: self.sky_condition.clone(),
            depth_ft: self.depth_ft,
            bottom_composition: self.bottom_composition.clone(),
            forage: self.forage.clone(),
            lake_type: self.lake_type.clone(),
        }
    }

    pub fn elite_request(&self) -> ElitePatternRequest {
        ElitePatternRequest {
            pro: self.pro_request(),
            time_of_day: self.time_of_day.clone(),
            pressure_trend: self.pressure_trend.clone(),
            water_level_trend: self.water_level_trend.clone(),
            tournament_mode: self.tournament_mode,
        }
    }

    pub fn vision_tier_request(&self) -> anyhow::Result<VisionTierRequest> {
        let vision = self
            .vision_json
            .as_deref()
            .map(|raw| {
                serde_json::from_str::<RawVisionSignals>(raw)
                    .with_context(|| format!("--vision-json is not a sonar object: {raw}"))
            })
            .transpose()?;

        Ok(VisionTierRequest {
            pattern: self.elite_request(),
            vision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn basic_needs_temperature() {
        let args = Args::try_parse_from(["sage_cli", "--tier", "basic"]).unwrap();
        assert!(args.basic_request(Utc::now()).is_err());
    }

    #[test]
    fn basic_month_defaults_to_now() {
        let args =
            Args::try_parse_from(["sage_cli", "--tier", "basic", "--temp-f", "48"]).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 11, 3, 9, 0, 0).unwrap();
        let req = args.basic_request(now).unwrap();
        assert_eq!(req.month, 11);
        assert_eq!(req.temp_f, 48.0);
    }

    #[test]
    fn elite_flags_map_onto_request() {
        let args = Args::try_parse_from([
            "sage_cli",
            "--tier",
            "elite",
            "--location-name",
            "Lake Fork",
            "--longitude",
            "-95.5",
            "--forage",
            "shad",
            "--forage",
            "bluegill",
            "--time-of-day",
            "dawn",
            "--tournament-mode",
        ])
        .unwrap();
        assert_eq!(args.tier, Tier::Elite);
        let req = args.elite_request();
        assert_eq!(req.pro.location_name.as_deref(), Some("Lake Fork"));
        assert_eq!(req.pro.longitude, Some(-95.5));
        assert_eq!(req.pro.forage, vec!["shad", "bluegill"]);
        assert!(req.tournament_mode);
    }

    #[test]
    fn vision_json_is_parsed() {
        let args = Args::try_parse_from([
            "sage_cli",
            "--tier",
            "vision",
            "--vision-json",
            r#"{"depth_ft": 18.0, "arch_count": 9}"#,
        ])
        .unwrap();
        let req = args.vision_tier_request().unwrap();
        let vision = req.vision.unwrap();
        assert_eq!(vision.depth_ft, Some(18.0));
        assert_eq!(vision.arch_count, Some(9));

        for raw in ["deep water", "7"] {
            let bad = Args::try_parse_from(["sage_cli", "--vision-json", raw]).unwrap();
            assert!(bad.vision_tier_request().is_err(), "{raw}");
        }
    }
}

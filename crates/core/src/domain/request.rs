use crate::vision::RawVisionSignals;
use crate::weather::WeatherQuery;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicPatternRequest {
    pub temp_f: f64,
    pub month: u32,
    pub clarity: String,
    pub wind_speed: f64,
}

impl BasicPatternRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_month(Some(self.month))?;
        ensure_finite("temp_f", Some(self.temp_f))?;
        ensure_non_negative("wind_speed", Some(self.wind_speed))?;
        Ok(())
    }
}

/// Pro inputs. Anything left out is filled from the resolved weather or
/// inferred by the rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProPatternRequest {
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub temp_f: Option<f64>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub clarity: Option<String>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub sky_condition: Option<String>,
    #[serde(default)]
    pub depth_ft: Option<f64>,
    #[serde(default)]
    pub bottom_composition: Option<String>,
    #[serde(default)]
    pub forage: Vec<String>,
    #[serde(default)]
    pub lake_type: Option<String>,
}

impl ProPatternRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_month(self.month)?;
        ensure_finite("temp_f", self.temp_f)?;
        ensure_non_negative("wind_speed", self.wind_speed)?;
        ensure_non_negative("depth_ft", self.depth_ft)?;

        if let Some(lat) = self.latitude {
            ensure!(
                (-90.0..=90.0).contains(&lat),
                "latitude must be between -90 and 90 (got {lat})"
            );
        }
        if let Some(lon) = self.longitude {
            ensure!(
                (-180.0..=180.0).contains(&lon),
                "longitude must be between -180 and 180 (got {lon})"
            );
        }
        Ok(())
    }

    /// True when temperature, wind and sky are all supplied, so a provider
    /// lookup could not change the result.
    pub fn has_explicit_weather(&self) -> bool {
        self.temp_f.is_some() && self.wind_speed.is_some() && self.sky_condition.is_some()
    }

    pub fn weather_query(&self) -> WeatherQuery {
        WeatherQuery {
            location_name: self.location_name.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElitePatternRequest {
    #[serde(flatten)]
    pub pro: ProPatternRequest,
    #[serde(default)]
    pub time_of_day: Option<String>,
    #[serde(default)]
    pub pressure_trend: Option<String>,
    #[serde(default)]
    pub water_level_trend: Option<String>,
    #[serde(default)]
    pub tournament_mode: bool,
}

impl ElitePatternRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.pro.validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisionTierRequest {
    #[serde(default)]
    pub pattern: ElitePatternRequest,
    #[serde(default)]
    pub vision: Option<RawVisionSignals>,
}

impl VisionTierRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.pattern.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

impl ChatResponse {
    pub fn echo(req: &ChatRequest) -> Self {
        Self {
            message: format!("SAGE received: {}", req.message),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonarRequest {
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonarResponse {
    pub message: String,
    pub input: SonarRequest,
}

impl SonarResponse {
    pub fn placeholder(input: SonarRequest) -> Self {
        Self {
            message: "Sonar endpoint placeholder: SAGE will analyze sonar video in a future release."
                .to_string(),
            input,
        }
    }
}

fn ensure_month(month: Option<u32>) -> anyhow::Result<()> {
    if let Some(month) = month {
        ensure!(
            (1..=12).contains(&month),
            "month must be between 1 and 12 (got {month})"
        );
    }
    Ok(())
}

fn ensure_finite(field: &str, value: Option<f64>) -> anyhow::Result<()> {
    if let Some(v) = value {
        ensure!(v.is_finite(), "{field} must be a finite number (got {v})");
    }
    Ok(())
}

fn ensure_non_negative(field: &str, value: Option<f64>) -> anyhow::Result<()> {
    ensure_finite(field, value)?;
    if let Some(v) = value {
        ensure!(v >= 0.0, "{field} must not be negative (got {v})");
    }
    Ok(())
}

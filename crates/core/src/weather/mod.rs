//! Current-weather lookup.
//!
//! Pattern tiers make at most one provider call per request through
//! [`resolve_weather`], which never fails: any provider error is logged and
//! replaced by [`WeatherContext::stub`].

mod error;
mod openweather;

pub use error::WeatherProviderError;
pub use openweather::OpenWeatherClient;

use crate::config::Settings;
use crate::fusion::WeatherContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl WeatherQuery {
    /// Both coordinates, when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates().is_none() && self.location_name().is_none()
    }
}

#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<WeatherContext, WeatherProviderError>;
}

/// Always answers with the stub context.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubWeatherProvider;

#[async_trait::async_trait]
impl WeatherProvider for StubWeatherProvider {
    fn provider_name(&self) -> &'static str {
        "stub"
    }

    async fn fetch_current(&self, _query: &WeatherQuery) -> Result<WeatherContext, WeatherProviderError> {
        Ok(WeatherContext::stub())
    }
}

/// OpenWeatherMap when an API key is configured, the stub otherwise.
pub fn provider_from_settings(settings: &Settings) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    if settings.weather_api_key.is_none() {
        tracing::info!("WEATHER_API_KEY not set; pattern tiers use stub weather");
        return Ok(Arc::new(StubWeatherProvider));
    }
    Ok(Arc::new(OpenWeatherClient::from_settings(settings)?))
}

/// One attempt against `provider`; every failure degrades to the stub.
pub async fn resolve_weather(provider: &dyn WeatherProvider, query: &WeatherQuery) -> WeatherContext {
    if query.is_empty() {
        tracing::debug!("no location in weather query; using stub weather");
        return WeatherContext::stub();
    }

    match provider.fetch_current(query).await {
        Ok(ctx) => {
            tracing::debug!(
                provider = provider.provider_name(),
                temp_f = ctx.temp_f,
                wind_speed = ctx.wind_speed,
                sky = %ctx.sky_condition,
                "weather resolved"
            );
            ctx
        }
        Err(err) => {
            tracing::warn!(
                provider = err.provider,
                stage = err.stage,
                location = ?query.location_name(),
                error = %err,
                "weather lookup failed; falling back to stub weather"
            );
            WeatherContext::stub()
        }
    }
}

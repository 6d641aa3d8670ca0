use crate::config::Settings;
use crate::fusion::WeatherContext;
use crate::pattern::environment::normalize_sky_condition;
use crate::weather::{WeatherProvider, WeatherProviderError, WeatherQuery};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

const PROVIDER_NAME: &str = "openweather";
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Current-conditions client for the OpenWeatherMap API (imperial units).
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_weather_api_key()?.to_string();
        let base_url = settings
            .weather_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = Duration::from_secs(settings.weather_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        Self::new(api_key, base_url, timeout)
    }

    pub fn new(api_key: String, base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build weather http client")?;

        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    fn url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/'))
    }

    fn query_params(&self, query: &WeatherQuery) -> Result<Vec<(&'static str, String)>, WeatherProviderError> {
        let mut params = match (query.coordinates(), query.location_name()) {
            (Some((lat, lon)), _) => vec![("lat", lat.to_string()), ("lon", lon.to_string())],
            (None, Some(name)) => vec![("q", name.to_string())],
            (None, None) => {
                return Err(WeatherProviderError::new(
                    PROVIDER_NAME,
                    "query",
                    "no coordinates or location name",
                ))
            }
        };
        params.push(("units", "imperial".to_string()));
        params.push(("appid", self.api_key.clone()));
        Ok(params)
    }
}

/// The request URL carries `appid`, so it is stripped before the error is logged.
fn transport_error(err: reqwest::Error) -> WeatherProviderError {
    WeatherProviderError::new(PROVIDER_NAME, "http", err.without_url().to_string())
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<WeatherContext, WeatherProviderError> {
        let params = self.query_params(query)?;

        let res = self
            .http
            .get(self.url())
            .query(&params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(transport_error)?;

        if !status.is_success() {
            return Err(WeatherProviderError {
                raw_response_json: serde_json::from_str(&text).ok(),
                ..WeatherProviderError::new(PROVIDER_NAME, "http", format!("status={status}"))
            });
        }

        let parsed = serde_json::from_str::<CurrentWeatherResponse>(&text).map_err(|e| {
            WeatherProviderError::new(PROVIDER_NAME, "decode", format!("{e}: {text}"))
        })?;
        Ok(parsed.into_context(Utc::now()))
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainBlock,
    #[serde(default)]
    wind: WindBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Default, Deserialize)]
struct WindBlock {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    description: String,
}

impl CurrentWeatherResponse {
    fn into_context(self, fetched_at: DateTime<Utc>) -> WeatherContext {
        let description = self.weather.first().map(|c| c.description.as_str());
        let timestamp = self
            .dt
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or(fetched_at);

        WeatherContext {
            temp_f: self.main.temp,
            wind_speed: self.wind.speed,
            sky_condition: normalize_sky_condition(description),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::environment::SkyBand;
    use chrono::TimeZone;

    fn client() -> OpenWeatherClient {
        OpenWeatherClient::new(
            "test-key".to_string(),
            "https://weather.example/".to_string(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn coordinates_win_over_location_name() {
        let params = client()
            .query_params(&WeatherQuery {
                location_name: Some("Lake Fork".into()),
                latitude: Some(32.9),
                longitude: Some(-95.5),
            })
            .unwrap();
        assert_eq!(params[0], ("lat", "32.9".to_string()));
        assert_eq!(params[1], ("lon", "-95.5".to_string()));
        assert!(params.contains(&("units", "imperial".to_string())));
        assert!(params.contains(&("appid", "test-key".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "q"));
    }

    #[test]
    fn location_name_is_used_without_coordinates() {
        let params = client()
            .query_params(&WeatherQuery {
                location_name: Some("Lake Fork".into()),
                latitude: Some(32.9),
                longitude: None,
            })
            .unwrap();
        assert_eq!(params[0], ("q", "Lake Fork".to_string()));
    }

    #[test]
    fn empty_query_is_rejected() {
        let err = client().query_params(&WeatherQuery::default()).unwrap_err();
        assert_eq!(err.stage, "query");
        assert!(err.to_string().contains("provider=openweather"));
    }

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(client().url(), "https://weather.example/data/2.5/weather");
    }

    #[tokio::test]
    async fn transport_errors_do_not_leak_the_api_key() {
        let client = OpenWeatherClient::new(
            "SECRET-KEY-123".to_string(),
            "http://127.0.0.1:1".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        let err = client
            .fetch_current(&WeatherQuery {
                location_name: Some("Lake Fork".into()),
                ..WeatherQuery::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.stage, "http");
        let text = err.to_string();
        assert!(!text.contains("SECRET-KEY-123"), "{text}");
        assert!(!text.contains("appid"), "{text}");
    }

    #[test]
    fn response_maps_into_context() {
        let raw = serde_json::json!({
            "main": {"temp": 71.6, "humidity": 40},
            "wind": {"speed": 9.2, "deg": 180},
            "weather": [{"main": "Clouds", "description": "broken clouds"}],
            "dt": 1_717_236_000
        });
        let parsed: CurrentWeatherResponse = serde_json::from_value(raw).unwrap();
        let ctx = parsed.into_context(Utc::now());
        assert_eq!(ctx.temp_f, 71.6);
        assert_eq!(ctx.wind_speed, 9.2);
        assert_eq!(ctx.sky_condition, SkyBand::PartlyCloudy);
        assert_eq!(ctx.timestamp, Utc.timestamp_opt(1_717_236_000, 0).unwrap());
    }

    #[test]
    fn sparse_response_uses_defaults() {
        let fetched_at = Utc.with_ymd_and_hms(2024, 4, 2, 12, 0, 0).unwrap();
        let parsed: CurrentWeatherResponse =
            serde_json::from_value(serde_json::json!({"main": {"temp": 48.0}})).unwrap();
        let ctx = parsed.into_context(fetched_at);
        assert_eq!(ctx.wind_speed, 0.0);
        assert_eq!(ctx.sky_condition, SkyBand::Unknown);
        assert_eq!(ctx.timestamp, fetched_at);
    }
}

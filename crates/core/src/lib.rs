pub mod domain;
pub mod fusion;
pub mod pattern;
pub mod vision;
pub mod weather;

pub mod config {
    use anyhow::Context;

    const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub weather_api_key: Option<String>,
        pub weather_base_url: Option<String>,
        pub weather_timeout_secs: Option<u64>,
        pub sentry_dsn: Option<String>,
        pub cors_allowed_origins: Vec<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let weather_timeout_secs = match std::env::var("WEATHER_TIMEOUT_SECS") {
                Ok(s) => Some(
                    s.trim()
                        .parse::<u64>()
                        .with_context(|| format!("WEATHER_TIMEOUT_SECS is not a number: {s}"))?,
                ),
                Err(_) => None,
            };

            Ok(Self {
                weather_api_key: non_empty_var("WEATHER_API_KEY"),
                weather_base_url: non_empty_var("WEATHER_BASE_URL"),
                weather_timeout_secs,
                sentry_dsn: non_empty_var("SENTRY_DSN"),
                cors_allowed_origins: parse_origins(
                    std::env::var("CORS_ALLOWED_ORIGINS").ok().as_deref(),
                ),
            })
        }

        pub fn require_weather_api_key(&self) -> anyhow::Result<&str> {
            self.weather_api_key
                .as_deref()
                .context("WEATHER_API_KEY is required")
        }
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                weather_api_key: None,
                weather_base_url: None,
                weather_timeout_secs: None,
                sentry_dsn: None,
                cors_allowed_origins: parse_origins(None),
            }
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn parse_origins(raw: Option<&str>) -> Vec<String> {
        let parsed: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if parsed.is_empty() {
            DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
        } else {
            parsed
        }
    }

}

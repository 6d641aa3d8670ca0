use serde_json::Value;
use std::fmt;

/// Failure reported by a weather provider. Callers in the pattern path log it
/// and fall back to the stub context.
#[derive(Debug, Clone)]
pub struct WeatherProviderError {
    pub provider: &'static str,
    pub stage: &'static str,
    pub detail: String,
    pub raw_response_json: Option<Value>,
}

impl WeatherProviderError {
    pub fn new(provider: &'static str, stage: &'static str, detail: impl Into<String>) -> Self {
        Self {
            provider,
            stage,
            detail: detail.into(),
            raw_response_json: None,
        }
    }
}

impl fmt::Display for WeatherProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weather error (provider={}, stage={}): {}",
            self.provider, self.stage, self.detail
        )
    }
}

impl std::error::Error for WeatherProviderError {}

//! Process-wide request configuration
//!
//! A [`Config`] is resolved once at startup and handed to the client. It carries
//! the fixed shape of the intraday request plus the credential.

use std::time::Duration;

use log::warn;

use crate::request::common::Interval;

/// Default Alpha Vantage query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
/// API function requested.
pub const FUNCTION: &str = "TIME_SERIES_INTRADAY";
/// Symbol requested when none is configured.
pub const DEFAULT_SYMBOL: &str = "IBM";
/// Credential substituted when the environment does not provide one.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";
/// Environment variable holding the credential.
pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";
/// Environment variable overriding the symbol.
pub const SYMBOL_VAR: &str = "ALPHA_VANTAGE_SYMBOL";
/// Upper bound on the single network call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of credential resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// A key was supplied explicitly or through the environment.
    Provided(String),
    /// Nothing was supplied; the placeholder is sent and upstream will reject it.
    Placeholder,
}

impl ApiKey {
    /// Resolve a raw, possibly missing value. Empty strings count as missing.
    pub fn resolve(value: Option<String>) -> Self {
        match value {
            Some(key) if !key.is_empty() => ApiKey::Provided(key),
            _ => {
                warn!("{API_KEY_VAR} environment variable not set. Using placeholder.");
                ApiKey::Placeholder
            }
        }
    }

    /// The value sent as `apikey`.
    pub fn as_str(&self) -> &str {
        match self {
            ApiKey::Provided(key) => key,
            ApiKey::Placeholder => PLACEHOLDER_API_KEY,
        }
    }

    /// Whether the placeholder is in use.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ApiKey::Placeholder)
    }
}

/// Request configuration.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    symbol: String,
    interval: Interval,
    api_key: ApiKey,
    timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            interval: Interval::FiveMin,
            api_key: ApiKey::Placeholder,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Build a configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self {
            api_key: ApiKey::resolve(std::env::var(API_KEY_VAR).ok()),
            ..Self::default()
        };
        if let Ok(symbol) = std::env::var(SYMBOL_VAR) {
            if !symbol.trim().is_empty() {
                config.symbol = symbol.trim().to_string();
            }
        }
        config
    }

    /// Set the query endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Set the API key explicitly.
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = ApiKey::Provided(api_key.into());
        self
    }

    /// Set the timeout for the network call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Query endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API function.
    pub fn function(&self) -> &'static str {
        FUNCTION
    }

    /// Symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Sampling interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Credential.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Timeout for the network call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

//! Main Alpha Vantage API client
use crate::config::Config;
use crate::request::Request;

/// The Alpha Vantage API client: an HTTP transport plus the request configuration.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone)]
pub struct AlphaVantage<Client: Request = reqwest::Client> {
    client: Client,
    config: Config,
}

/// The Alpha Vantage API client: an HTTP transport plus the request configuration.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
#[derive(Debug, Clone)]
pub struct AlphaVantage<Client: Request = crate::request::HyperClient> {
    client: Client,
    config: Config,
}

/// The Alpha Vantage API client: an HTTP transport plus the request configuration.
///
/// You must provide your own HTTP client that implements [`Request`].
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
#[derive(Debug, Clone)]
pub struct AlphaVantage<Client: Request> {
    client: Client,
    config: Config,
}

impl<Client: Request> AlphaVantage<Client> {
    /// Create a client with a fresh HTTP transport and the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a client with the configuration resolved from the environment.
    ///
    /// See [`Config::from_env`].
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use intraday_quote::{AlphaVantage, Config};
    ///
    /// let client = AlphaVantage::new(Config::default()).with_key("my_api_key");
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.with_key(api_key);
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> &str {
        self.config.api_key().as_str()
    }

    /// Get the request configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl<Client: Request> Default for AlphaVantage<Client> {
    /// A client with [`Config::default`], which carries the placeholder key.
    fn default() -> Self {
        Self::new(Config::default())
    }
}

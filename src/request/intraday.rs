//! `TIME_SERIES_INTRADAY` request builder: URL construction and the single GET

use log::info;
use serde::Serialize;

use crate::client::AlphaVantage;
use crate::error::{Error, Result};
use crate::execute::Execute;
use crate::processor::{Decoder, Processor, Raw};
use crate::request::Request;
use crate::request::common::{Interval, OutputSize};

/// Time series intraday request builder
pub struct TimeSeriesIntraday<'a, Client: Request, P: Processor = Raw> {
    client: &'a AlphaVantage<Client>,
    /// Stock symbol
    pub symbol: String,
    /// Time interval
    pub interval: Interval,
    /// Output size (compact or full)
    pub outputsize: Option<OutputSize>,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> TimeSeriesIntraday<'a, C, Raw> {
    /// Create a request from the client's configuration (returns the raw body by default)
    pub fn new(client: &'a AlphaVantage<C>) -> Self {
        Self {
            client,
            symbol: client.config().symbol().to_string(),
            interval: client.config().interval(),
            outputsize: None,
            processor: Raw,
        }
    }

    /// Decode the body into an [`IntradayResponse`](crate::model::IntradayResponse)
    pub fn decoded(self) -> TimeSeriesIntraday<'a, C, Decoder> {
        TimeSeriesIntraday {
            client: self.client,
            symbol: self.symbol,
            interval: self.interval,
            outputsize: self.outputsize,
            processor: Decoder,
        }
    }
}

// Builder methods work on any processor type
impl<'a, C: Request, P: Processor + 'a> TimeSeriesIntraday<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Override the configured symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Set output size
    pub fn outputsize(mut self, size: OutputSize) -> Self {
        self.outputsize = Some(size);
        self
    }

    /// Full request URL, credential included. Do not log it.
    pub fn url(&self) -> Result<String> {
        let config = self.client.config();
        let params = Params {
            function: config.function(),
            symbol: &self.symbol,
            interval: self.interval,
            outputsize: self.outputsize,
            apikey: config.api_key().as_str(),
        };
        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| Error::Custom(format!("Failed to encode query: {e}")))?;
        Ok(format!("{}?{}", config.base_url(), query))
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for TimeSeriesIntraday<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let url = self.url()?;
        let config = self.client.config();

        info!("Fetching {} {} data from: {}", self.symbol, self.interval, config.base_url());

        let timeout = config.timeout();
        let response = match tokio::time::timeout(timeout, self.client.client().get(&url)).await {
            Ok(response) => response,
            Err(_) => Err(Error::Timeout(timeout)),
        };

        self.processor.process(response)
    }
}

/// Query parameters, serialized in declaration order
#[derive(Debug, Serialize)]
struct Params<'a> {
    function: &'a str,
    symbol: &'a str,
    interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    outputsize: Option<OutputSize>,
    apikey: &'a str,
}

//! Time series endpoints

use crate::client::AlphaVantage;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::TimeSeriesIntraday;

/// Get the 5-minute intraday time series for the configured symbol
///
/// Returns a request builder that will return the raw JSON body. Call
/// `.decoded()` on it for a typed response.
///
/// # Example
/// ```no_run
/// # use intraday_quote::{AlphaVantage, Config};
/// # async fn example() {
/// # let client = AlphaVantage::new(Config::default().with_key("api-key"));
/// let json = intraday_quote::rest::time_series::intraday(&client)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn intraday<'a, Client: Request>(client: &'a AlphaVantage<Client>) -> TimeSeriesIntraday<'a, Client, Raw> {
    TimeSeriesIntraday::new(client)
}

//! Typed view of the `TIME_SERIES_INTRADAY` (5min) response body
//!
//! All values stay as the strings the API sends. Missing fields decode to empty
//! strings and unknown fields are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The `"Meta Data"` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaData {
    /// Description of the series
    #[serde(rename = "1. Information")]
    pub information: String,
    /// Ticker symbol
    #[serde(rename = "2. Symbol")]
    pub symbol: String,
    /// Timestamp of the most recent refresh, as sent
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: String,
    /// Sampling interval, e.g. `5min`
    #[serde(rename = "4. Interval")]
    pub interval: String,
    /// `Compact` or `Full`
    #[serde(rename = "5. Output Size")]
    pub output_size: String,
    /// Zone the series keys are expressed in, e.g. `US/Eastern`
    #[serde(rename = "6. Time Zone")]
    pub time_zone: String,
}

/// One OHLCV observation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// Opening price
    #[serde(rename = "1. open")]
    pub open: String,
    /// Highest price
    #[serde(rename = "2. high")]
    pub high: String,
    /// Lowest price
    #[serde(rename = "3. low")]
    pub low: String,
    /// Closing price
    #[serde(rename = "4. close")]
    pub close: String,
    /// Traded volume
    #[serde(rename = "5. volume")]
    pub volume: String,
}

/// Full intraday response.
///
/// `series` maps `YYYY-MM-DD HH:MM:SS` keys to quotes. Its iteration order
/// carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntradayResponse {
    /// Metadata envelope
    #[serde(rename = "Meta Data")]
    pub metadata: MetaData,
    /// Observations keyed by local timestamp
    #[serde(rename = "Time Series (5min)")]
    pub series: HashMap<String, Quote>,
}

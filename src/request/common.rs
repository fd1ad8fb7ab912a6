//! Query parameter types for the intraday endpoint
use serde::{Deserialize, Serialize};

/// Output size for Alpha Vantage time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// Compact (latest 100 data points)
    Compact,
    /// Full (trailing month of intraday data)
    Full,
}

/// Time series interval. Only the 5-minute series is decoded by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    /// 5 minutes
    #[serde(rename = "5min")]
    FiveMin,
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::FiveMin => write!(f, "5min"),
        }
    }
}

//! Human-readable report of the latest observation

use std::fmt::Write as _;

use chrono::SecondsFormat;
use log::warn;

use crate::model::IntradayResponse;
use crate::select::LatestEntry;

/// Message printed when no series key could be parsed.
pub const NO_DATA_MESSAGE: &str = "No time series data found in the response.";

/// Build the report text.
pub fn render(response: &IntradayResponse, selected: Option<&LatestEntry<'_>>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Stock Data for: {}", response.metadata.symbol);
    let _ = writeln!(out, "Last Refreshed: {}", response.metadata.last_refreshed);
    match selected {
        Some(entry) => {
            let _ = writeln!(
                out,
                "Latest Price ({}): {}",
                entry.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
                entry.quote.close
            );
        }
        None => {
            let _ = writeln!(out, "{NO_DATA_MESSAGE}");
        }
    }
    out
}

/// Print the report to stdout.
///
/// With nothing selected, the raw body goes to the log instead. A 200 response
/// carrying an API error message (bad key, rate limit) ends up here.
pub fn report(response: &IntradayResponse, selected: Option<&LatestEntry<'_>>, raw: &str) {
    print!("{}", render(response, selected));
    if selected.is_none() {
        warn!("Raw response body for inspection:\n{raw}");
    }
}

//! Fetch the latest 5-minute intraday quote from Alpha Vantage
//!
//! The pipeline is linear: fetch the body, decode it, select the chronologically
//! latest entry and report it.
//!
//! ```no_run
//! use intraday_quote::{AlphaVantage, Config, rest, select, report};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlphaVantage::new(Config::default().with_key("your_api_key"));
//!     let decoded = rest::time_series::intraday(&client).decoded().get().await?;
//!     let latest = select::select_latest(&decoded.response);
//!     report::report(&decoded.response, latest.as_ref(), &decoded.body);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client (lightweight and fast).
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest).
//!   To use reqwest instead: `default-features = false, features = ["reqwest"]`.

#![warn(missing_docs)]

mod client;
pub mod config;
pub mod error;
pub mod execute;
pub mod model;
pub mod processor;
pub mod report;
pub mod request;
pub mod response;
pub mod rest;
pub mod select;

pub use config::{ApiKey, Config};
pub use error::{Error, Result};
pub use model::{IntradayResponse, MetaData, Quote};
pub use request::Request;
pub use response::Response;
pub use select::LatestEntry;

/// The main Alpha Vantage API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::AlphaVantage<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type AlphaVantage = client::AlphaVantage<reqwest::Client>;

/// The main Alpha Vantage API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::AlphaVantage<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type AlphaVantage = client::AlphaVantage<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic AlphaVantage
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::AlphaVantage;

/// Generic client, for plugging in a custom [`Request`] implementation.
pub use client::AlphaVantage as Client;

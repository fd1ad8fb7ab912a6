//! `intraday-quote`: print the latest 5-minute quote for a symbol.
//!
//! The API key is read from `ALPHA_VANTAGE_API_KEY` (or a `.env` file). Log
//! output goes to stderr and honours `RUST_LOG`.

use std::process::ExitCode;

use intraday_quote::{AlphaVantage, Error, Result, report, rest, select};
use log::error;

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

async fn run(client: &AlphaVantage) -> Result<()> {
    let decoded = rest::time_series::intraday(client).decoded().get().await?;
    let latest = select::select_latest(&decoded.response);
    report::report(&decoded.response, latest.as_ref(), &decoded.body);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logger();
    let client = AlphaVantage::from_env();

    match run(&client).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Error::Decode { body, .. } = &e {
                error!("Raw response body:\n{body}");
            }
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

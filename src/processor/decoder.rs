//! JSON decoding of the intraday response
use log::debug;

use crate::error::{Error, Result};
use crate::model::IntradayResponse;
use crate::processor::{Processor, ensure_ok};
use crate::response::Response;

/// Decode a raw body into an [`IntradayResponse`].
///
/// On failure the body travels inside [`Error::Decode`] so the caller can log it.
pub fn decode(raw: &str) -> Result<IntradayResponse> {
    serde_json::from_str(raw).map_err(|source| Error::Decode {
        source,
        body: raw.to_owned(),
    })
}

/// A decoded response together with the body it came from.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Raw response body
    pub body: String,
    /// Decoded response
    pub response: IntradayResponse,
}

/// Processor that checks the status and decodes the body, keeping the raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder;

impl Processor for Decoder {
    type Output = Decoded;

    fn process<R: Response>(&self, response: Result<R>) -> Result<Decoded> {
        let body = ensure_ok(response?)?.into_body();
        let response = decode(&body)?;
        debug!(
            "decoded {} series entries for {}",
            response.series.len(),
            response.metadata.symbol
        );
        Ok(Decoded { body, response })
    }
}

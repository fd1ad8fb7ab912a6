//! Response processors
//!
//! A processor turns the transport result into the request's output. Every
//! processor rejects non-200 responses first.

use crate::error::{Error, Result};
use crate::response::Response;

pub mod decoder;

pub use decoder::{Decoded, Decoder, decode};

/// Converts a transport result into a typed output.
pub trait Processor {
    /// Output type
    type Output;

    /// Process the response returned by the HTTP client
    fn process<R: Response>(&self, response: Result<R>) -> Result<Self::Output>;
}

/// Processor returning the raw body text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, response: Result<R>) -> Result<String> {
        Ok(ensure_ok(response?)?.into_body())
    }
}

/// Pass through a 200 response, turn anything else into [`Error::HttpStatus`].
pub(crate) fn ensure_ok<R: Response>(resp: R) -> Result<R> {
    if resp.status() != 200 {
        return Err(Error::HttpStatus {
            request_id: resp.request_id().to_owned(),
            status: resp.status(),
            body: resp.into_body(),
        });
    }
    Ok(resp)
}

//! # Parsers Module
//!
//! Pluggable transformation from raw wire messages to structured parameter
//! values. Each topic configures exactly one parser; the params batch
//! builder applies it to every message independently.

pub mod identity;
pub mod json;

pub use identity::IdentityParser;
pub use json::JsonParser;

use serde_json::Value;
use thiserror::Error;

use crate::messaging::RawMessage;

/// A single-message parse failure.
///
/// The batch builder turns this into [`crate::DispatchError::Parse`] and
/// fails the whole batch; partial batches are not produced.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        Self {
            message: source.to_string(),
        }
    }
}

/// Capability turning one raw message into one parsed parameter value.
pub trait Parser: Send + Sync {
    fn parse(&self, message: &RawMessage) -> Result<Value, ParseError>;
}

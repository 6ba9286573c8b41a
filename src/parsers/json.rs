use serde_json::Value;

use crate::messaging::RawMessage;
use crate::parsers::{ParseError, Parser};

/// Default parser: payload bytes are a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, message: &RawMessage) -> Result<Value, ParseError> {
        Ok(serde_json::from_slice(&message.payload)?)
    }
}

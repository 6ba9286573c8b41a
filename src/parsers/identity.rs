use serde_json::Value;

use crate::messaging::RawMessage;
use crate::parsers::{ParseError, Parser};

/// Passthrough parser: the payload is taken verbatim as a UTF-8 string
/// value. Suits plain-text topics and test harnesses that want params to
/// mirror raw payloads exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityParser;

impl Parser for IdentityParser {
    fn parse(&self, message: &RawMessage) -> Result<Value, ParseError> {
        let text = std::str::from_utf8(&message.payload)
            .map_err(|source| ParseError::new(format!("payload is not valid UTF-8: {source}")))?;
        Ok(Value::String(text.to_string()))
    }
}

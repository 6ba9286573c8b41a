use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::messaging::RawMessage;

/// One parsed parameter object plus the source metadata of the raw message
/// it derives from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    value: Value,
    topic: String,
    partition: i32,
    offset: i64,
    received_at: DateTime<Utc>,
}

impl Params {
    pub(crate) fn new(value: Value, source: &RawMessage) -> Self {
        Self {
            value,
            topic: source.topic.clone(),
            partition: source.partition,
            offset: source.offset,
            received_at: source.received_at,
        }
    }

    /// The parsed payload value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn partition(&self) -> i32 {
        self.partition
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single raw message as delivered by the transport.
///
/// The payload stays opaque until the topic's parser runs; serde derives
/// exist so a scheduled job can carry the batch to a deferred worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Topic the message was fetched from
    pub topic: String,
    /// Partition within the topic
    pub partition: i32,
    /// Offset within the partition
    pub offset: i64,
    /// Optional partitioning key
    pub key: Option<String>,
    /// Opaque payload bytes
    pub payload: Vec<u8>,
    /// When the transport handed the message to the dispatch core
    pub received_at: DateTime<Utc>,
}

impl RawMessage {
    /// Create a message received now, without a key.
    pub fn new(
        topic: impl Into<String>,
        partition: i32,
        offset: i64,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            topic: topic.into(),
            partition,
            offset,
            key: None,
            payload: payload.into(),
            received_at: Utc::now(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

use serde::{Deserialize, Serialize};

/// Consumer group identity a topic belongs to.
///
/// Offset tracking and partition assignment for the group happen in the
/// transport layer; the dispatch core only carries the identity so that
/// scheduled jobs and log events can name their origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsumerGroup {
    id: String,
}

impl ConsumerGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for ConsumerGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

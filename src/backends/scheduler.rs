//! # Deferred Execution Seam
//!
//! The scheduled backend serializes a controller's state into a
//! [`ScheduledJob`] and hands it to a [`Scheduler`]. The worker on the
//! other side rebuilds a controller from the job, assigns the raw batch and
//! calls `perform_now` - the received hook already ran before scheduling
//! and is not re-evaluated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DispatchError, DispatchResult};
use crate::messaging::RawMessage;

/// Serializable unit of deferred work: topic identity plus the raw batch.
///
/// Params are rebuilt lazily on the worker side through the same parser
/// pipeline; only raw messages travel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// Correlation id for tracking the job through the deferred mechanism
    pub id: Uuid,
    /// Topic the batch belongs to
    pub topic: String,
    /// The raw message batch, order preserved
    pub raw_messages: Vec<RawMessage>,
    /// When the job was handed to the scheduler
    pub enqueued_at: DateTime<Utc>,
}

impl ScheduledJob {
    pub fn new(topic: impl Into<String>, raw_messages: Vec<RawMessage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic: topic.into(),
            raw_messages,
            enqueued_at: Utc::now(),
        }
    }

    /// Serialize for queue storage.
    pub fn to_json(&self) -> DispatchResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|source| DispatchError::Scheduling {
            topic: self.topic.clone(),
            message: format!("failed to serialize job: {source}"),
        })
    }

    /// Rebuild a job from queue storage.
    pub fn from_json(value: serde_json::Value) -> DispatchResult<Self> {
        serde_json::from_value(value).map_err(|source| DispatchError::Scheduling {
            topic: "unknown".to_string(),
            message: format!("failed to deserialize job: {source}"),
        })
    }
}

/// Deferred execution mechanism capability.
///
/// `schedule` must only fail when the handoff itself fails; errors raised
/// by the deferred `perform` surface through the mechanism's own reporting
/// channel and never reach the original caller.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn schedule(&self, job: ScheduledJob) -> DispatchResult<()>;
}

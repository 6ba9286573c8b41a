use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use crate::backends::{ScheduledJob, Scheduler};
use crate::error::{DispatchError, DispatchResult};

/// Channel-backed scheduler for single-process deployments and tests.
///
/// Jobs land on an unbounded tokio channel; whoever owns the receiver is
/// the deferred execution mechanism and decides when (and whether) each job
/// runs. Dropping the receiver makes further scheduling fail.
pub struct InProcessScheduler {
    sender: mpsc::UnboundedSender<ScheduledJob>,
}

impl InProcessScheduler {
    /// Create the scheduler plus the queue end the worker drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScheduledJob>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Scheduler for InProcessScheduler {
    async fn schedule(&self, job: ScheduledJob) -> DispatchResult<()> {
        let topic = job.topic.clone();
        let job_id = job.id;
        self.sender
            .send(job)
            .map_err(|_| DispatchError::Scheduling {
                topic: topic.clone(),
                message: "job queue receiver dropped".to_string(),
            })?;

        debug!(topic = %topic, job_id = %job_id, "batch scheduled for deferred execution");
        Ok(())
    }
}

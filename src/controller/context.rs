use once_cell::sync::OnceCell;
use serde_json::Value;

use crate::error::{DispatchError, DispatchResult};
use crate::messaging::RawMessage;
use crate::params::{Params, ParamsBatch};
use crate::responders;
use crate::routing::Topic;

/// Which slice of the batch a consumer invocation is scoped to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum BatchScope {
    /// Batch processing: one invocation sees every parameter.
    Whole,
    /// Per-message processing: one invocation per parameter index.
    Single(usize),
}

/// Instance-context view handed to received hooks and `perform`.
///
/// Borrows the controller's assigned state; params are built lazily through
/// the topic's parser on first read and memoized in the controller, so a
/// hook that aborts before reading params never pays for parsing.
pub struct ControllerContext<'a> {
    topic: &'a Topic,
    raw_messages: &'a [RawMessage],
    batch: &'a OnceCell<ParamsBatch>,
    scope: BatchScope,
}

impl<'a> ControllerContext<'a> {
    pub(crate) fn new(
        topic: &'a Topic,
        raw_messages: &'a [RawMessage],
        batch: &'a OnceCell<ParamsBatch>,
        scope: BatchScope,
    ) -> Self {
        Self {
            topic,
            raw_messages,
            batch,
            scope,
        }
    }

    pub fn topic(&self) -> &Topic {
        self.topic
    }

    /// The raw batch as assigned, available before any parsing happens.
    pub fn raw_messages(&self) -> &[RawMessage] {
        self.raw_messages
    }

    /// Lazily built, memoized params batch; same length and order as the
    /// raw batch.
    pub fn params_batch(&self) -> DispatchResult<&'a ParamsBatch> {
        self.batch
            .get_or_try_init(|| ParamsBatch::build(self.raw_messages, self.topic.parser()))
    }

    /// The current parameter: the scoped one in per-message mode, the first
    /// one in batch mode.
    pub fn params(&self) -> DispatchResult<&'a Params> {
        let batch = self.params_batch()?;
        let index = match self.scope {
            BatchScope::Single(index) => index,
            BatchScope::Whole => 0,
        };
        batch.get(index).ok_or_else(|| DispatchError::EmptyBatch {
            topic: self.topic.name().to_string(),
        })
    }

    /// Forward business-logic output through the topic's responder.
    ///
    /// Errors with [`DispatchError::MisconfiguredResponder`] when the topic
    /// has no responder configured.
    pub async fn respond_with(&self, data: Value) -> DispatchResult<()> {
        responders::dispatch(self.topic, data).await
    }
}

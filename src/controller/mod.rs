//! # Dispatch Controller
//!
//! The per-batch orchestrator: one controller instance is constructed per
//! delivered batch, runs a single lifecycle pass and is discarded.
//!
//! ## Lifecycle
//!
//! ```text
//! assign(raw) ──▶ invoke() ──▶ received hook ──▶ abort? ──▶ done (no error)
//!                                   │
//!                                   ▼
//!                               process() ──▶ Inline:    perform now
//!                                        └──▶ Scheduled: enqueue job, return
//! ```
//!
//! Parsing is deferred: the params batch is built from the raw messages on
//! first read and memoized, so a hook that aborts without touching params
//! never pays for parsing.

pub mod consumer;
pub mod context;
pub mod hook;

pub use consumer::Consumer;
pub use context::ControllerContext;
pub use hook::{HookOutcome, ReceivedHook};

use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::debug;

use crate::backends::{BackendStrategy, ScheduledJob};
use crate::controller::context::BatchScope;
use crate::error::DispatchResult;
use crate::messaging::RawMessage;
use crate::params::ParamsBatch;
use crate::responders;
use crate::routing::Topic;

/// How a lifecycle pass ended, observable by the delivery layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The received hook aborted before business logic ran.
    Aborted,
    /// The inline backend ran `perform` to completion.
    Performed,
    /// The scheduled backend enqueued the batch; `perform` runs later.
    Scheduled,
}

/// Single-use dispatch controller bound to one raw message batch.
///
/// Holds a shared reference to the read-only topic configuration, the
/// consumer supplying business logic, an optional received hook and the
/// lazily parsed params batch. Instances share no mutable state with each
/// other.
pub struct Controller<C: Consumer> {
    topic: Arc<Topic>,
    consumer: C,
    received_hook: Option<ReceivedHook<C>>,
    raw_messages: Vec<RawMessage>,
    batch: OnceCell<ParamsBatch>,
}

impl<C: Consumer> Controller<C> {
    pub fn new(topic: Arc<Topic>, consumer: C) -> Self {
        Self {
            topic,
            consumer,
            received_hook: None,
            raw_messages: Vec::new(),
            batch: OnceCell::new(),
        }
    }

    /// Install the pre-processing hook; at most one is active.
    pub fn after_received(mut self, hook: ReceivedHook<C>) -> Self {
        self.received_hook = Some(hook);
        self
    }

    pub fn topic(&self) -> &Topic {
        self.topic.as_ref()
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    pub fn raw_messages(&self) -> &[RawMessage] {
        &self.raw_messages
    }

    /// Store the delivered raw batch. Parsing does not happen here.
    pub fn assign(&mut self, raw_messages: Vec<RawMessage>) {
        debug!(
            topic = %self.topic.name(),
            messages = raw_messages.len(),
            "raw message batch assigned"
        );
        self.set_params_batch(raw_messages);
    }

    /// Re-seed the controller with a raw message sequence that will flow
    /// through the same lazy parse pipeline; any previously memoized params
    /// are discarded.
    pub fn set_params_batch(&mut self, raw_messages: Vec<RawMessage>) {
        self.raw_messages = raw_messages;
        self.batch = OnceCell::new();
    }

    /// Lazily build, memoize and return the params batch. Subsequent reads
    /// return the cached value without re-parsing.
    pub fn params_batch(&self) -> DispatchResult<&ParamsBatch> {
        self.batch
            .get_or_try_init(|| ParamsBatch::build(&self.raw_messages, self.topic.parser()))
    }

    /// Run the full lifecycle: received hook, abort check, then `process`.
    ///
    /// An aborting hook terminates the pass without error; `perform` is
    /// never reached. Any non-abort hook outcome continues.
    pub async fn invoke(&mut self) -> DispatchResult<Disposition> {
        if self.run_received_hook() == HookOutcome::Abort {
            debug!(topic = %self.topic.name(), "received hook aborted the batch lifecycle");
            return Ok(Disposition::Aborted);
        }
        self.process().await
    }

    fn run_received_hook(&mut self) -> HookOutcome {
        let Some(hook) = &self.received_hook else {
            return HookOutcome::Continue;
        };
        let ctx = ControllerContext::new(
            self.topic.as_ref(),
            &self.raw_messages,
            &self.batch,
            BatchScope::Whole,
        );
        hook.evaluate(&mut self.consumer, &ctx)
    }

    /// Delegate execution to the topic's backend strategy.
    pub async fn process(&mut self) -> DispatchResult<Disposition> {
        let topic = Arc::clone(&self.topic);
        match topic.backend() {
            BackendStrategy::Inline => {
                self.perform_now().await?;
                Ok(Disposition::Performed)
            }
            BackendStrategy::Scheduled(scheduler) => {
                let job = ScheduledJob::new(topic.name(), self.raw_messages.clone());
                debug!(
                    topic = %topic.name(),
                    job_id = %job.id,
                    messages = job.raw_messages.len(),
                    "handing batch to scheduled backend"
                );
                scheduler.schedule(job).await?;
                Ok(Disposition::Scheduled)
            }
        }
    }

    /// Run the consumer's business logic on the current call path.
    ///
    /// This is also the worker-side entry point for scheduled jobs: the
    /// received hook already ran before scheduling and is not re-evaluated
    /// here. With batch processing enabled the consumer runs once over the
    /// whole batch, otherwise once per parameter in batch order.
    pub async fn perform_now(&mut self) -> DispatchResult<()> {
        if self.topic.batch_processing() {
            let ctx = ControllerContext::new(
                self.topic.as_ref(),
                &self.raw_messages,
                &self.batch,
                BatchScope::Whole,
            );
            self.consumer.perform(&ctx).await
        } else {
            let total = self.params_batch()?.len();
            for index in 0..total {
                let ctx = ControllerContext::new(
                    self.topic.as_ref(),
                    &self.raw_messages,
                    &self.batch,
                    BatchScope::Single(index),
                );
                self.consumer.perform(&ctx).await?;
            }
            Ok(())
        }
    }

    /// Forward business-logic output through the topic's responder.
    pub async fn respond_with(&self, data: Value) -> DispatchResult<()> {
        responders::dispatch(self.topic.as_ref(), data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use crate::parsers::{IdentityParser, ParseError, Parser};
    use crate::routing::ConsumerGroup;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Unimplemented;

    impl Consumer for Unimplemented {}

    #[derive(Default)]
    struct Recording {
        performed: usize,
        hook_runs: usize,
        seen_values: Vec<serde_json::Value>,
    }

    #[async_trait]
    impl Consumer for Recording {
        async fn perform(&mut self, ctx: &ControllerContext<'_>) -> DispatchResult<()> {
            self.performed += 1;
            for params in ctx.params_batch()? {
                self.seen_values.push(params.value().clone());
            }
            Ok(())
        }
    }

    /// Identity parsing plus a shared call counter.
    struct CountingParser(Arc<AtomicUsize>);

    impl Parser for CountingParser {
        fn parse(&self, message: &RawMessage) -> Result<serde_json::Value, ParseError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            IdentityParser.parse(message)
        }
    }

    fn identity_topic() -> Arc<Topic> {
        Arc::new(
            Topic::builder("events", ConsumerGroup::new("test"))
                .parser(IdentityParser)
                .build()
                .unwrap(),
        )
    }

    fn raw(offset: i64, payload: &str) -> RawMessage {
        RawMessage::new("events", 0, offset, payload.as_bytes().to_vec())
    }

    #[tokio::test]
    async fn test_base_perform_fails_with_not_implemented() {
        let mut controller = Controller::new(identity_topic(), Unimplemented);
        controller.assign(vec![raw(0, "a")]);

        let result = controller.perform_now().await;
        assert!(matches!(result, Err(DispatchError::NotImplemented { .. })));
    }

    #[tokio::test]
    async fn test_params_batch_is_lazy_and_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let topic = Arc::new(
            Topic::builder("events", ConsumerGroup::new("test"))
                .parser(CountingParser(Arc::clone(&calls)))
                .build()
                .unwrap(),
        );

        let mut controller = Controller::new(topic, Recording::default());
        controller.assign(vec![raw(0, "a"), raw(1, "b")]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let first_len = controller.params_batch().unwrap().len();
        let second_len = controller.params_batch().unwrap().len();
        assert_eq!(first_len, 2);
        assert_eq!(second_len, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_set_params_batch_discards_memoized_params() {
        let mut controller = Controller::new(identity_topic(), Recording::default());
        controller.assign(vec![raw(0, "a")]);
        assert_eq!(controller.params_batch().unwrap().len(), 1);

        controller.set_params_batch(vec![raw(1, "b"), raw(2, "c")]);
        let batch = controller.params_batch().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.first().unwrap().offset(), 1);
    }

    #[tokio::test]
    async fn test_invoke_without_hook_reaches_perform() {
        let mut controller = Controller::new(identity_topic(), Recording::default());
        controller.assign(vec![raw(0, "a"), raw(1, "b")]);

        let disposition = controller.invoke().await.unwrap();
        assert_eq!(disposition, Disposition::Performed);
        assert_eq!(controller.consumer().performed, 1);
    }

    #[tokio::test]
    async fn test_block_hook_abort_skips_perform() {
        let mut controller = Controller::new(identity_topic(), Recording::default())
            .after_received(ReceivedHook::block(|_consumer: &mut Recording, _ctx| {
                HookOutcome::Abort
            }));
        controller.assign(vec![raw(0, "a")]);

        let disposition = controller.invoke().await.unwrap();
        assert_eq!(disposition, Disposition::Aborted);
        assert_eq!(controller.consumer().performed, 0);
    }

    #[tokio::test]
    async fn test_block_hook_continue_reaches_perform() {
        let mut controller = Controller::new(identity_topic(), Recording::default())
            .after_received(ReceivedHook::block(|consumer: &mut Recording, _ctx| {
                consumer.hook_runs += 1;
                HookOutcome::Continue
            }));
        controller.assign(vec![raw(0, "a")]);

        controller.invoke().await.unwrap();
        assert_eq!(controller.consumer().hook_runs, 1);
        assert_eq!(controller.consumer().performed, 1);
    }

    #[tokio::test]
    async fn test_method_hook_abort_skips_perform() {
        fn gatekeeper(consumer: &mut Recording, _ctx: &ControllerContext<'_>) -> HookOutcome {
            consumer.hook_runs += 1;
            HookOutcome::Abort
        }

        let mut controller = Controller::new(identity_topic(), Recording::default())
            .after_received(ReceivedHook::method(gatekeeper));
        controller.assign(vec![raw(0, "a")]);

        let disposition = controller.invoke().await.unwrap();
        assert_eq!(disposition, Disposition::Aborted);
        assert_eq!(controller.consumer().hook_runs, 1);
        assert_eq!(controller.consumer().performed, 0);
    }

    #[tokio::test]
    async fn test_method_hook_continue_reaches_perform() {
        fn gatekeeper(_consumer: &mut Recording, _ctx: &ControllerContext<'_>) -> HookOutcome {
            HookOutcome::Continue
        }

        let mut controller = Controller::new(identity_topic(), Recording::default())
            .after_received(ReceivedHook::method(gatekeeper));
        controller.assign(vec![raw(0, "a")]);

        let disposition = controller.invoke().await.unwrap();
        assert_eq!(disposition, Disposition::Performed);
        assert_eq!(controller.consumer().performed, 1);
    }

    #[tokio::test]
    async fn test_aborting_hook_never_parses() {
        let calls = Arc::new(AtomicUsize::new(0));
        let topic = Arc::new(
            Topic::builder("events", ConsumerGroup::new("test"))
                .parser(CountingParser(Arc::clone(&calls)))
                .build()
                .unwrap(),
        );

        let mut controller = Controller::new(topic, Recording::default()).after_received(
            ReceivedHook::block(|_consumer: &mut Recording, _ctx| HookOutcome::Abort),
        );
        controller.assign(vec![raw(0, "a"), raw(1, "b")]);

        controller.invoke().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_hook_can_inspect_raw_messages() {
        let mut controller = Controller::new(identity_topic(), Recording::default())
            .after_received(ReceivedHook::block(|_consumer: &mut Recording, ctx| {
                if ctx.raw_messages().is_empty() {
                    HookOutcome::Abort
                } else {
                    HookOutcome::Continue
                }
            }));

        // No batch assigned: the hook sees an empty batch and aborts.
        let disposition = controller.invoke().await.unwrap();
        assert_eq!(disposition, Disposition::Aborted);
    }

    #[tokio::test]
    async fn test_per_message_mode_performs_once_per_parameter() {
        #[derive(Default)]
        struct PerMessage {
            seen: Vec<serde_json::Value>,
        }

        #[async_trait]
        impl Consumer for PerMessage {
            async fn perform(&mut self, ctx: &ControllerContext<'_>) -> DispatchResult<()> {
                self.seen.push(ctx.params()?.value().clone());
                Ok(())
            }
        }

        let topic = Arc::new(
            Topic::builder("events", ConsumerGroup::new("test"))
                .parser(IdentityParser)
                .batch_processing(false)
                .build()
                .unwrap(),
        );

        let mut controller = Controller::new(topic, PerMessage::default());
        controller.assign(vec![raw(0, "a"), raw(1, "b"), raw(2, "c")]);

        controller.invoke().await.unwrap();
        let seen = &controller.consumer().seen;
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], "a");
        assert_eq!(seen[2], "c");
    }

    #[tokio::test]
    async fn test_inline_parse_failure_propagates_from_invoke() {
        // Default topic parser is JSON; the payload is not.
        let topic = Arc::new(
            Topic::builder("events", ConsumerGroup::new("test"))
                .build()
                .unwrap(),
        );
        let mut controller = Controller::new(topic, Recording::default());
        controller.assign(vec![raw(0, "not json")]);

        let result = controller.invoke().await;
        assert!(matches!(result, Err(DispatchError::Parse { .. })));
    }
}

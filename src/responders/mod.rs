//! # Responders Module
//!
//! Optional outbound seam for business-logic output. A topic may configure
//! a responder factory; `respond_with` constructs a fresh responder per
//! call and invokes it exactly once. Calling `respond_with` on a topic
//! without a responder is an explicit error, never a silent drop.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{DispatchError, DispatchResult};
use crate::routing::Topic;

/// A constructed responder instance, invoked once with business-logic
/// output. Delivery protocol and serialization are the implementation's
/// concern.
#[async_trait]
pub trait Responder: Send {
    async fn call(&mut self, data: Value) -> DispatchResult<()>;
}

/// Capability constructing one responder instance per response.
pub trait ResponderFactory: Send + Sync {
    fn construct(&self) -> Box<dyn Responder>;
}

impl<F, R> ResponderFactory for F
where
    F: Fn() -> R + Send + Sync,
    R: Responder + 'static,
{
    fn construct(&self) -> Box<dyn Responder> {
        Box::new(self())
    }
}

/// Route `data` through the topic's responder, if one is configured.
pub(crate) async fn dispatch(topic: &Topic, data: Value) -> DispatchResult<()> {
    let factory = topic
        .responder()
        .ok_or_else(|| DispatchError::MisconfiguredResponder {
            topic: topic.name().to_string(),
        })?;

    let mut responder = factory.construct();
    debug!(topic = %topic.name(), "responding with business logic output");
    responder.call(data).await
}

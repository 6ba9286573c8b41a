//! # Topic Configuration
//!
//! Immutable per-topic configuration: which parser turns raw messages into
//! params, which backend runs business logic, whether an outbound responder
//! exists, and whether the consumer sees the batch whole or one parameter
//! at a time.

use std::sync::Arc;

use crate::backends::BackendStrategy;
use crate::error::{DispatchError, DispatchResult};
use crate::parsers::{JsonParser, Parser};
use crate::responders::ResponderFactory;
use crate::routing::ConsumerGroup;

/// Read-only topic configuration shared across controller instances.
///
/// Built once through [`TopicBuilder`] before any instance handles traffic.
pub struct Topic {
    name: String,
    consumer_group: ConsumerGroup,
    parser: Arc<dyn Parser>,
    backend: BackendStrategy,
    responder: Option<Arc<dyn ResponderFactory>>,
    batch_processing: bool,
}

impl Topic {
    /// Start building a topic bound to a consumer group.
    pub fn builder(name: impl Into<String>, consumer_group: ConsumerGroup) -> TopicBuilder {
        TopicBuilder {
            name: name.into(),
            consumer_group,
            parser: Arc::new(JsonParser),
            backend: BackendStrategy::Inline,
            responder: None,
            batch_processing: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn consumer_group(&self) -> &ConsumerGroup {
        &self.consumer_group
    }

    pub fn parser(&self) -> &dyn Parser {
        self.parser.as_ref()
    }

    pub fn backend(&self) -> &BackendStrategy {
        &self.backend
    }

    pub fn responder(&self) -> Option<&Arc<dyn ResponderFactory>> {
        self.responder.as_ref()
    }

    pub fn batch_processing(&self) -> bool {
        self.batch_processing
    }
}

impl std::fmt::Debug for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Topic")
            .field("name", &self.name)
            .field("consumer_group", &self.consumer_group)
            .field("backend", &self.backend.kind())
            .field("responder", &self.responder.is_some())
            .field("batch_processing", &self.batch_processing)
            .finish()
    }
}

/// Builder for [`Topic`] configuration.
///
/// Defaults: JSON parser, inline backend, no responder, batch processing on.
pub struct TopicBuilder {
    name: String,
    consumer_group: ConsumerGroup,
    parser: Arc<dyn Parser>,
    backend: BackendStrategy,
    responder: Option<Arc<dyn ResponderFactory>>,
    batch_processing: bool,
}

impl TopicBuilder {
    /// Replace the default JSON parser.
    pub fn parser(mut self, parser: impl Parser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Select the execution backend for this topic.
    pub fn backend(mut self, backend: BackendStrategy) -> Self {
        self.backend = backend;
        self
    }

    /// Configure an outbound responder; a fresh instance is constructed per
    /// `respond_with` call.
    pub fn responder(mut self, factory: impl ResponderFactory + 'static) -> Self {
        self.responder = Some(Arc::new(factory));
        self
    }

    /// Whether `perform` sees the whole params batch at once (`true`) or is
    /// invoked once per individual parameter (`false`).
    pub fn batch_processing(mut self, enabled: bool) -> Self {
        self.batch_processing = enabled;
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> DispatchResult<Topic> {
        if self.name.trim().is_empty() {
            return Err(DispatchError::Configuration {
                message: "topic name must not be empty".to_string(),
            });
        }
        if self.consumer_group.id().trim().is_empty() {
            return Err(DispatchError::Configuration {
                message: format!("consumer group for topic '{}' must not be empty", self.name),
            });
        }

        tracing::debug!(
            topic = %self.name,
            consumer_group = %self.consumer_group,
            backend = ?self.backend.kind(),
            batch_processing = self.batch_processing,
            "topic configuration built"
        );

        Ok(Topic {
            name: self.name,
            consumer_group: self.consumer_group,
            parser: self.parser,
            backend: self.backend,
            responder: self.responder,
            batch_processing: self.batch_processing,
        })
    }
}

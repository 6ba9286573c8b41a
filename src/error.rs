//! # Dispatch Error Types
//!
//! Structured error handling for the dispatch core using thiserror
//! for typed errors instead of `Box<dyn Error>` patterns.
//!
//! Aborting a lifecycle from a received hook is deliberately NOT part of
//! this taxonomy: it is a normal control-flow outcome, modelled as
//! [`crate::controller::HookOutcome::Abort`].

use thiserror::Error;

/// Errors surfaced by the per-batch dispatch lifecycle
#[derive(Debug, Error)]
pub enum DispatchError {
    /// `perform` was invoked on a controller whose consumer never overrode it.
    /// Signals a framework-usage defect, not a runtime data problem.
    #[error("perform is not implemented for the controller handling topic '{topic}'")]
    NotImplemented { topic: String },

    /// A message could not be parsed into params; fails the whole batch build.
    #[error("failed to parse message at partition {partition} offset {offset}: {message}")]
    Parse {
        partition: i32,
        offset: i64,
        message: String,
    },

    /// Any error raised inside consumer business logic.
    #[error(transparent)]
    BusinessLogic(#[from] anyhow::Error),

    /// `respond_with` was called on a topic with no responder configured.
    #[error("no responder configured for topic '{topic}'")]
    MisconfiguredResponder { topic: String },

    /// Handoff to the deferred execution mechanism failed.
    #[error("failed to schedule batch for topic '{topic}': {message}")]
    Scheduling { topic: String, message: String },

    /// A single-param read was requested but the batch holds no messages.
    #[error("no params available for topic '{topic}': batch is empty")]
    EmptyBatch { topic: String },

    /// Invalid topic configuration detected at setup time.
    #[error("invalid topic configuration: {message}")]
    Configuration { message: String },
}

pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

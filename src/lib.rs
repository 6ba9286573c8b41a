#![allow(clippy::doc_markdown)] // Allow technical terms like JSON, UTF-8 in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Streamline Core Rust
//!
//! High-performance Rust dispatch core for stream consumption frameworks:
//! the per-message-batch controller that turns a delivered raw batch into
//! parsed params, runs a cancellable received hook, routes execution
//! through an inline or scheduled backend, invokes consumer business logic
//! and optionally emits a response.
//!
//! ## Overview
//!
//! An external delivery mechanism constructs one [`Controller`] per batch,
//! assigns the raw messages and calls [`Controller::invoke`]. The dispatch
//! core owns the control-flow contract every consumer must obey: the hook
//! runs to completion before business logic, an aborting hook terminates
//! the pass without error, and backend selection decides whether `perform`
//! runs synchronously or through a deferred execution mechanism.
//!
//! Broker connectivity, partition assignment and offset management live
//! outside this crate; they are consumed through narrow seams
//! ([`Parser`], [`Scheduler`], [`Responder`]).
//!
//! ## Module Organization
//!
//! - [`routing`] - Immutable per-topic configuration shared by controllers
//! - [`messaging`] - Raw wire-side message values
//! - [`params`] - Parsed params and the ordered batch builder
//! - [`parsers`] - Pluggable raw-message parsers (JSON default)
//! - [`backends`] - Inline and scheduled execution strategies
//! - [`responders`] - Optional outbound seam for business-logic output
//! - [`controller`] - The per-batch dispatch controller and consumer trait
//! - [`error`] - Structured error handling
//! - [`logging`] - Optional tracing subscriber initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use streamline_core::{
//!     Consumer, ConsumerGroup, Controller, ControllerContext, DispatchResult, Disposition,
//!     IdentityParser, RawMessage, Topic,
//! };
//!
//! struct Printer;
//!
//! #[async_trait]
//! impl Consumer for Printer {
//!     async fn perform(&mut self, ctx: &ControllerContext<'_>) -> DispatchResult<()> {
//!         for params in ctx.params_batch()? {
//!             println!("{}", params.value());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> DispatchResult<()> {
//! let topic = Arc::new(
//!     Topic::builder("greetings", ConsumerGroup::new("example"))
//!         .parser(IdentityParser)
//!         .build()?,
//! );
//!
//! let mut controller = Controller::new(Arc::clone(&topic), Printer);
//! controller.assign(vec![RawMessage::new("greetings", 0, 0, b"hello".to_vec())]);
//! assert_eq!(controller.invoke().await?, Disposition::Performed);
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod controller;
pub mod error;
pub mod logging;
pub mod messaging;
pub mod params;
pub mod parsers;
pub mod responders;
pub mod routing;

pub use backends::{BackendKind, BackendStrategy, InProcessScheduler, ScheduledJob, Scheduler};
pub use controller::{
    Consumer, Controller, ControllerContext, Disposition, HookOutcome, ReceivedHook,
};
pub use error::{DispatchError, DispatchResult};
pub use logging::init_logging;
pub use messaging::RawMessage;
pub use params::{Params, ParamsBatch};
pub use parsers::{IdentityParser, JsonParser, ParseError, Parser};
pub use responders::{Responder, ResponderFactory};
pub use routing::{ConsumerGroup, Topic, TopicBuilder};

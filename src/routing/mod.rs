//! # Routing Module
//!
//! Topic-level configuration shared by every controller instance handling
//! traffic for that topic. Configuration is assembled once at setup through
//! [`TopicBuilder`] and is immutable afterwards; controllers receive it by
//! shared reference and never mutate it.

pub mod consumer_group;
pub mod topic;

pub use consumer_group::ConsumerGroup;
pub use topic::{Topic, TopicBuilder};

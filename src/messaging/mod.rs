//! # Messaging Module
//!
//! Wire-side message values as handed over by the transport layer. Offset
//! management and broker connectivity live outside the dispatch core; a
//! controller only ever sees an already-delivered, ordered batch.

pub mod raw_message;

pub use raw_message::RawMessage;

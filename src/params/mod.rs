//! # Params Module
//!
//! Parsed parameter values and the ordered batch built from raw messages.
//! The batch preserves the raw batch's length and order end to end and is
//! immutable once built.

pub mod params;
pub mod params_batch;

pub use params::Params;
pub use params_batch::ParamsBatch;

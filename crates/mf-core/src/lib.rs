//! mf-core: shared probe model, errors, and configuration.
//!
//! This crate is the foundational dependency for the other mf-* crates. It
//! defines the structured probe record handed over by a media prober, the
//! normalized record produced by classification, a unified error type, and
//! the TOML-backed configuration.

pub mod config;
pub mod error;
pub mod media;

// Re-export the most commonly used items at the crate root.
pub use config::Config;
pub use error::{Error, Result};
pub use media::*;

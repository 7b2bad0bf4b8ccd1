//! Person sample application.
//!
//! Walks through functors and lenses on a JSON person record:
//!
//! - `config`: environment-driven settings
//! - `fixture`: JSON fixture loading into a value tree
//! - `demo`: the walkthrough steps
//! - `error`: sample error types

pub mod config;
pub mod demo;
pub mod error;
pub mod fixture;

pub use config::{ConfigError, SampleConfig};
pub use error::SampleError;

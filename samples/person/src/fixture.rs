//! Person fixture loading.

use std::fs;

use functors_lenses::value::Value;

use crate::config::SampleConfig;
use crate::error::SampleError;

/// The fixture compiled into the binary.
pub const EMBEDDED_PERSON: &str = include_str!("../fixtures/person.json");

/// Parses a person from JSON text.
///
/// # Errors
///
/// Returns `SampleError::Json` if the text is not valid JSON.
pub fn parse(text: &str) -> Result<Value, SampleError> {
    Ok(serde_json::from_str(text)?)
}

/// Loads the configured fixture, falling back to the embedded one.
///
/// # Errors
///
/// Returns `SampleError::Io` if the configured file cannot be read, or
/// `SampleError::Json` if its content is not valid JSON.
pub fn load(config: &SampleConfig) -> Result<Value, SampleError> {
    match &config.fixture_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading fixture from file");
            let text = fs::read_to_string(path).map_err(|source| SampleError::Io {
                path: path.clone(),
                source,
            })?;
            parse(&text)
        }
        None => {
            tracing::debug!("Using embedded fixture");
            parse(EMBEDDED_PERSON)
        }
    }
}

//! Sample error types.

use std::io;
use std::path::PathBuf;

use functors_lenses::optics::Path;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the sample.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The fixture file could not be read.
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        /// The fixture path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The fixture is not valid JSON.
    #[error("Invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The fixture is missing a field the sample relies on.
    #[error("Fixture has no value at {0}")]
    MissingField(Path),
}

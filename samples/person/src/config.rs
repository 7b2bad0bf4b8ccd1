//! Sample configuration loaded from environment variables.
//!
//! Every setting has a default, so the sample runs without any environment.
//!
//! # Example
//!
//! ```rust,ignore
//! use person::config::SampleConfig;
//!
//! let config = SampleConfig::from_env()?;
//! println!("manager path: {}", config.manager_path);
//! ```

use std::env;
use std::path::PathBuf;

use functors_lenses::optics::Path;
use thiserror::Error;

const DEFAULT_MANAGER_PATH: &str = "position.department.departmentManager.lastName";
const DEFAULT_MANAGER_LAST_NAME: &str = "Flakes";
const DEFAULT_FRIEND_INDEX: usize = 2;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Sample configuration.
///
/// # Fields
///
/// - `fixture_path`: JSON file replacing the embedded person fixture
/// - `manager_path`: path to the field the nested update rewrites
/// - `manager_last_name`: value written through `manager_path`
/// - `friend_index`: friend read through the index lens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleConfig {
    /// Optional fixture file; the embedded fixture is used when absent.
    pub fixture_path: Option<PathBuf>,
    /// Path rewritten by the nested update demo.
    pub manager_path: Path,
    /// Replacement written through `manager_path`.
    pub manager_last_name: String,
    /// Index read from `friends`.
    pub friend_index: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            manager_path: default_manager_path(),
            manager_last_name: DEFAULT_MANAGER_LAST_NAME.to_string(),
            friend_index: DEFAULT_FRIEND_INDEX,
        }
    }
}

impl SampleConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PERSON_FIXTURE`: JSON fixture path (optional)
    /// - `PERSON_MANAGER_PATH`: dotted path (optional, default:
    ///   `position.department.departmentManager.lastName`)
    /// - `PERSON_MANAGER_LAST_NAME`: replacement (optional, default: `Flakes`)
    /// - `PERSON_FRIEND_INDEX`: friend index (optional, default: 2)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fixture_path = lookup("PERSON_FIXTURE").map(PathBuf::from);
        let manager_path = lookup("PERSON_MANAGER_PATH").map_or_else(
            || Ok(default_manager_path()),
            |text| parse("PERSON_MANAGER_PATH", &text),
        )?;
        let manager_last_name = lookup("PERSON_MANAGER_LAST_NAME")
            .unwrap_or_else(|| DEFAULT_MANAGER_LAST_NAME.to_string());
        let friend_index = lookup("PERSON_FRIEND_INDEX")
            .map_or(Ok(DEFAULT_FRIEND_INDEX), |text| parse("PERSON_FRIEND_INDEX", &text))?;

        Ok(Self {
            fixture_path,
            manager_path,
            manager_last_name,
            friend_index,
        })
    }
}

fn default_manager_path() -> Path {
    DEFAULT_MANAGER_PATH.split('.').collect()
}

fn parse<T>(key: &str, text: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.parse().map_err(|error: T::Err| ConfigError::InvalidValue {
        key: key.to_string(),
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let variables: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| variables.get(key).cloned()
    }

    #[rstest]
    fn defaults_without_variables() {
        let config = SampleConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SampleConfig::default());
        assert_eq!(config.manager_path.to_string(), DEFAULT_MANAGER_PATH);
    }

    #[rstest]
    fn reads_overrides() {
        let config = SampleConfig::from_lookup(lookup_from(&[
            ("PERSON_FIXTURE", "/tmp/person.json"),
            ("PERSON_MANAGER_PATH", "friends[0].lastName"),
            ("PERSON_MANAGER_LAST_NAME", "Prince"),
            ("PERSON_FRIEND_INDEX", "1"),
        ]))
        .unwrap();

        assert_eq!(config.fixture_path, Some(PathBuf::from("/tmp/person.json")));
        assert_eq!(config.manager_path.to_string(), "friends[0].lastName");
        assert_eq!(config.manager_last_name, "Prince");
        assert_eq!(config.friend_index, 1);
    }

    #[rstest]
    #[case("PERSON_FRIEND_INDEX", "two")]
    #[case("PERSON_MANAGER_PATH", "position..title")]
    fn rejects_invalid_values(#[case] key: &str, #[case] value: &str) {
        let error = SampleConfig::from_lookup(lookup_from(&[(key, value)])).unwrap_err();
        let ConfigError::InvalidValue { key: reported, .. } = error;
        assert_eq!(reported, key);
    }
}

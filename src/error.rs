//! Error types for radar-experiments
//!
//! Every failure names the experiment and the field at fault so the
//! bootstrap process can report it before aborting startup.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// radar-experiments error types
#[derive(Error, Debug)]
pub enum Error {
    /// A record violates one of its invariants
    #[error("Invalid configuration for experiment '{experiment}': {reason}")]
    InvalidConfiguration {
        /// Name of the offending experiment (may be empty if the name itself is invalid)
        experiment: String,
        /// Which invariant failed
        reason: String,
    },

    /// Two records share a name within one catalog
    #[error("Duplicate experiment '{0}' in catalog\nExperiment names must be unique")]
    DuplicateExperiment(String),

    /// Catalog lookup miss
    #[error("Unknown experiment '{0}'")]
    UnknownExperiment(String),

    /// Catalog file extension is neither `.toml` nor `.json`
    #[error("Unsupported catalog format: {0}\nExpected a .toml or .json file")]
    UnsupportedFormat(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON catalog error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML catalog parse error
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML catalog write error
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidConfiguration`].
    pub(crate) fn invalid(experiment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            experiment: experiment.into(),
            reason: reason.into(),
        }
    }
}

//! Error types for getprobe.
//!
//! Each stage of a run has its own error enum so that `main` can decide
//! which failures are fatal: config errors are only warnings, a missing
//! probe id aborts before any request is made, and fetch errors are
//! reported to the user.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while locating, reading or parsing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("Can not read {} file.", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid TOML for a [`crate::models::Config`].
    #[error("Can not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A bare tag was given but `HOME` is not set.
    #[error("HOME is not set, can not resolve config for tag '{0}'")]
    NoHome(String),
}

/// Failure while querying the Atlas API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Error building or sending the request, or reading the body.
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The body was not a valid answer document.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no default Id and nothing on command-line")]
    NoProbeId,
}

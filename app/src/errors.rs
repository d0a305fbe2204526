use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while fetching or decoding one status snapshot.
///
/// Any of these aborts the current poll cycle; none of them stops polling.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network or transport failure (connection refused, reset, DNS...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not JSON, or not a JSON object.
    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed(e.to_string())
    }
}

/// Errors returned when loading or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error reading `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting: {0}")]
    Invalid(String),
}

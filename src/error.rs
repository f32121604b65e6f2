//! Error types for the exporter
//!
//! Everything the library can fail with is collected in [`ExportError`].
//! Soft misses (a search with no hits, a project id with no name) are not
//! errors and are returned as empty results or `None` instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while fetching, resolving or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No usable API token was supplied to the client.
    #[error("credential error: {0}")]
    Credential(String),

    /// The service answered with a non-success status.
    #[error("request to {url} failed with HTTP {status}: {body}")]
    Transport {
        /// HTTP status code returned by the service.
        status: u16,
        /// Requested URL (without query string).
        url: String,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A task points at a section id missing from the project's sections.
    #[error("task {task_id} references unknown section {section_id}")]
    UnknownSection { task_id: String, section_id: String },

    /// A completed-task time bound could not be parsed.
    #[error("invalid time bound '{value}'. Use YYYY-M-DTHH:MM:SS (e.g., '2021-4-29T10:13:00')")]
    InvalidBound { value: String },

    /// The configuration file exists but could not be parsed.
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, ExportError>;

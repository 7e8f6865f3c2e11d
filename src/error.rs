// Error types for result collection and publishing

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while collecting or publishing Xray results.
#[derive(Debug, Error)]
pub enum XrayError {
    #[error("environment variable `{0}` must be set")]
    MissingEnv(&'static str),

    #[error("invalid Jira base URL `{url}`: {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },

    #[error("status must be one of [{allowed}], but was `{status}`")]
    InvalidStatus { status: String, allowed: String },

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("cannot connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("authentication with {url} failed: {message}")]
    Auth { url: String, message: String },

    #[error("HTTP {status} from Jira Xray: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response from Jira Xray: {0}")]
    UnexpectedResponse(String),

    #[error("failed to write report to {path:?}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

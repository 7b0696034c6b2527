//! Error types.
//!
//! None of these cross the page boundary: fetch errors collapse into an absent
//! document, render errors into an untouched anchor. They exist so the log
//! line says what went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid data source `{0}`: {1}")]
    InvalidSource(String, String),

    #[cfg(feature = "http")]
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error! status: {status} ({url})")]
    Status { url: String, status: u16 },

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed profile document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("HTTP data sources require the `http` feature ({0})")]
    HttpDisabled(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template for {section} failed: {source}")]
    Template {
        section: &'static str,
        #[source]
        source: askama::Error,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("icon declared for unknown skill category `{0}`")]
    UnknownCategory(String),

    #[error("skill category `{0}` has more than one icon")]
    DuplicateIcon(String),
}

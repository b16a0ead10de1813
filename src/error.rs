// src/error.rs
//! Error types for both pipelines.
//!
//! Each stage owns a narrow enum; `Error` is the umbrella the front ends see.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Select(#[from] SelectError),

    /// The HTTP client itself could not be built (TLS backend, etc.)
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Bad command line or option value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The request for one slot produced nothing usable. Always recoverable: the slot is skipped.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A delivery document that does not have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("delivery document incomplete: missing [{}]{}", .missing.join(", "), fmt_mistyped(.mistyped))]
    Incomplete {
        missing: Vec<String>,
        mistyped: Vec<String>,
    },
}

impl ExtractError {
    /// Every key path reported by this error, missing first.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        match self {
            ExtractError::Incomplete { missing, mistyped } => {
                missing.iter().chain(mistyped.iter()).map(String::as_str)
            }
        }
    }
}

fn fmt_mistyped(mistyped: &[String]) -> String {
    if mistyped.is_empty() {
        s!()
    } else {
        format!("; wrong type [{}]", mistyped.join(", "))
    }
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} already exists with a different header; refusing to append", .path.display())]
    HeaderMismatch { path: PathBuf },

    #[error("append to {} before the table was initialized", .path.display())]
    NotInitialized { path: PathBuf },
}

/// Visualization input could not be used at all (configuration error).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column(s): {}", .path.display(), .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },
}

/// The input was fine but the filter matched nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("no deliveries found for {batter} ({ball_type})")]
    Empty { batter: String, ball_type: String },
}


//! Error types for folio-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading a content brief.
#[derive(Debug, Error)]
pub enum BriefError {
    /// The brief file does not exist.
    #[error("brief not found at {path}")]
    NotFound { path: PathBuf },

    /// The header row lacks a required column.
    #[error("brief at {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// Malformed delimited data (bad quoting, invalid UTF-8, ...).
    #[error("failed to parse brief at {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Underlying I/O failure other than a missing file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from reading the template configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error on load, with the file path for context.
    #[error("failed to parse template config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from persisting or reading variant plans.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (write path).
    #[error("plan serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON parse error on load.
    #[error("failed to parse plan at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn plan_io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PlanError {
    PlanError::Io {
        path: path.into(),
        source,
    }
}

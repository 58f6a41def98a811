use std::path::PathBuf;

use thiserror::Error;

/// Error surface for variant discovery and renderer launching.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("launcher script not found: {path}")]
    LauncherNotFound { path: PathBuf },

    #[error("interpreter '{program}' not found; is the rendering environment installed?")]
    InterpreterNotFound { program: PathBuf },

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for '{program}': {source}")]
    Wait {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start process runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("plan store error: {0}")]
    Plan(#[from] folio_core::PlanError),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> DispatchError {
    DispatchError::Io {
        path: path.into(),
        source,
    }
}

//! Error types for folio-planner.

use std::path::PathBuf;

use thiserror::Error;

use folio_core::{BriefError, PlanError};

/// Errors that abort a generation run.
///
/// Missing templates are not errors: the page is skipped and a warning logged.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The brief could not be read (missing file, bad header, malformed rows).
    #[error("brief error: {0}")]
    Brief(#[from] BriefError),

    /// The brief parsed but holds no rows; there is nothing to build.
    #[error("brief at {path} has no rows")]
    EmptyBrief { path: PathBuf },

    /// A plan could not be written.
    #[error("plan error: {0}")]
    Plan(#[from] PlanError),
}

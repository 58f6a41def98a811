//! # folio-dispatch
//!
//! Hands persisted variant plans to an external rendering application, one
//! variant at a time.
//!
//! [`Dispatcher::discover_variants`] finds `variant_<n>/plan.json` files,
//! [`Dispatcher::render_variant`] runs the launcher for one of them under a
//! time limit, and [`Dispatcher::process_all`] drives a confirmed batch.

mod batch;
pub mod confirm;
mod error;
mod render;
pub mod settings;

pub use batch::{DispatchRun, RenderRecord, RenderSummary};
pub use confirm::{AssumeYes, Confirm, PromptConfirm};
pub use error::DispatchError;
pub use render::{Dispatcher, RenderOutcome, PLAN_PATH_ENV};
pub use settings::RendererSettings;

//! # folio-planner
//!
//! Builds magazine layout variants from a content brief.
//!
//! [`VariantPlanner`] binds brief rows to randomly chosen templates and orders
//! the pages; [`VariantPlanner::generate_all`] runs the whole
//! load → build → persist cycle for a batch of variants.

pub mod error;
pub mod generate;
pub mod planner;

pub use error::PlannerError;
pub use generate::{GeneratedVariant, GenerationReport, RECOMMENDED_VARIANTS};
pub use planner::{shuffle_for_variant, VariantPlanner};

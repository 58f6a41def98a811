//! Folio core library: domain types, brief loading, template table, plan files.
//!
//! - [`types`]: briefs, templates and plans
//! - [`error`]: [`BriefError`], [`ConfigError`], [`PlanError`]
//! - [`brief`]: delimited brief reader
//! - [`config`]: template lookup table with built-in fallback
//! - [`plan_store`]: `variant_<n>/plan.json` persistence and discovery

pub mod brief;
pub mod config;
pub mod error;
pub mod plan_store;
pub mod types;

pub use brief::{load_brief, load_brief_with};
pub use config::{ConfigSource, LoadedConfig, TemplateConfig};
pub use error::{BriefError, ConfigError, PlanError};
pub use types::{
    BriefRow, CoverData, PageData, PagePlan, Placement, RowKind, SpreadData, SpreadLeft,
    SpreadRight, Style, TemplateEntry, TemplateKind, VariantPlan, VariantRef,
};

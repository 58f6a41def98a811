//! Batch generation: load the brief once, then build and persist each variant.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use folio_core::{load_brief, plan_store, Style};

use crate::error::PlannerError;
use crate::planner::VariantPlanner;

/// Variant counts the workflow is designed around. Other counts still run.
pub const RECOMMENDED_VARIANTS: RangeInclusive<u32> = 3..=5;

/// One persisted variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVariant {
    pub number: u32,
    pub path: PathBuf,
    pub pages: usize,
}

/// Outcome of [`VariantPlanner::generate_all`].
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub style: Style,
    /// Rows read from the brief.
    pub rows: usize,
    pub variants: Vec<GeneratedVariant>,
}

impl VariantPlanner {
    /// Build variants `1..=count` from the brief at `brief_path` and write
    /// each to `<output_root>/variant_<n>/plan.json`.
    ///
    /// A missing or empty brief aborts before anything is written.
    pub fn generate_all(
        &mut self,
        brief_path: &Path,
        count: u32,
        style: &Style,
        output_root: &Path,
    ) -> Result<GenerationReport, PlannerError> {
        let rows = load_brief(brief_path)?;
        if rows.is_empty() {
            return Err(PlannerError::EmptyBrief {
                path: brief_path.to_path_buf(),
            });
        }

        if !RECOMMENDED_VARIANTS.contains(&count) {
            tracing::warn!(
                count,
                "variant count outside the recommended {}-{} range",
                RECOMMENDED_VARIANTS.start(),
                RECOMMENDED_VARIANTS.end()
            );
        }

        tracing::info!(rows = rows.len(), count, style = %style, "generating variants");

        let mut variants = Vec::with_capacity(count as usize);
        for number in 1..=count {
            let plan = self.build_variant(&rows, number, style);
            let path = plan_store::persist_variant_at(output_root, &plan)?;
            variants.push(GeneratedVariant {
                number,
                path,
                pages: plan.pages.len(),
            });
        }

        Ok(GenerationReport {
            style: style.clone(),
            rows: rows.len(),
            variants,
        })
    }
}

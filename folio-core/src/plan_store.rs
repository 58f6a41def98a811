//! On-disk variant plans.
//!
//! # Storage layout
//!
//! ```text
//! <output_root>/
//!   variant_1/
//!     plan.json
//!   variant_2/
//!     plan.json
//!   ...
//! ```
//!
//! The renderer writes its documents next to `plan.json`, so each variant
//! owns its directory.

use std::path::{Path, PathBuf};

use crate::error::{plan_io_err, PlanError};
use crate::types::{VariantPlan, VariantRef};

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// File name of a persisted plan inside its variant directory.
pub const PLAN_FILE: &str = "plan.json";

const VARIANT_PREFIX: &str = "variant_";

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<output_root>/variant_<n>/`. Pure, no I/O.
pub fn variant_dir_at(output_root: &Path, number: u32) -> PathBuf {
    output_root.join(format!("{VARIANT_PREFIX}{number}"))
}

/// `<output_root>/variant_<n>/plan.json`. Pure, no I/O.
pub fn plan_path_at(output_root: &Path, number: u32) -> PathBuf {
    variant_dir_at(output_root, number).join(PLAN_FILE)
}

/// Parse the `<n>` out of a `variant_<n>` directory name.
pub fn parse_variant_dir_name(name: &str) -> Option<u32> {
    name.strip_prefix(VARIANT_PREFIX)?.parse().ok()
}

// ---------------------------------------------------------------------------
// 2. Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically write `plan` to `<output_root>/variant_<n>/plan.json`, where
/// `n` is `plan.variant`. Returns the path written.
///
/// Write flow: create dir → serialize → `plan.json.tmp` → `rename`.
/// An existing plan is replaced.
pub fn persist_variant_at(output_root: &Path, plan: &VariantPlan) -> Result<PathBuf, PlanError> {
    let dir = variant_dir_at(output_root, plan.variant);
    std::fs::create_dir_all(&dir).map_err(|e| plan_io_err(&dir, e))?;

    let path = dir.join(PLAN_FILE);
    let tmp_path = dir.join(format!("{PLAN_FILE}.tmp"));

    let mut json = serde_json::to_string_pretty(plan)?;
    json.push('\n');
    std::fs::write(&tmp_path, json).map_err(|e| plan_io_err(&tmp_path, e))?;
    if let Err(e) = std::fs::rename(&tmp_path, &path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(plan_io_err(&path, e));
    }

    tracing::info!(path = %path.display(), pages = plan.pages.len(), "wrote plan");
    Ok(path)
}

// ---------------------------------------------------------------------------
// 3. Load
// ---------------------------------------------------------------------------

/// Read a plan file back.
pub fn load_plan(path: &Path) -> Result<VariantPlan, PlanError> {
    let contents = std::fs::read_to_string(path).map_err(|e| plan_io_err(path, e))?;
    serde_json::from_str(&contents).map_err(|source| PlanError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Every `variant_<n>` directory under `output_root` that holds a plan file,
/// sorted by `n` numerically (`variant_2` before `variant_10`).
///
/// A missing `output_root` yields an empty list.
pub fn list_variants_at(output_root: &Path) -> Result<Vec<VariantRef>, PlanError> {
    if !output_root.exists() {
        return Ok(vec![]);
    }

    let mut variants: Vec<VariantRef> = std::fs::read_dir(output_root)
        .map_err(|e| plan_io_err(output_root, e))?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|e| {
            let number = parse_variant_dir_name(&e.file_name().to_string_lossy())?;
            let dir = e.path();
            let plan = dir.join(PLAN_FILE);
            plan.is_file().then_some(VariantRef { number, dir, plan })
        })
        .collect();
    variants.sort_by_key(|v| v.number);
    Ok(variants)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

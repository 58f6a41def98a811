use std::path::PathBuf;
use std::time::Duration;

use folio_core::plan_store::DEFAULT_OUTPUT_DIR;

pub const DEFAULT_INTERPRETER: &str = "cscript";
pub const DEFAULT_LAUNCHER: &str = "scripts/runjsx.vbs";
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(5);

/// How to reach the external renderer.
///
/// The command run for each variant is
/// `<interpreter> <interpreter_args...> <launcher> <plan>`, with both paths
/// made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererSettings {
    /// Directory holding the `variant_<n>` directories.
    pub output_root: PathBuf,
    pub interpreter: PathBuf,
    pub interpreter_args: Vec<String>,
    pub launcher: PathBuf,
    /// Upper bound on a single render.
    pub timeout: Duration,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_DIR),
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            interpreter_args: vec!["//Nologo".to_string()],
            launcher: PathBuf::from(DEFAULT_LAUNCHER),
            timeout: DEFAULT_RENDER_TIMEOUT,
        }
    }
}

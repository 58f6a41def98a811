//! Running the external renderer for one variant.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use folio_core::plan_store;
use folio_core::VariantRef;

use crate::error::{io_err, DispatchError};
use crate::settings::RendererSettings;

/// Environment variable carrying the absolute plan path to the composition script.
pub const PLAN_PATH_ENV: &str = "MAGAZINE_PLAN_PATH";

/// Result of one render attempt. Every variant other than `Success` is a
/// terminal failure for that variant; nothing is retried.
#[derive(Debug)]
pub enum RenderOutcome {
    Success,
    /// The renderer ran past the time limit and was abandoned.
    Timeout { limit: Duration },
    /// The renderer exited unsuccessfully. `code` is `None` when it was
    /// terminated by a signal.
    NonZeroExit { code: Option<i32>, diagnostic: String },
    /// The renderer could not be started at all.
    LaunchFailed(DispatchError),
}

impl RenderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderOutcome::Success)
    }
}

/// Discovers variant plans and renders them through the configured launcher.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    settings: RendererSettings,
}

impl Dispatcher {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// `variant_<n>` directories with a plan file, in ascending numeric order.
    /// Empty when the output directory does not exist.
    pub fn discover_variants(&self) -> Result<Vec<VariantRef>, DispatchError> {
        Ok(plan_store::list_variants_at(&self.settings.output_root)?)
    }

    /// Run the renderer for `variant` and wait at most `settings.timeout`.
    pub fn render_variant(&self, variant: &VariantRef) -> RenderOutcome {
        match self.try_render(variant) {
            Ok(outcome) => outcome,
            Err(err) => RenderOutcome::LaunchFailed(err),
        }
    }

    fn try_render(&self, variant: &VariantRef) -> Result<RenderOutcome, DispatchError> {
        let launcher = &self.settings.launcher;
        if !launcher.is_file() {
            return Err(DispatchError::LauncherNotFound {
                path: launcher.clone(),
            });
        }
        let launcher = absolute(launcher)?;
        let plan = absolute(&variant.plan)?;

        run_detached(self.run_launcher(&launcher, &plan))?
    }

    async fn run_launcher(&self, launcher: &Path, plan: &Path) -> Result<RenderOutcome, DispatchError> {
        let program = &self.settings.interpreter;
        let mut cmd = Command::new(program);
        cmd.args(&self.settings.interpreter_args)
            .arg(launcher)
            .arg(plan)
            .env(PLAN_PATH_ENV, plan)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(false);

        tracing::debug!(
            program = %program.display(),
            args = ?self.settings.interpreter_args,
            launcher = %launcher.display(),
            plan = %plan.display(),
            "starting renderer"
        );

        let child = cmd.spawn().map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => DispatchError::InterpreterNotFound {
                program: program.clone(),
            },
            _ => DispatchError::Spawn {
                program: program.clone(),
                source,
            },
        })?;

        let limit = self.settings.timeout;
        let output = match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| DispatchError::Wait {
                program: program.clone(),
                source,
            })?,
            Err(_) => {
                tracing::warn!(plan = %plan.display(), ?limit, "renderer timed out, abandoning it");
                return Ok(RenderOutcome::Timeout { limit });
            }
        };

        if output.status.success() {
            return Ok(RenderOutcome::Success);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let diagnostic = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        Ok(RenderOutcome::NonZeroExit {
            code: output.status.code(),
            diagnostic,
        })
    }
}

/// Drive `fut` on a fresh current-thread runtime and return as soon as it
/// completes.
///
/// Blocking-pool work still in flight (pipe readers of an abandoned child on
/// Windows) is left behind instead of being waited for on shutdown.
fn run_detached<F: Future>(fut: F) -> Result<F::Output, DispatchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(DispatchError::Runtime)?;
    let output = runtime.block_on(fut);
    runtime.shutdown_background();
    Ok(output)
}

fn absolute(path: &Path) -> Result<PathBuf, DispatchError> {
    std::path::absolute(path).map_err(|e| io_err(path, e))
}

//! `folio render [RENDERER]`: render every prepared variant, one at a time.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use folio_core::plan_store::DEFAULT_OUTPUT_DIR;
use folio_dispatch::settings::{
    DEFAULT_INTERPRETER, DEFAULT_LAUNCHER, DEFAULT_PAUSE, DEFAULT_RENDER_TIMEOUT,
};
use folio_dispatch::{
    AssumeYes, Confirm, DispatchRun, Dispatcher, PromptConfirm, RenderOutcome, RenderRecord,
    RenderSummary, RendererSettings,
};

/// Arguments for `folio render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Interpreter that runs the launcher script.
    #[arg(default_value = DEFAULT_INTERPRETER)]
    pub renderer: PathBuf,

    /// Launcher script handed to the interpreter together with each plan path.
    #[arg(long, default_value = DEFAULT_LAUNCHER)]
    pub launcher: PathBuf,

    /// Extra argument passed to the interpreter before the launcher (repeatable).
    /// Defaults to `//Nologo` when the interpreter is left at its default.
    #[arg(long = "interpreter-arg", value_name = "ARG")]
    pub interpreter_args: Vec<String>,

    /// Directory holding `variant_<n>/plan.json`.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Seconds to wait between consecutive renders.
    #[arg(long, default_value_t = DEFAULT_PAUSE.as_secs())]
    pub pause: u64,

    /// Seconds before a single render is abandoned.
    #[arg(long, default_value_t = DEFAULT_RENDER_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Start without asking for confirmation.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "variant")]
    variant: u32,
    #[tabled(rename = "result")]
    result: String,
    #[tabled(rename = "time")]
    time: String,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let defaults = RendererSettings::default();
        let interpreter_args = if !self.interpreter_args.is_empty() {
            self.interpreter_args
        } else if self.renderer == defaults.interpreter {
            defaults.interpreter_args
        } else {
            Vec::new()
        };

        let dispatcher = Dispatcher::new(RendererSettings {
            output_root: self.output_dir,
            interpreter: self.renderer,
            interpreter_args,
            launcher: self.launcher,
            timeout: Duration::from_secs(self.timeout),
        });

        let mut confirm: Box<dyn Confirm> = if self.yes {
            Box::new(AssumeYes)
        } else {
            Box::new(PromptConfirm::stdio())
        };

        let run = dispatcher
            .process_all(confirm.as_mut(), Duration::from_secs(self.pause), print_record)
            .with_context(|| {
                format!(
                    "failed to scan '{}' for variants",
                    dispatcher.settings().output_root.display()
                )
            })?;

        match run {
            DispatchRun::NothingToRender => {
                println!(
                    "{} No variants found in {}.",
                    "✗".red().bold(),
                    dispatcher.settings().output_root.display()
                );
                println!("Run: folio prepare");
            }
            DispatchRun::Declined { found } => {
                println!("Cancelled; {found} variant(s) left unrendered.");
            }
            DispatchRun::Completed(summary) => {
                print_summary(&summary, &dispatcher.settings().output_root)
            }
        }
        Ok(())
    }
}

fn print_record(record: &RenderRecord) {
    let n = record.variant.number;
    match &record.outcome {
        RenderOutcome::Success => println!(
            "{} variant {n} rendered; results in {}",
            "✓".green().bold(),
            record.variant.dir.display()
        ),
        RenderOutcome::Timeout { limit } => println!(
            "{} variant {n} timed out after {}s; the renderer was left running",
            "⏱".yellow().bold(),
            limit.as_secs()
        ),
        RenderOutcome::NonZeroExit { code, diagnostic } => {
            let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
            println!("{} variant {n} failed (exit {code})", "✗".red().bold());
            if !diagnostic.is_empty() {
                for line in diagnostic.lines() {
                    println!("    {line}");
                }
            }
        }
        RenderOutcome::LaunchFailed(err) => {
            println!("{} variant {n} could not start: {err}", "✗".red().bold())
        }
    }
}

fn outcome_label(outcome: &RenderOutcome) -> String {
    match outcome {
        RenderOutcome::Success => "ok".green().to_string(),
        RenderOutcome::Timeout { .. } => "timeout".yellow().to_string(),
        RenderOutcome::NonZeroExit { .. } => "failed".red().to_string(),
        RenderOutcome::LaunchFailed(_) => "not started".red().to_string(),
    }
}

fn print_summary(summary: &RenderSummary, output_root: &Path) {
    let rows: Vec<ResultRow> = summary
        .records
        .iter()
        .map(|r| ResultRow {
            variant: r.variant.number,
            result: outcome_label(&r.outcome),
            time: format!("{:.1}s", r.elapsed.as_secs_f64()),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{table}");

    let total = summary.records.len();
    println!("Succeeded: {}/{total}", summary.succeeded());
    if !summary.all_succeeded() {
        println!("Failed: {}", summary.failed());
        let failed: Vec<String> = summary
            .failed_variants()
            .iter()
            .map(u32::to_string)
            .collect();
        println!("Variants with errors: {}", failed.join(", "));
        return;
    }

    println!("{} All variants rendered.", "✓".green().bold());
    println!("Next:");
    println!(
        "  1. Review the exported documents in {}",
        output_root.join("variant_*").display()
    );
    println!("  2. Pick the strongest variant");
    println!("  3. Open its document for final edits");
}

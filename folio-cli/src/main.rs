//! Folio: magazine layout-variant planner and render dispatcher.
//!
//! # Usage
//!
//! ```text
//! folio prepare [BRIEF] [COUNT] [STYLE] [--config <path>] [--output-dir <dir>] [--seed <n>]
//! folio render [RENDERER] [--launcher <path>] [--output-dir <dir>] [--pause <secs>] [--timeout <secs>] [--yes]
//! folio styles [--config <path>]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `warn`).

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{prepare::PrepareArgs, render::RenderArgs, styles::StylesArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Generate magazine layout variants and render them",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build variant plans from a content brief.
    Prepare(PrepareArgs),

    /// Render every prepared variant with the external publishing application.
    Render(RenderArgs),

    /// List the styles available in the template configuration.
    Styles(StylesArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Prepare(args) => args.run(),
        Commands::Render(args) => args.run(),
        Commands::Styles(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

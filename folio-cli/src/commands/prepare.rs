//! `folio prepare [BRIEF] [COUNT] [STYLE]`: build variant plans from a brief.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use folio_core::config::DEFAULT_CONFIG_PATH;
use folio_core::plan_store::DEFAULT_OUTPUT_DIR;
use folio_core::{ConfigSource, Style, TemplateConfig};
use folio_planner::{GenerationReport, VariantPlanner};

/// Arguments for `folio prepare`.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Content brief (CSV, or TSV by extension) with a `type` column.
    #[arg(default_value = "input/client_brief.csv")]
    pub brief: PathBuf,

    /// Number of variants to build (3-5 recommended).
    #[arg(default_value_t = 5)]
    pub count: u32,

    /// Template style to draw from.
    #[arg(default_value = "fashion")]
    pub style: String,

    /// Template configuration file. The built-in table is used if it is missing.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Directory receiving `variant_<n>/plan.json`.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Seed for template picks, for reproducible plans.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Tabled)]
struct VariantRow {
    #[tabled(rename = "variant")]
    variant: u32,
    #[tabled(rename = "pages")]
    pages: usize,
    #[tabled(rename = "plan")]
    plan: String,
}

impl PrepareArgs {
    pub fn run(self) -> Result<()> {
        let loaded = TemplateConfig::load(&self.config)
            .with_context(|| format!("failed to load template config '{}'", self.config.display()))?;
        if let ConfigSource::Builtin { missing } = &loaded.source {
            println!(
                "{} template config not found at {}; using built-in templates",
                "!".yellow().bold(),
                missing.display()
            );
        }

        let mut planner = match self.seed {
            Some(seed) => VariantPlanner::with_seed(loaded.config, seed),
            None => VariantPlanner::new(loaded.config),
        };

        let style = Style::from(self.style);
        println!("Reading brief: {}", self.brief.display());
        let report = planner
            .generate_all(&self.brief, self.count, &style, &self.output_dir)
            .with_context(|| format!("could not build variants from '{}'", self.brief.display()))?;

        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &GenerationReport) {
    println!(
        "{} Loaded {} brief rows, built {} variant(s) in style '{}'",
        "✓".green().bold(),
        report.rows,
        report.variants.len(),
        report.style,
    );

    if report.variants.is_empty() {
        return;
    }

    let rows: Vec<VariantRow> = report
        .variants
        .iter()
        .map(|v| VariantRow {
            variant: v.number,
            pages: v.pages,
            plan: v.path.display().to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{table}");

    if report.variants.iter().any(|v| v.pages == 0) {
        println!(
            "{} some variants have no pages; check that style '{}' has templates",
            "!".yellow().bold(),
            report.style
        );
    }
    println!("Next step: folio render");
}

//! `folio styles`: show which styles the template table can serve.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use folio_core::config::DEFAULT_CONFIG_PATH;
use folio_core::{ConfigSource, TemplateConfig, TemplateKind};

/// Arguments for `folio styles`.
#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Template configuration file. The built-in table is used if it is missing.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Tabled)]
struct StyleRow {
    #[tabled(rename = "style")]
    style: String,
    #[tabled(rename = "covers")]
    covers: usize,
    #[tabled(rename = "spreads")]
    spreads: usize,
}

impl StylesArgs {
    pub fn run(self) -> Result<()> {
        let loaded = TemplateConfig::load(&self.config)
            .with_context(|| format!("failed to load template config '{}'", self.config.display()))?;
        match &loaded.source {
            ConfigSource::File(path) => println!("Templates from {}", path.display()),
            ConfigSource::Builtin { missing } => {
                println!("Built-in templates ({} not found)", missing.display())
            }
        }

        let config = &loaded.config;
        let rows: Vec<StyleRow> = config
            .styles()
            .into_iter()
            .map(|style| StyleRow {
                covers: config.bucket(TemplateKind::Cover, &style).len(),
                spreads: config.bucket(TemplateKind::Spread, &style).len(),
                style: style.0,
            })
            .collect();

        if rows.is_empty() {
            println!("No styles configured.");
            return Ok(());
        }

        let mut table = Table::new(rows);
        table.with(TableStyle::rounded());
        println!("{table}");
        Ok(())
    }
}

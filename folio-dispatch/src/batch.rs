//! Confirmed, strictly sequential batch rendering.

use std::time::{Duration, Instant};

use folio_core::VariantRef;

use crate::confirm::Confirm;
use crate::error::DispatchError;
use crate::render::{Dispatcher, RenderOutcome};

/// One attempted variant.
#[derive(Debug)]
pub struct RenderRecord {
    pub variant: VariantRef,
    pub outcome: RenderOutcome,
    pub elapsed: Duration,
}

/// Per-variant results of a completed batch, in render order.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub records: Vec<RenderRecord>,
}

impl RenderSummary {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    /// Variant numbers whose render did not succeed.
    pub fn failed_variants(&self) -> Vec<u32> {
        self.records
            .iter()
            .filter(|r| !r.outcome.is_success())
            .map(|r| r.variant.number)
            .collect()
    }
}

/// How a call to [`Dispatcher::process_all`] ended.
#[derive(Debug)]
pub enum DispatchRun {
    /// No `variant_<n>/plan.json` was found.
    NothingToRender,
    /// The confirmation was declined; nothing was rendered.
    Declined { found: usize },
    Completed(RenderSummary),
}

impl Dispatcher {
    /// Render every discovered variant in ascending order.
    ///
    /// Asks `confirm` once before starting. Sleeps `pause` between consecutive
    /// renders (not after the last) so the external application can settle.
    /// `on_result` is called after each render. A failed variant never stops
    /// the batch.
    pub fn process_all<F>(
        &self,
        confirm: &mut dyn Confirm,
        pause: Duration,
        mut on_result: F,
    ) -> Result<DispatchRun, DispatchError>
    where
        F: FnMut(&RenderRecord),
    {
        let variants = self.discover_variants()?;
        if variants.is_empty() {
            return Ok(DispatchRun::NothingToRender);
        }

        let prompt = format!(
            "Found {} variant(s). The rendering application will be launched automatically. Continue?",
            variants.len()
        );
        if !confirm.confirm(&prompt) {
            tracing::info!(found = variants.len(), "render batch declined");
            return Ok(DispatchRun::Declined {
                found: variants.len(),
            });
        }

        let total = variants.len();
        let mut summary = RenderSummary::default();
        for (i, variant) in variants.into_iter().enumerate() {
            tracing::info!(variant = variant.number, plan = %variant.plan.display(), "rendering");
            let started = Instant::now();
            let outcome = self.render_variant(&variant);
            let record = RenderRecord {
                variant,
                outcome,
                elapsed: started.elapsed(),
            };
            log_outcome(&record);
            on_result(&record);
            summary.records.push(record);

            if i + 1 < total && !pause.is_zero() {
                std::thread::sleep(pause);
            }
        }

        Ok(DispatchRun::Completed(summary))
    }
}

fn log_outcome(record: &RenderRecord) {
    let number = record.variant.number;
    match &record.outcome {
        RenderOutcome::Success => tracing::info!(variant = number, "render succeeded"),
        RenderOutcome::Timeout { limit } => {
            tracing::error!(variant = number, ?limit, "render timed out")
        }
        RenderOutcome::NonZeroExit { code, diagnostic } => {
            tracing::error!(variant = number, ?code, %diagnostic, "renderer failed")
        }
        RenderOutcome::LaunchFailed(err) => {
            tracing::error!(variant = number, error = %err, "renderer could not start")
        }
    }
}

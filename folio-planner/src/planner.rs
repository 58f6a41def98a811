//! Template selection, page binding and variant ordering.
//!
//! Two random sources are involved and they are kept apart:
//!
//! - template picks draw from the planner's own RNG, seeded from entropy or
//!   from an explicit seed via [`VariantPlanner::with_seed`];
//! - spread order draws from a fresh RNG seeded with the variant number for
//!   each shuffle, so variant `n` always gets the same order for the same brief.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use folio_core::{
    BriefRow, CoverData, PageData, PagePlan, RowKind, SpreadData, SpreadLeft, SpreadRight, Style,
    TemplateConfig, TemplateEntry, TemplateKind, VariantPlan,
};

/// Builds [`VariantPlan`]s from brief rows and an immutable template table.
#[derive(Debug, Clone)]
pub struct VariantPlanner {
    config: TemplateConfig,
    rng: ChaCha8Rng,
}

impl VariantPlanner {
    /// Planner whose template picks differ from run to run.
    pub fn new(config: TemplateConfig) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Planner whose template picks are reproducible for a given `seed`.
    pub fn with_seed(config: TemplateConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick one template uniformly from the (`kind`, `style`) bucket.
    ///
    /// Returns `None` when the bucket is missing or empty; the caller skips
    /// the page.
    pub fn select_template(&mut self, kind: TemplateKind, style: &Style) -> Option<&TemplateEntry> {
        let picked = self.config.bucket(kind, style).choose(&mut self.rng);
        if picked.is_none() {
            tracing::warn!(kind = %kind, style = %style, "no templates registered, skipping page");
        }
        picked
    }

    /// Bind a cover row to a cover template.
    pub fn build_cover_page(&mut self, row: &BriefRow, style: &Style) -> Option<PagePlan> {
        let template = self.select_template(TemplateKind::Cover, style)?;
        Some(PagePlan {
            template: TemplateKind::Cover.template_name(style),
            template_file: template.file.clone(),
            placement: template.placement.clone(),
            data: PageData::Cover(CoverData {
                image1: row.photo_path.clone(),
                title: row.title.clone(),
                subtitle: row.subtitle.clone(),
            }),
        })
    }

    /// Bind a spread row to a spread template.
    ///
    /// `photo_path` is split on `|` into left and right images; a single
    /// photo is used on both sides. `facts` is split on `|` into a list.
    pub fn build_spread_page(&mut self, row: &BriefRow, style: &Style) -> Option<PagePlan> {
        let template = self.select_template(TemplateKind::Spread, style)?;
        let (left_photo, right_photo) = split_photos(&row.photo_path);
        Some(PagePlan {
            template: TemplateKind::Spread.template_name(style),
            template_file: template.file.clone(),
            placement: template.placement.clone(),
            data: PageData::Spread(SpreadData {
                left: SpreadLeft {
                    image1: left_photo,
                    title: row.title.clone(),
                    quote: row.quote.clone(),
                },
                right: SpreadRight {
                    image1: right_photo,
                    name: row.name.clone(),
                    bio: row.body_text.clone(),
                    facts: split_facts(&row.facts),
                },
            }),
        })
    }

    /// Build variant `number` of the magazine.
    ///
    /// The first `cover` row (if any) becomes page one; later cover rows are
    /// ignored. `spread` rows follow, in brief order for variant 1 and
    /// shuffled by [`shuffle_for_variant`] otherwise. Rows whose template
    /// bucket is empty are left out.
    pub fn build_variant(&mut self, rows: &[BriefRow], number: u32, style: &Style) -> VariantPlan {
        let mut plan = VariantPlan::new(number, style.clone());

        if let Some(cover_row) = rows.iter().find(|r| r.kind == RowKind::Cover) {
            plan.pages.extend(self.build_cover_page(cover_row, style));
        }

        let mut spreads: Vec<&BriefRow> = rows.iter().filter(|r| r.kind == RowKind::Spread).collect();
        shuffle_for_variant(&mut spreads, number);

        for row in spreads {
            plan.pages.extend(self.build_spread_page(row, style));
        }

        tracing::debug!(variant = number, pages = plan.pages.len(), "built variant");
        plan
    }
}

/// Reorder `items` for variant `number`.
///
/// Variant 1 (and 0) keeps the original order. Higher variants shuffle with
/// an RNG seeded by the variant number and dropped afterwards, so the
/// permutation depends only on `number` and the length of `items`.
pub fn shuffle_for_variant<T>(items: &mut [T], number: u32) {
    if number <= 1 {
        return;
    }
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(number));
    items.shuffle(&mut rng);
}

fn split_photos(field: &str) -> (String, String) {
    let mut parts = field.split('|').map(str::trim);
    let left = parts.next().unwrap_or_default().to_string();
    let right = parts.next().map(str::to_string).unwrap_or_else(|| left.clone());
    (left, right)
}

/// Split a `|`-separated facts cell. Pieces are trimmed and empty pieces are
/// dropped, so `a||b` yields two facts and no blank line in the rendered list.
fn split_facts(field: &str) -> Vec<String> {
    field
        .split('|')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

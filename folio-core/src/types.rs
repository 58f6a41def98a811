//! Domain types for briefs, templates and variant plans.
//!
//! Everything that crosses a file boundary is serde-serializable. The JSON
//! shape of [`VariantPlan`] is the contract with the external renderer.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A named visual theme selecting which template bucket pages draw from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Style(pub String);

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Style {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Style {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The `type` column of a brief row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Cover,
    Spread,
    /// Anything else in the `type` column; ignored by the planner.
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::Cover => write!(f, "cover"),
            RowKind::Spread => write!(f, "spread"),
            RowKind::Other => write!(f, "other"),
        }
    }
}

/// Which half of the template table a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Cover,
    Spread,
}

impl TemplateKind {
    /// Key of this kind's section in the template configuration file.
    pub fn config_key(self) -> &'static str {
        match self {
            TemplateKind::Cover => "covers",
            TemplateKind::Spread => "spreads",
        }
    }

    /// Value written to a page's `template` field, e.g. `spread_fashion`.
    pub fn template_name(self, style: &Style) -> String {
        match self {
            TemplateKind::Cover => format!("cover_{style}"),
            TemplateKind::Spread => format!("spread_{style}"),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Where a template lives inside its source document.
///
/// Serialized flattened into the parent object as either `"page": n` or
/// `"pages": [a, b]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Page(u32),
    Pages(Vec<u32>),
}

// ---------------------------------------------------------------------------
// Brief and template table
// ---------------------------------------------------------------------------

/// One content item from the brief. Missing columns are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefRow {
    #[serde(rename = "type")]
    pub kind: RowKind,
    pub title: String,
    pub subtitle: String,
    /// One path, or two separated by `|` for spreads.
    pub photo_path: String,
    pub quote: String,
    pub name: String,
    pub body_text: String,
    /// `|`-separated list of short facts.
    pub facts: String,
}

/// A template registered under a (kind, style) bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub file: String,
    #[serde(flatten)]
    pub placement: Placement,
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

/// Data slots of a cover template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverData {
    pub image1: String,
    pub title: String,
    pub subtitle: String,
}

/// Left-hand page of a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadLeft {
    pub image1: String,
    pub title: String,
    pub quote: String,
}

/// Right-hand page of a spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadRight {
    pub image1: String,
    pub name: String,
    pub bio: String,
    #[serde(default)]
    pub facts: Vec<String>,
}

/// Data slots of a spread template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadData {
    pub left: SpreadLeft,
    pub right: SpreadRight,
}

/// Content bound into a page's placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageData {
    Spread(SpreadData),
    Cover(CoverData),
}

/// One rendered unit of a variant: a template plus the content bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePlan {
    pub template: String,
    pub template_file: String,
    #[serde(flatten)]
    pub placement: Placement,
    pub data: PageData,
}

impl PagePlan {
    pub fn is_cover(&self) -> bool {
        matches!(self.data, PageData::Cover(_))
    }
}

/// A complete magazine layout candidate, as persisted to `plan.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPlan {
    pub project_name: String,
    pub style: Style,
    pub variant: u32,
    #[serde(default)]
    pub pages: Vec<PagePlan>,
}

impl VariantPlan {
    /// An empty plan for variant `number`.
    pub fn new(number: u32, style: Style) -> Self {
        Self {
            project_name: format!("magazine_variant_{number}"),
            style,
            variant: number,
            pages: Vec::new(),
        }
    }
}

/// A variant directory found on disk by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRef {
    pub number: u32,
    pub dir: PathBuf,
    pub plan: PathBuf,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

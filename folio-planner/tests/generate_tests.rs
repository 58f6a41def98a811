//! End-to-end generation tests for `folio-planner`.
//!
//! Each test gets an isolated `TempDir` holding the brief and the output root.

use std::fs;
use std::path::PathBuf;

use folio_core::plan_store::{list_variants_at, load_plan};
use folio_core::{BriefError, PageData, Style, TemplateConfig};
use folio_planner::{PlannerError, VariantPlanner};
use rstest::rstest;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const BRIEF: &str = "\
type,title,subtitle,photo_path,quote,name,body_text,facts
cover,Spring Issue,Fresh faces,cover.jpg,,,,
spread,One,,\"one_l.jpg|one_r.jpg\",q1,Anna,bio one,a|b
spread,Two,,two.jpg,q2,Bohdan,bio two,
spread,Three,,three.jpg,q3,Chrystia,bio three,c
spread,Four,,four.jpg,q4,Dmytro,bio four,
spread,Five,,five.jpg,q5,Olena,bio five,
";

fn write_brief(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("client_brief.csv");
    fs::write(&path, content).expect("write brief");
    path
}

fn spread_titles(pages: &[folio_core::PagePlan]) -> Vec<String> {
    pages
        .iter()
        .filter_map(|p| match &p.data {
            PageData::Spread(s) => Some(s.left.title.clone()),
            PageData::Cover(_) => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn writes_one_plan_per_variant() {
    let dir = TempDir::new().expect("tempdir");
    let brief = write_brief(&dir, BRIEF);
    let output = dir.path().join("output");

    let mut planner = VariantPlanner::with_seed(TemplateConfig::builtin(), 1);
    let report = planner
        .generate_all(&brief, 3, &Style::from("fashion"), &output)
        .expect("generate");

    assert_eq!(report.rows, 6);
    assert_eq!(report.variants.len(), 3);
    for (i, variant) in report.variants.iter().enumerate() {
        assert_eq!(variant.number, i as u32 + 1);
        assert_eq!(variant.pages, 6);
        assert!(variant.path.ends_with(format!("variant_{}/plan.json", i + 1)));
    }
    assert_eq!(list_variants_at(&output).expect("list").len(), 3);
}

#[test]
fn variant_one_follows_brief_order() {
    let dir = TempDir::new().expect("tempdir");
    let brief = write_brief(&dir, BRIEF);
    let output = dir.path().join("output");

    VariantPlanner::with_seed(TemplateConfig::builtin(), 1)
        .generate_all(&brief, 1, &Style::from("fashion"), &output)
        .expect("generate");

    let plan = load_plan(&output.join("variant_1").join("plan.json")).expect("load");
    assert!(plan.pages[0].is_cover());
    assert_eq!(
        spread_titles(&plan.pages),
        vec!["One", "Two", "Three", "Four", "Five"]
    );
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(5)]
fn spread_order_is_reproducible(#[case] number: u32) {
    let dir = TempDir::new().expect("tempdir");
    let brief = write_brief(&dir, BRIEF);

    let run = |seed: u64, out: &str| {
        let output = dir.path().join(out);
        VariantPlanner::with_seed(TemplateConfig::builtin(), seed)
            .generate_all(&brief, number, &Style::from("fashion"), &output)
            .expect("generate");
        load_plan(&output.join(format!("variant_{number}")).join("plan.json")).expect("load")
    };

    // Different template seeds must not change the spread order.
    let first = run(11, "first");
    let second = run(42, "second");
    assert_eq!(spread_titles(&first.pages), spread_titles(&second.pages));
    assert!(first.pages[0].is_cover());
}

#[test]
fn minimal_style_uses_its_single_spread_template() {
    let dir = TempDir::new().expect("tempdir");
    let brief = write_brief(&dir, BRIEF);
    let output = dir.path().join("output");

    VariantPlanner::new(TemplateConfig::builtin())
        .generate_all(&brief, 2, &Style::from("minimal"), &output)
        .expect("generate");

    let plan = load_plan(&output.join("variant_2").join("plan.json")).expect("load");
    assert_eq!(plan.style, Style::from("minimal"));
    for page in plan.pages.iter().skip(1) {
        assert_eq!(page.template, "spread_minimal");
        assert_eq!(page.placement, folio_core::Placement::Pages(vec![2, 3]));
    }
}

#[test]
fn unknown_style_writes_empty_plans() {
    let dir = TempDir::new().expect("tempdir");
    let brief = write_brief(&dir, BRIEF);
    let output = dir.path().join("output");

    let report = VariantPlanner::new(TemplateConfig::builtin())
        .generate_all(&brief, 3, &Style::from("family"), &output)
        .expect("unknown style is not fatal");
    assert!(report.variants.iter().all(|v| v.pages == 0));
}

#[test]
fn cover_only_brief() {
    let dir = TempDir::new().expect("tempdir");
    let brief = write_brief(&dir, "type,title\ncover,Lonely\n");
    let output = dir.path().join("output");

    let report = VariantPlanner::new(TemplateConfig::builtin())
        .generate_all(&brief, 3, &Style::from("fashion"), &output)
        .expect("generate");
    assert!(report.variants.iter().all(|v| v.pages == 1));
}

// ---------------------------------------------------------------------------
// Aborts
// ---------------------------------------------------------------------------

#[test]
fn empty_brief_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let brief = write_brief(&dir, "type,title\n");
    let output = dir.path().join("output");

    let err = VariantPlanner::new(TemplateConfig::builtin())
        .generate_all(&brief, 3, &Style::from("fashion"), &output)
        .unwrap_err();
    assert!(matches!(err, PlannerError::EmptyBrief { .. }));
    assert!(!output.exists());
}

#[test]
fn missing_brief_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("output");

    let err = VariantPlanner::new(TemplateConfig::builtin())
        .generate_all(
            &dir.path().join("absent.csv"),
            3,
            &Style::from("fashion"),
            &output,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::Brief(BriefError::NotFound { .. })
    ));
    assert!(!output.exists());
}

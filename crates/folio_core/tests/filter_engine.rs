mod common;

use common::{project, sample_store};
use folio_core::{apply, apply_with_mask, FilterCriteria, Project, YearLabel};
use std::collections::BTreeSet;

fn fixture() -> Vec<Project> {
    vec![
        project("a", 2023, "web", &["react"], "Alpha", "x"),
        project("b", 2022, "cli", &["go"], "Beta", "y"),
        project("c", 2023, "cli", &["rust", "go"], "Gamma", "A fast Beta tool"),
        project("d", 2021, "web", &["react", "rust"], "Delta", "dashboard"),
    ]
}

fn ids(outcome: &folio_core::FilterOutcome) -> Vec<&str> {
    outcome.visible_ids.iter().map(String::as_str).collect()
}

#[test]
fn empty_criteria_returns_everything_in_order() {
    let projects = fixture();
    let outcome = apply(&projects, &FilterCriteria::none());
    assert_eq!(ids(&outcome), vec!["a", "b", "c", "d"]);
    assert_eq!(outcome.visible_count, 4);
}

#[test]
fn year_filter_matches_numeric_year_by_display_form() {
    let store = sample_store();
    let outcome = apply(store.projects(), &FilterCriteria::none().with_year("2023"));
    assert_eq!(ids(&outcome), vec!["a"]);
    assert_eq!(outcome.visible_count, 1);
}

#[test]
fn year_filter_selects_exactly_matching_projects() {
    let projects = fixture();
    let outcome = apply(&projects, &FilterCriteria::none().with_year("2023"));
    assert_eq!(ids(&outcome), vec!["a", "c"]);

    let none = apply(&projects, &FilterCriteria::none().with_year("1999"));
    assert!(none.visible_ids.is_empty());
    assert_eq!(none.visible_count, 0);
}

#[test]
fn text_year_labels_compare_as_stored() {
    let mut ranged = project("r", 0, "web", &[], "Ranged", "");
    ranged.year = YearLabel::Text("2021-2022".to_string());
    let outcome = apply(&[ranged], &FilterCriteria::none().with_year("2021-2022"));
    assert_eq!(outcome.visible_count, 1);
}

#[test]
fn tech_filter_is_exact_and_case_sensitive() {
    let projects = fixture();
    let outcome = apply(&projects, &FilterCriteria::none().with_tech("rust"));
    assert_eq!(ids(&outcome), vec!["c", "d"]);

    let cased = apply(&projects, &FilterCriteria::none().with_tech("Rust"));
    assert_eq!(cased.visible_count, 0);
}

#[test]
fn search_is_case_insensitive_over_title_and_description() {
    let store = sample_store();
    let outcome = apply(store.projects(), &FilterCriteria::none().with_search("BET"));
    assert_eq!(ids(&outcome), vec!["b"]);

    let projects = fixture();
    let outcome = apply(&projects, &FilterCriteria::none().with_search("  beta "));
    assert_eq!(ids(&outcome), vec!["b", "c"]);
}

#[test]
fn combined_criteria_equal_intersection_of_single_criteria() {
    let projects = fixture();
    let singles = [
        FilterCriteria::none().with_kind("cli"),
        FilterCriteria::none().with_tech("go"),
        FilterCriteria::none().with_year("2023"),
    ];
    let combined = FilterCriteria::none()
        .with_kind("cli")
        .with_tech("go")
        .with_year("2023");

    let mut expected: Option<BTreeSet<String>> = None;
    for criteria in &singles {
        let outcome = apply(&projects, criteria);
        let visible: BTreeSet<String> = outcome.visible_ids.into_iter().collect();
        expected = Some(match expected {
            None => visible,
            Some(acc) => acc.intersection(&visible).cloned().collect(),
        });
    }

    let outcome = apply(&projects, &combined);
    let actual: BTreeSet<String> = outcome.visible_ids.iter().cloned().collect();
    assert_eq!(Some(actual), expected);
    assert_eq!(ids(&outcome), vec!["c"]);
}

#[test]
fn mask_is_index_aligned_with_input() {
    let projects = fixture();
    let mask = apply_with_mask(&projects, &FilterCriteria::none().with_kind("web"));
    assert_eq!(mask, vec![true, false, false, true]);
}

#[test]
fn malformed_json_criteria_degrade_to_widest_match() {
    let projects = fixture();
    let criteria = FilterCriteria::from_json(&serde_json::json!({
        "year": 2023,
        "searchQuery": { "text": "alpha" }
    }));
    assert_eq!(apply(&projects, &criteria).visible_count, projects.len());
}

#[test]
fn identical_projects_are_neither_dropped_nor_duplicated() {
    let twin_a = project("t1", 2020, "web", &["go"], "Twin", "same");
    let twin_b = project("t2", 2020, "web", &["go"], "Twin", "same");
    let outcome = apply(&[twin_a, twin_b], &FilterCriteria::none().with_search("twin"));
    assert_eq!(ids(&outcome), vec!["t1", "t2"]);
}

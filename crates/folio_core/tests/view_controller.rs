mod common;

use common::{sample_document, sample_store};
use folio_core::{
    render_state, route_from_path, FileSource, FilterCriteria, InlineSource, PageState, Route,
    ViewController, YearLabel,
};

#[test]
fn initialization_derives_options_and_shows_all() {
    let view = ViewController::new(sample_store());

    assert_eq!(
        view.options().years,
        vec![YearLabel::Number(2023), YearLabel::Number(2022)]
    );
    assert_eq!(view.options().technologies, vec!["go", "react"]);
    assert_eq!(view.options().types, vec!["cli", "web"]);
    assert_eq!(view.count_label(), "(2 of 2)");
    assert!(view.criteria().is_empty());
}

#[test]
fn criteria_changed_filters_and_formats_count() {
    let mut view = ViewController::new(sample_store());

    let update = view.criteria_changed(FilterCriteria::none().with_year("2023"));
    assert_eq!(update.visible_ids, vec!["a".to_string()]);
    assert_eq!(update.visible_count, 1);
    assert_eq!(update.total, 2);
    assert_eq!(update.count_label, "(1 of 2)");
    assert!(view.is_visible("a"));
    assert!(!view.is_visible("b"));
    assert_eq!(view.render_visible_cards().matches("<article").count(), 1);

    let update = view.criteria_changed(FilterCriteria::none().with_search("BET"));
    assert_eq!(update.visible_ids, vec!["b".to_string()]);
}

#[test]
fn load_failure_becomes_error_state() {
    let result = ViewController::load(&FileSource::new("/missing/projects.json"));
    let state = result.unwrap_err();
    match &state {
        PageState::LoadFailed(message) => assert!(message.contains("/missing/projects.json")),
        other => panic!("unexpected state: {other:?}"),
    }
    let html = render_state(&state, &[]);
    assert!(html.contains("Failed to load projects"));
}

#[test]
fn load_success_from_source() {
    let view = ViewController::load(&InlineSource::new(sample_document().to_string())).unwrap();
    assert_eq!(view.store().len(), 2);
}

#[test]
fn routing_resolves_detail_and_not_found() {
    let view = ViewController::new(sample_store());

    let state = view.resolve(&route_from_path("/my-portfolio/projects/a/"));
    match state {
        PageState::Detail(project) => assert_eq!(project.id, "a"),
        other => panic!("unexpected state: {other:?}"),
    }

    let missing = view.resolve(&Route::Project("missing".to_string()));
    assert_eq!(missing, PageState::NotFound);
    assert!(render_state(&missing, view.store().projects()).contains("PROJECT VANISHED"));

    assert_eq!(view.resolve(&route_from_path("/about")), PageState::NotFound);
}

mod common;

use common::sample_document;
use folio_core::{build_site_with_year, BuildError, LoadError, SiteLayout};
use std::fs;
use std::path::Path;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn seed_source_tree(root: &Path, document: &str) {
    write(&root.join("src/data/projects.json"), document);
    write(&root.join("public/favicon.svg"), "<svg/>");
    write(&root.join("public/img/a1.png"), "png");
    write(&root.join("src/styles/styles.css"), "body {}");
    write(&root.join("src/styles/notes.txt"), "not css");
    write(&root.join("src/scripts/modules/filters.js"), "export {}");
    write(&root.join("src/scripts/site.js"), "import './modules/filters.js';");
    write(&root.join("src/scripts/project-detail.js"), "export {}");
}

#[test]
fn build_writes_pages_and_copies_assets() {
    let root = tempfile::tempdir().unwrap();
    seed_source_tree(root.path(), &sample_document().to_string());
    let layout = SiteLayout::rooted(root.path()).with_base_path("/folio");

    let report = build_site_with_year(&layout, 2026).unwrap();

    let dist = root.path().join("dist");
    assert_eq!(report.projects, 2);
    assert_eq!(report.pages_written, 4);
    assert_eq!(report.assets_copied, 7);
    assert_eq!(report.assets_skipped, 0);

    assert!(dist.join("favicon.svg").is_file());
    assert!(dist.join("img/a1.png").is_file());
    assert!(dist.join("css/styles.css").is_file());
    assert!(!dist.join("css/notes.txt").exists());
    assert!(dist.join("js/modules/filters.js").is_file());
    assert!(dist.join("projects.json").is_file());

    let index = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(index.contains("<title>Ada Lovelace - Portfolio</title>"));
    assert!(index.contains(r#"href="/folio/css/styles.css""#));
    assert!(index.contains(r#"<option value="2023">2023</option>"#));
    assert!(index.contains(r#"<script type="module" src="/folio/js/site.js"></script>"#));

    let detail = fs::read_to_string(dist.join("projects/a/index.html")).unwrap();
    assert!(detail.contains("<title>Alpha - Ada Lovelace</title>"));
    assert!(detail.contains(r#"<span id="yearNow">2026</span>"#));
    assert!(detail.contains(r#"src="/folio/js/project-detail.js""#));
    assert!(detail.contains("mermaid.initialize"));

    let no_diagram = fs::read_to_string(dist.join("projects/b/index.html")).unwrap();
    assert!(no_diagram.contains(r#"src="/folio/js/project-detail.js""#));
    assert!(!no_diagram.contains("mermaid.initialize"));

    let catch_all = fs::read_to_string(dist.join("projects/index.html")).unwrap();
    assert!(catch_all.contains("PROJECT VANISHED"));
}

#[test]
fn build_without_list_script_omits_filter_controls() {
    let root = tempfile::tempdir().unwrap();
    write(
        &root.path().join("src/data/projects.json"),
        &sample_document().to_string(),
    );

    let report = build_site_with_year(&SiteLayout::rooted(root.path()), 2026).unwrap();
    assert_eq!(report.pages_written, 4);

    let dist = root.path().join("dist");
    let index = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(index.contains("(2 total)"));
    assert!(!index.contains("yearFilter"));
    assert!(!index.contains("<script"));

    let detail = fs::read_to_string(dist.join("projects/a/index.html")).unwrap();
    assert!(!detail.contains("project-detail.js"));
    assert!(detail.contains("mermaid.initialize"));
}

#[test]
fn build_into_existing_output_keeps_unrelated_files() {
    let root = tempfile::tempdir().unwrap();
    seed_source_tree(root.path(), &sample_document().to_string());
    write(&root.path().join("dist/CNAME"), "folio.example");

    build_site_with_year(&SiteLayout::rooted(root.path()), 2026).unwrap();
    assert!(root.path().join("dist/CNAME").is_file());
}

#[test]
fn build_fails_without_data_document() {
    let root = tempfile::tempdir().unwrap();
    let err = build_site_with_year(&SiteLayout::rooted(root.path()), 2026).unwrap_err();
    assert!(matches!(err, BuildError::Load(LoadError::Transport { .. })));
}

#[test]
fn build_rejects_ids_that_escape_the_output_tree() {
    for bad_id in ["../evil", "index.html", "INDEX.HTML"] {
        let root = tempfile::tempdir().unwrap();
        let document = serde_json::json!({ "projects": [{ "id": "ok" }, { "id": bad_id }] });
        seed_source_tree(root.path(), &document.to_string());

        let err = build_site_with_year(&SiteLayout::rooted(root.path()), 2026).unwrap_err();
        assert!(matches!(err, BuildError::InvalidProjectId(ref id) if id == bad_id));

        let dist = root.path().join("dist");
        assert!(!dist.join("index.html").exists());
        assert!(!dist.join("projects").exists());
    }
}

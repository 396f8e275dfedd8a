//! Full HTML documents wrapping the fragment templates.
//!
//! # Responsibility
//! - Produce the list page, detail pages and the not-found catch-all.
//! - Keep asset and script paths relative to the configured base path.
//! - Load only behaviour the build actually ships.
//!
//! # Invariants
//! - Page rendering is pure; the footer year and script availability are
//!   passed in by the caller.
//! - Filter controls are rendered only together with the list script that
//!   drives them.

use crate::model::project::{Project, SiteConfig};
use crate::render::html::{escape_attr, escape_text};
use crate::render::templates::{
    renderable_diagram, render_cards, render_detail, render_filter_options, render_not_found,
};
use crate::store::project_store::FilterOptions;

/// List page entry script, relative to `<dist>/js`.
pub const LIST_SCRIPT: &str = "site.js";
/// Detail and catch-all page entry script, relative to `<dist>/js`.
pub const DETAIL_SCRIPT: &str = "project-detail.js";

const MERMAID_MODULE_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs";
const DETAIL_OG_PREFIX: &str = "[WebApp]";

/// Entry scripts available under the output `js/` directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageScripts {
    /// [`LIST_SCRIPT`] is shipped.
    pub list: bool,
    /// [`DETAIL_SCRIPT`] is shipped.
    pub detail: bool,
}

/// Inputs shared by every page of one build.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub site: &'a SiteConfig,
    /// URL prefix for assets and links, `""` for a root deployment.
    pub base_path: &'a str,
    /// Year printed in the footer.
    pub year_now: i32,
    pub scripts: PageScripts,
}

impl PageContext<'_> {
    fn base(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }

    fn script_tag(&self, name: &str) -> String {
        format!(
            r#"<script type="module" src="{}/js/{}"></script>
"#,
            escape_attr(self.base()),
            escape_attr(name)
        )
    }
}

/// Home page with every card, plus the filter controls when the list script
/// is shipped.
pub fn render_index_page(context: &PageContext<'_>, projects: &[Project]) -> String {
    let total = projects.len();
    let controls = if context.scripts.list {
        render_filter_controls(projects)
    } else {
        format!(
            r#"<h2 class="projects-title">Projects <span class="filters-count" id="projectCount">({total} total)</span></h2>
"#
        )
    };
    let body = format!(
        r#"<header class="site-header">
  <h1><span class="header-icon">👨‍💻</span><span class="header-name">{name}</span></h1>
  <p class="header-subtitle">{tagline}</p>
</header>
{controls}<section id="listView" class="cards">
{cards}</section>
"#,
        name = escape_text(context.site.site_name()),
        tagline = escape_text(context.site.tagline()),
        cards = render_cards(projects),
    );
    let scripts = if context.scripts.list {
        context.script_tag(LIST_SCRIPT)
    } else {
        String::new()
    };
    let title = format!("{} - Portfolio", context.site.site_name());
    render_document(context, &title, &title, &body, &scripts)
}

fn render_filter_controls(projects: &[Project]) -> String {
    let options = render_filter_options(&FilterOptions::from_projects(projects));
    format!(
        r#"<section class="filters">
  <h2 class="filters-title">🔍 Filter Projects <span class="filters-count" id="projectCount">({total} total)</span></h2>
  <select id="yearFilter">{years}</select>
  <select id="techFilter">{technologies}</select>
  <select id="typeFilter">{types}</select>
  <input id="searchInput" type="search" placeholder="Search projects..." />
</section>
"#,
        total = projects.len(),
        years = options.years,
        technologies = options.technologies,
        types = options.types,
    )
}

/// Detail page for one project.
///
/// Emits the diagram loader only when the project has a diagram to render.
pub fn render_detail_page(context: &PageContext<'_>, project: &Project) -> String {
    let body = format!(
        r#"<section id="projectDetail" class="project-detail">
{}</section>
"#,
        render_detail(project)
    );
    let mut scripts = detail_scripts(context);
    if renderable_diagram(&project.details).is_some() {
        scripts.push_str(&format!(
            r#"<script type="module">import mermaid from "{MERMAID_MODULE_URL}"; mermaid.initialize({{ startOnLoad: true }});</script>
"#
        ));
    }
    let title = format!("{} - {}", project.title, context.site.site_name());
    let og_title = format!("{DETAIL_OG_PREFIX} {}", project.title);
    render_document(context, &title, &og_title, &body, &scripts)
}

/// Catch-all page for unknown project ids.
pub fn render_not_found_page(context: &PageContext<'_>) -> String {
    let body = format!(
        r#"<section id="projectDetail" class="project-detail">
{}</section>
"#,
        render_not_found()
    );
    let title = format!("Project not found - {}", context.site.site_name());
    render_document(context, &title, &title, &body, &detail_scripts(context))
}

fn detail_scripts(context: &PageContext<'_>) -> String {
    if context.scripts.detail {
        context.script_tag(DETAIL_SCRIPT)
    } else {
        String::new()
    }
}

fn render_document(
    context: &PageContext<'_>,
    title: &str,
    og_title: &str,
    body: &str,
    scripts: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta property="og:title" content="{og_title}" />
  <title>{title}</title>
  <link rel="stylesheet" href="{base}/css/styles.css" />
</head>
<body>
<main class="container">
{body}</main>
<footer class="site-footer">© <span id="yearNow">{year}</span> {name}</footer>
{scripts}</body>
</html>
"#,
        og_title = escape_attr(og_title),
        title = escape_text(title),
        base = escape_attr(context.base()),
        year = context.year_now,
        name = escape_text(context.site.site_name()),
    )
}

//! Fragment templates for cards, detail pages and page states.
//!
//! # Responsibility
//! - Map typed projects into HTML fragments.
//! - Suppress each optional detail section independently when absent.
//!
//! # Invariants
//! - Every function is pure: same input, same output, no I/O.
//! - Rendering never fails; missing optional content omits its section.
//! - All project text is escaped before it reaches markup.

use crate::model::project::{Diagram, GiscusConfig, Project, ProjectDetails, ProjectLinks};
use crate::render::badges::{
    tech_badges, type_badge, type_badge_detail, year_badge, year_badge_detail, BadgeSize,
};
use crate::render::html::{escape_attr, escape_text};
use crate::store::project_store::FilterOptions;

const GISCUS_CLIENT_URL: &str = "https://giscus.app/client.js";

const GITHUB_ICON_PATH: &str = "M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z";
const DEMO_ICON_PATH: &str =
    "M8 0C3.58 0 0 3.58 0 8s3.58 8 8 8 8-3.58 8-8-3.58-8-8-8zm3.5 11.5l-3.5-2.5-3.5 2.5V4h7v7.5z";

/// List-view card for one project.
pub fn render_card(project: &Project) -> String {
    let url = escape_attr(&project.url);
    format!(
        r#"<article class="card" data-id="{id}">
  <div class="card-icon">{icon}</div>
  <h3><a href="{url}">{title}</a></h3>
  <div class="card-badges">{year_badge}{type_badge}</div>
  <p class="card-description">{description}</p>
  <div class="tech-stack">{tech}</div>
  <a class="view-btn" href="{url}"><span class="btn-icon">👉</span> View Project</a>
</article>
"#,
        id = escape_attr(&project.id),
        icon = escape_text(&project.icon),
        title = escape_text(&project.title),
        year_badge = year_badge(&project.year),
        type_badge = type_badge(&project.kind),
        description = escape_text(&project.description),
        tech = tech_badges(&project.tech, BadgeSize::Small),
    )
}

/// Cards for every project, in the given order.
pub fn render_cards(projects: &[Project]) -> String {
    projects.iter().map(render_card).collect()
}

/// Single-project detail fragment.
pub fn render_detail(project: &Project) -> String {
    let details = &project.details;
    format!(
        r#"<div class="project-hero">
  <div class="project-header-row">
    <div class="project-title-section">
      <div class="project-icon-large">{icon}</div>
      <div class="project-title-wrapper">
        <h1 class="project-title">{title}</h1>
        <p class="project-summary">{summary}</p>
      </div>
    </div>
    <div class="project-links">{links}</div>
  </div>
  <div class="project-meta-section">
    <div class="project-meta-badges">{year_badge}{type_badge}</div>
    <div class="tech-badges-grid">{tech}</div>
  </div>
</div>
<div class="project-content">
  <h3 class="section-label">About</h3>
  <p>{content}</p>
</div>
{gallery}{diagram}{discussions}"#,
        icon = escape_text(&project.icon),
        title = escape_text(&project.title),
        summary = escape_text(&details.summary),
        links = render_links(details.links.as_ref()),
        year_badge = year_badge_detail(&project.year),
        type_badge = type_badge_detail(&project.kind),
        tech = tech_badges(&project.tech, BadgeSize::Regular),
        content = escape_text(&details.content),
        gallery = render_gallery(&details.images, &project.title),
        diagram = render_diagram(renderable_diagram(details)),
        discussions = render_discussions(details.giscus.as_ref()),
    )
}

fn render_links(links: Option<&ProjectLinks>) -> String {
    let Some(links) = links else {
        return String::new();
    };
    let mut out = String::new();
    if let Some(url) = links.github() {
        out.push_str(&link_button(url, "project-link-btn", GITHUB_ICON_PATH, "GitHub"));
    }
    if let Some(url) = links.demo() {
        out.push_str(&link_button(
            url,
            "project-link-btn primary",
            DEMO_ICON_PATH,
            "Live Demo",
        ));
    }
    out
}

fn link_button(url: &str, class: &str, icon_path: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" class="{class}" target="_blank" rel="noopener"><svg class="link-icon" viewBox="0 0 16 16" width="16" height="16"><path fill="currentColor" d="{icon_path}"></path></svg>{label}</a>"#,
        escape_attr(url)
    )
}

fn render_gallery(images: &[String], project_title: &str) -> String {
    if images.is_empty() {
        return String::new();
    }
    let alt = escape_attr(project_title);
    let items: String = images
        .iter()
        .map(|image| {
            format!(
                r#"<div class="gallery-item"><img src="{}" alt="{alt}" loading="lazy" /></div>"#,
                escape_attr(image)
            )
        })
        .collect();
    format!(
        r#"<div class="project-gallery">
  <h3 class="section-label">Gallery</h3>
  <div class="gallery-grid">{items}</div>
</div>
"#
    )
}

/// The diagram to draw, if any; blank code counts as absent.
pub fn renderable_diagram(details: &ProjectDetails) -> Option<&Diagram> {
    details
        .diagram
        .as_ref()
        .filter(|diagram| !diagram.code.trim().is_empty())
}

fn render_diagram(diagram: Option<&Diagram>) -> String {
    let Some(diagram) = diagram else {
        return String::new();
    };
    format!(
        r#"<div class="project-diagram">
  <h3 class="section-label">Architecture</h3>
  <div class="diagram-container"><pre class="mermaid">{}</pre></div>
</div>
"#,
        escape_text(&diagram.code)
    )
}

fn render_discussions(giscus: Option<&GiscusConfig>) -> String {
    let Some(giscus) = giscus else {
        return String::new();
    };
    format!(
        r#"<div class="project-discussions"><div class="giscus"></div>{}</div>
"#,
        render_giscus_script(giscus)
    )
}

/// Discussion widget loader tag, or an empty string when not enabled.
pub fn render_giscus_script(config: &GiscusConfig) -> String {
    if !config.is_enabled() {
        return String::new();
    }
    let mut attributes = Vec::new();
    if let Some(repo) = config.repo.as_deref() {
        attributes.push(("data-repo", repo));
    }
    attributes.push(("data-repo-id", config.repo_id.as_deref().unwrap_or("")));
    if let Some(category) = config.category.as_deref() {
        attributes.push(("data-category", category));
    }
    attributes.push((
        "data-category-id",
        config.category_id.as_deref().unwrap_or(""),
    ));
    attributes.push(("data-mapping", config.mapping()));
    if let Some(term) = config.term.as_deref() {
        attributes.push(("data-term", term));
    }
    attributes.push(("data-strict", config.strict()));
    attributes.push(("data-reactions-enabled", config.reactions_enabled()));
    attributes.push(("data-emit-metadata", config.emit_metadata()));
    attributes.push(("data-input-position", config.input_position()));
    attributes.push(("data-theme", config.theme()));
    attributes.push(("data-lang", config.lang()));
    attributes.push(("data-loading", config.loading()));

    let rendered: String = attributes
        .into_iter()
        .map(|(name, value)| format!(r#" {name}="{}""#, escape_attr(value)))
        .collect();
    format!(r#"<script src="{GISCUS_CLIENT_URL}"{rendered} crossorigin="anonymous" async></script>"#)
}

/// Fragment shown when the requested project does not exist.
pub fn render_not_found() -> String {
    r#"<div class="matrix-wrap">
  <canvas id="matrix-canvas"></canvas>
  <div class="matrix-content">
    <h1 id="neon-title" data-text="PROJECT VANISHED">PROJECT VANISHED</h1>
    <p>Signal drowned in the data stream. No retrievable record.</p>
  </div>
</div>
"#
    .to_string()
}

/// Full-page error state shown when the project document failed to load.
pub fn render_load_error(message: &str) -> String {
    format!(
        r#"<div class="load-error">
  <div class="load-error-icon">⚠️</div>
  <p>Failed to load projects. Please try again later.</p>
  <p class="load-error-detail">Error: {}</p>
</div>
"#,
        escape_text(message)
    )
}

/// `<option>` lists for the year, tech and type selects.
///
/// Each list starts with an empty-valued "all" option.
pub fn render_filter_options(options: &FilterOptions) -> FilterOptionsMarkup {
    let years: Vec<String> = options.years.iter().map(|year| year.as_display()).collect();
    FilterOptionsMarkup {
        years: option_list("All years", &years),
        technologies: option_list("All technologies", &options.technologies),
        types: option_list("All types", &options.types),
    }
}

/// Rendered `<option>` markup for each filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptionsMarkup {
    pub years: String,
    pub technologies: String,
    pub types: String,
}

fn option_list(all_label: &str, values: &[String]) -> String {
    let mut out = format!(r#"<option value="">{all_label}</option>"#);
    for value in values {
        out.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            escape_attr(value),
            escape_text(value)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{option_list, render_giscus_script, render_load_error};
    use crate::model::project::GiscusConfig;

    #[test]
    fn giscus_script_applies_defaults() {
        let config = GiscusConfig {
            repo: Some("me/site".to_string()),
            repo_id: Some("R_1".to_string()),
            category_id: Some("C_1".to_string()),
            theme: Some("dark".to_string()),
            ..GiscusConfig::default()
        };
        let script = render_giscus_script(&config);
        assert!(script.contains(r#"data-repo="me/site""#));
        assert!(script.contains(r#"data-mapping="pathname""#));
        assert!(script.contains(r#"data-theme="dark""#));
        assert!(script.contains(r#"data-loading="lazy""#));
        assert!(!script.contains("data-term"));
    }

    #[test]
    fn giscus_script_is_empty_without_ids() {
        assert!(render_giscus_script(&GiscusConfig::default()).is_empty());
    }

    #[test]
    fn load_error_shows_escaped_message() {
        let html = render_load_error("HTTP error! status: <404>");
        assert!(html.contains("Error: HTTP error! status: &lt;404&gt;"));
    }

    #[test]
    fn option_list_starts_with_wildcard() {
        let html = option_list("All", &["go".to_string()]);
        assert!(html.starts_with(r#"<option value="">All</option>"#));
        assert!(html.ends_with(r#"<option value="go">go</option>"#));
    }
}

//! Static site build.
//!
//! # Responsibility
//! - Copy public files, styles, scripts and the data document to the output.
//! - Write the pre-rendered list page, one page per project and the
//!   not-found catch-all.
//!
//! # Invariants
//! - The output directory is created when missing and never deleted.
//! - A single asset copy failure is logged and skipped, never fatal.
//! - A missing or invalid data document fails the build.
//! - Invalid project ids fail the build before any page is written.
//! - Pages reference only entry scripts present in the output.
//!
//! # See also
//! - docs/architecture/logging.md

use crate::render::page::{
    render_detail_page, render_index_page, render_not_found_page, PageContext, PageScripts,
    DETAIL_SCRIPT, LIST_SCRIPT,
};
use crate::site::layout::{SiteLayout, DATA_FILE_NAME};
use crate::store::project_store::ProjectStore;
use crate::store::source::{FileSource, LoadError};
use chrono::Datelike;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

const PAGE_FILE_NAME: &str = "index.html";

pub type BuildResult<T> = Result<T, BuildError>;

/// Fatal site build failure.
#[derive(Debug)]
pub enum BuildError {
    Io { path: PathBuf, source: std::io::Error },
    Load(LoadError),
    /// The id cannot be used as a single path segment.
    InvalidProjectId(String),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
            Self::Load(err) => write!(f, "{err}"),
            Self::InvalidProjectId(id) => {
                write!(f, "project id `{id}` is not a valid path segment")
            }
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Load(err) => Some(err),
            Self::InvalidProjectId(_) => None,
        }
    }
}

impl From<LoadError> for BuildError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

/// Counters reported after a successful build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub assets_copied: usize,
    pub assets_skipped: usize,
    pub pages_written: usize,
    pub projects: usize,
}

/// Runs the full build with the current year in page footers.
pub fn build_site(layout: &SiteLayout) -> BuildResult<BuildReport> {
    build_site_with_year(layout, chrono::Local::now().year())
}

/// Runs the full build with an explicit footer year.
///
/// # Side effects
/// - Emits `site_build`, `asset_copy` and `page_write` logging events.
pub fn build_site_with_year(layout: &SiteLayout, year_now: i32) -> BuildResult<BuildReport> {
    let started_at = Instant::now();
    info!(
        "event=site_build module=site status=start dist={}",
        layout.dist_dir.display()
    );

    let result = run_build(layout, year_now);
    match &result {
        Ok(report) => info!(
            "event=site_build module=site status=ok pages={} assets={} skipped={} duration_ms={}",
            report.pages_written,
            report.assets_copied,
            report.assets_skipped,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=site_build module=site status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn run_build(layout: &SiteLayout, year_now: i32) -> BuildResult<BuildReport> {
    fs::create_dir_all(&layout.dist_dir).map_err(|source| BuildError::Io {
        path: layout.dist_dir.clone(),
        source,
    })?;

    let store = ProjectStore::load(&FileSource::new(layout.data_file()))?;

    let mut report = BuildReport {
        projects: store.len(),
        ..BuildReport::default()
    };
    copy_static_assets(layout, &mut report);
    write_pages(layout, &store, year_now, &mut report)?;
    Ok(report)
}

fn copy_static_assets(layout: &SiteLayout, report: &mut BuildReport) {
    let dist = layout.dist_dir.as_path();

    if layout.public_dir.is_dir() {
        copy_tree(&layout.public_dir, dist, report);
    }

    if layout.styles_dir.is_dir() {
        let css_dir = dist.join("css");
        match fs::read_dir(&layout.styles_dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    let is_css = path.extension().is_some_and(|ext| ext == "css");
                    if is_css && path.is_file() {
                        copy_file(&path, &css_dir.join(entry.file_name()), report);
                    }
                }
            }
            Err(err) => {
                warn!(
                    "event=asset_copy module=site status=error path={} error={}",
                    layout.styles_dir.display(),
                    err
                );
                report.assets_skipped += 1;
            }
        }
    }

    if layout.scripts_dir.is_dir() {
        copy_tree(&layout.scripts_dir, &dist.join("js"), report);
    }

    let data_file = layout.data_file();
    if data_file.is_file() {
        copy_file(&data_file, &dist.join(DATA_FILE_NAME), report);
    }
}

fn copy_tree(from: &Path, to: &Path, report: &mut BuildReport) {
    for entry in WalkDir::new(from).min_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("event=asset_copy module=site status=error error={err}");
                report.assets_skipped += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        copy_file(entry.path(), &to.join(relative), report);
    }
}

fn copy_file(from: &Path, to: &Path, report: &mut BuildReport) {
    let outcome = to
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| fs::copy(from, to));
    match outcome {
        Ok(_) => report.assets_copied += 1,
        Err(err) => {
            warn!(
                "event=asset_copy module=site status=error path={} error={}",
                from.display(),
                err
            );
            report.assets_skipped += 1;
        }
    }
}

fn write_pages(
    layout: &SiteLayout,
    store: &ProjectStore,
    year_now: i32,
    report: &mut BuildReport,
) -> BuildResult<()> {
    if let Some(project) = store.projects().iter().find(|p| !is_page_dir_name(&p.id)) {
        return Err(BuildError::InvalidProjectId(project.id.clone()));
    }
    let dist = layout.dist_dir.as_path();
    let projects_dir = dist.join("projects");
    let js_dir = dist.join("js");
    let context = PageContext {
        site: store.config(),
        base_path: layout.base_path.as_str(),
        year_now,
        scripts: PageScripts {
            list: js_dir.join(LIST_SCRIPT).is_file(),
            detail: js_dir.join(DETAIL_SCRIPT).is_file(),
        },
    };

    write_page(
        &dist.join(PAGE_FILE_NAME),
        &render_index_page(&context, store.projects()),
        report,
    )?;
    write_page(
        &projects_dir.join(PAGE_FILE_NAME),
        &render_not_found_page(&context),
        report,
    )?;
    for project in store.projects() {
        write_page(
            &projects_dir.join(&project.id).join(PAGE_FILE_NAME),
            &render_detail_page(&context, project),
            report,
        )?;
    }
    Ok(())
}

/// A project id must name exactly one directory under `projects/` without
/// colliding with the catch-all page file.
fn is_page_dir_name(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\'])
        && !id.eq_ignore_ascii_case(PAGE_FILE_NAME)
}

fn write_page(path: &Path, html: &str, report: &mut BuildReport) -> BuildResult<()> {
    let io_error = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, html).map_err(io_error)?;
    info!(
        "event=page_write module=site status=ok path={} bytes={}",
        path.display(),
        html.len()
    );
    report.pages_written += 1;
    Ok(())
}

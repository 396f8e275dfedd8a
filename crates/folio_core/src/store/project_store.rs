//! Read-only project store and derived option sets.
//!
//! # Responsibility
//! - Load and validate the portfolio document exactly once.
//! - Provide id lookup and the derived year/tech/type option sets.
//!
//! # Invariants
//! - Project ids are unique within one store snapshot.
//! - Load order is preserved; the store never reorders projects.
//! - Year options sort descending; tech and type options sort ascending.

use crate::model::project::{PortfolioDocument, Project, SiteConfig, YearLabel};
use crate::store::source::{LoadError, LoadResult, ProjectSource};
use log::{error, info};
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

/// In-memory snapshot of the portfolio document.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    document: PortfolioDocument,
    index: HashMap<String, usize>,
}

impl ProjectStore {
    /// Fetches and decodes the document from `source`.
    ///
    /// # Side effects
    /// - Emits `store_load` logging events with duration and status.
    ///
    /// # Errors
    /// - `LoadError::Transport` when the source cannot be read.
    /// - `LoadError::Parse` / `LoadError::NotAnObject` for malformed payloads.
    /// - `LoadError::DuplicateId` when two projects share an id.
    pub fn load<S: ProjectSource + ?Sized>(source: &S) -> LoadResult<Self> {
        let started_at = Instant::now();
        let origin = source.origin();
        info!("event=store_load module=store status=start origin={origin}");

        let result = source
            .fetch()
            .and_then(|text| parse_document(&text))
            .and_then(Self::from_document);

        match &result {
            Ok(store) => info!(
                "event=store_load module=store status=ok origin={} projects={} duration_ms={}",
                origin,
                store.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_load module=store status=error origin={} duration_ms={} error={}",
                origin,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Wraps an already-decoded document after validating id uniqueness.
    pub fn from_document(document: PortfolioDocument) -> LoadResult<Self> {
        let mut index = HashMap::with_capacity(document.projects.len());
        for (position, project) in document.projects.iter().enumerate() {
            if index.insert(project.id.clone(), position).is_some() {
                return Err(LoadError::DuplicateId(project.id.clone()));
            }
        }
        Ok(Self { document, index })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.document.config
    }

    /// Projects in document order.
    pub fn projects(&self) -> &[Project] {
        &self.document.projects
    }

    pub fn len(&self) -> usize {
        self.document.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.projects.is_empty()
    }

    /// Returns the project with exactly this id, if any.
    pub fn find_by_id(&self, id: &str) -> Option<&Project> {
        if id.is_empty() {
            return None;
        }
        self.index
            .get(id)
            .and_then(|position| self.document.projects.get(*position))
    }

    pub fn unique_years(&self) -> Vec<YearLabel> {
        unique_years(self.projects())
    }

    pub fn unique_technologies(&self) -> Vec<String> {
        unique_technologies(self.projects())
    }

    pub fn unique_types(&self) -> Vec<String> {
        unique_types(self.projects())
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_projects(self.projects())
    }
}

/// Option sets offered by the year/tech/type filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub years: Vec<YearLabel>,
    pub technologies: Vec<String>,
    pub types: Vec<String>,
}

impl FilterOptions {
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            years: unique_years(projects),
            technologies: unique_technologies(projects),
            types: unique_types(projects),
        }
    }
}

/// Decodes document text, requiring a top-level JSON object.
pub fn parse_document(text: &str) -> LoadResult<PortfolioDocument> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(LoadError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Returns the first project whose id equals `id`.
///
/// An empty id never matches.
pub fn find_project_by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    if id.is_empty() {
        return None;
    }
    projects.iter().find(|project| project.id == id)
}

/// Deduplicated years, most recent first.
///
/// Ordering compares display strings, so numeric and text labels interleave
/// lexically. Blank labels are not offered as options.
pub fn unique_years(projects: &[Project]) -> Vec<YearLabel> {
    let mut years: Vec<YearLabel> = Vec::new();
    for project in projects {
        if project.year.as_display().is_empty() {
            continue;
        }
        if !years.contains(&project.year) {
            years.push(project.year.clone());
        }
    }
    years.sort_by_key(|year| std::cmp::Reverse(year.as_display()));
    years
}

/// Deduplicated non-empty technology names across all projects, ascending.
pub fn unique_technologies(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|project| project.tech.iter())
        .filter(|tech| !tech.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Deduplicated non-empty project types, ascending.
pub fn unique_types(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|project| &project.kind)
        .filter(|kind| !kind.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

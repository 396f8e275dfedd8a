//! Conjunctive project filter.
//!
//! # Responsibility
//! - Decide project visibility from year/tech/type/search criteria.
//! - Build criteria from loosely-typed input without failing.
//!
//! # Invariants
//! - Output order equals input order; nothing is dropped twice or duplicated.
//! - Empty or absent criteria pass every project.
//! - The engine never returns an error; malformed input widens the match.

use crate::model::project::{Project, ProjectId};
use log::debug;

/// Active filter values at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact match against the year display form.
    pub year: Option<String>,
    /// Exact match against one entry of the project's `tech`.
    pub tech: Option<String>,
    /// Exact match against the project type.
    pub kind: Option<String>,
    /// Case-insensitive substring of title or description.
    pub search_query: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match every project.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_tech(mut self, tech: impl Into<String>) -> Self {
        self.tech = Some(tech.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Builds criteria from a JSON object such as `{"year": "2023"}`.
    ///
    /// Keys are `year`, `tech`, `type` and `searchQuery`. Any value that is
    /// not a string counts as no constraint, as does a non-object input.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let field = |key: &str| value.get(key).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            year: field("year"),
            tech: field("tech"),
            kind: field("type"),
            search_query: field("searchQuery"),
        }
    }

    /// Returns whether no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        active(&self.year).is_none()
            && active(&self.tech).is_none()
            && active(&self.kind).is_none()
            && self.normalized_search().is_none()
    }

    /// Lower-cased, trimmed search text; `None` when blank.
    fn normalized_search(&self) -> Option<String> {
        self.search_query
            .as_deref()
            .map(|query| query.trim().to_lowercase())
            .filter(|query| !query.is_empty())
    }

    /// Returns whether `project` passes every active criterion.
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_with(project, self.normalized_search().as_deref())
    }

    fn matches_with(&self, project: &Project, search: Option<&str>) -> bool {
        if let Some(year) = active(&self.year) {
            if !project.year.matches(year) {
                return false;
            }
        }
        if let Some(tech) = active(&self.tech) {
            if !project.uses_tech(tech) {
                return false;
            }
        }
        if let Some(kind) = active(&self.kind) {
            if project.kind != kind {
                return false;
            }
        }
        if let Some(query) = search {
            let title = project.title.to_lowercase();
            let description = project.description.to_lowercase();
            if !title.contains(query) && !description.contains(query) {
                return false;
            }
        }
        true
    }
}

/// Visible subset computed by [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Ids of visible projects in load order.
    pub visible_ids: Vec<ProjectId>,
    pub visible_count: usize,
}

/// Filters `projects` by `criteria`, preserving input order.
pub fn apply(projects: &[Project], criteria: &FilterCriteria) -> FilterOutcome {
    let mask = apply_with_mask(projects, criteria);
    let visible_ids: Vec<ProjectId> = projects
        .iter()
        .zip(&mask)
        .filter(|(_, visible)| **visible)
        .map(|(project, _)| project.id.clone())
        .collect();
    let visible_count = visible_ids.len();
    FilterOutcome {
        visible_ids,
        visible_count,
    }
}

/// Returns one visibility flag per project, index-aligned with `projects`.
pub fn apply_with_mask(projects: &[Project], criteria: &FilterCriteria) -> Vec<bool> {
    let search = criteria.normalized_search();
    let mask: Vec<bool> = projects
        .iter()
        .map(|project| criteria.matches_with(project, search.as_deref()))
        .collect();
    debug!(
        "event=filter_apply module=filter status=ok total={} visible={}",
        projects.len(),
        mask.iter().filter(|visible| **visible).count()
    );
    mask
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

//! View controller: the single owner of mutable view state.
//!
//! # Responsibility
//! - Derive filter option sets once from the loaded store.
//! - Consume one "criteria changed" signal and recompute visibility.
//! - Convert load failures and unknown ids into display states.
//!
//! # Invariants
//! - Initial state has no criteria: every project visible, count = total.
//! - `visibility` is index-aligned with `store.projects()`.
//! - Load errors never escape this boundary; they become `LoadFailed`.

use crate::filter::engine::{apply_with_mask, FilterCriteria};
use crate::model::project::{Project, ProjectId};
use crate::render::templates::{render_card, render_detail, render_load_error, render_not_found};
use crate::store::project_store::{FilterOptions, ProjectStore};
use crate::store::source::{LoadError, ProjectSource};
use crate::view::route::Route;
use log::warn;

/// Display state of a page after load and routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<'a> {
    /// Project list with filters.
    List,
    /// Detail view of one project.
    Detail(&'a Project),
    /// Requested project does not exist.
    NotFound,
    /// The data document could not be loaded; carries the message shown.
    LoadFailed(String),
}

impl PageState<'_> {
    /// Terminal error state for a failed load.
    pub fn from_load_error(err: &LoadError) -> PageState<'static> {
        PageState::LoadFailed(err.to_string())
    }
}

/// Result of one criteria change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewUpdate {
    pub visible_ids: Vec<ProjectId>,
    pub visible_count: usize,
    pub total: usize,
    /// `"(<visible> of <total>)"`.
    pub count_label: String,
}

/// Filter/list/detail state for one page view.
#[derive(Debug, Clone)]
pub struct ViewController {
    store: ProjectStore,
    options: FilterOptions,
    criteria: FilterCriteria,
    visibility: Vec<bool>,
}

impl ViewController {
    /// Builds the controller in its initial, unfiltered state.
    pub fn new(store: ProjectStore) -> Self {
        let options = store.filter_options();
        let visibility = vec![true; store.len()];
        Self {
            store,
            options,
            criteria: FilterCriteria::none(),
            visibility,
        }
    }

    /// Loads the store from `source` and builds the controller.
    ///
    /// A load failure is returned as the `LoadFailed` display state.
    pub fn load<S: ProjectSource + ?Sized>(source: &S) -> Result<Self, PageState<'static>> {
        match ProjectStore::load(source) {
            Ok(store) => Ok(Self::new(store)),
            Err(err) => {
                warn!("event=view_init module=view status=error error={err}");
                Err(PageState::from_load_error(&err))
            }
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the active criteria and recomputes visibility.
    pub fn criteria_changed(&mut self, criteria: FilterCriteria) -> ViewUpdate {
        self.visibility = apply_with_mask(self.store.projects(), &criteria);
        self.criteria = criteria;
        self.snapshot()
    }

    /// Current visibility and count without changing criteria.
    pub fn snapshot(&self) -> ViewUpdate {
        let visible_ids: Vec<ProjectId> = self
            .visible_projects()
            .map(|project| project.id.clone())
            .collect();
        let visible_count = visible_ids.len();
        let total = self.store.len();
        ViewUpdate {
            visible_ids,
            visible_count,
            total,
            count_label: count_label(visible_count, total),
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.store
            .projects()
            .iter()
            .zip(&self.visibility)
            .any(|(project, visible)| *visible && project.id == id)
    }

    pub fn visible_count(&self) -> usize {
        self.visibility.iter().filter(|visible| **visible).count()
    }

    pub fn count_label(&self) -> String {
        count_label(self.visible_count(), self.store.len())
    }

    /// Visible projects in load order.
    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> + '_ {
        self.store
            .projects()
            .iter()
            .zip(&self.visibility)
            .filter(|(_, visible)| **visible)
            .map(|(project, _)| project)
    }

    /// Cards of currently visible projects.
    pub fn render_visible_cards(&self) -> String {
        self.visible_projects().map(render_card).collect()
    }

    /// Resolves a detail route against the store.
    pub fn resolve(&self, route: &Route) -> PageState<'_> {
        match route
            .project_id()
            .and_then(|id| self.store.find_by_id(id))
        {
            Some(project) => PageState::Detail(project),
            None => PageState::NotFound,
        }
    }
}

/// Formats the filter count label.
pub fn count_label(visible: usize, total: usize) -> String {
    format!("({visible} of {total})")
}

/// Renders the main fragment for a display state.
///
/// `List` renders every card; callers that track filters should use
/// [`ViewController::render_visible_cards`] instead.
pub fn render_state(state: &PageState<'_>, projects: &[Project]) -> String {
    match state {
        PageState::List => projects.iter().map(render_card).collect(),
        PageState::Detail(project) => render_detail(project),
        PageState::NotFound => render_not_found(),
        PageState::LoadFailed(message) => render_load_error(message),
    }
}

#[cfg(test)]
mod tests {
    use super::{count_label, ViewController};
    use crate::filter::engine::FilterCriteria;
    use crate::model::project::{PortfolioDocument, Project};
    use crate::store::project_store::ProjectStore;

    fn controller() -> ViewController {
        let mut alpha = Project::new("a", "Alpha");
        alpha.kind = "web".to_string();
        let mut beta = Project::new("b", "Beta");
        beta.kind = "cli".to_string();
        let store = ProjectStore::from_document(PortfolioDocument {
            projects: vec![alpha, beta],
            ..PortfolioDocument::default()
        })
        .expect("unique ids");
        ViewController::new(store)
    }

    #[test]
    fn initial_state_shows_everything() {
        let view = controller();
        assert_eq!(view.count_label(), "(2 of 2)");
        assert!(view.is_visible("a"));
        assert!(view.is_visible("b"));
    }

    #[test]
    fn criteria_change_updates_visibility_and_label() {
        let mut view = controller();
        let update = view.criteria_changed(FilterCriteria::none().with_kind("cli"));
        assert_eq!(update.visible_ids, vec!["b".to_string()]);
        assert_eq!(update.count_label, "(1 of 2)");
        assert!(!view.is_visible("a"));

        let reset = view.criteria_changed(FilterCriteria::none());
        assert_eq!(reset.visible_count, 2);
    }

    #[test]
    fn count_label_format() {
        assert_eq!(count_label(0, 0), "(0 of 0)");
    }
}

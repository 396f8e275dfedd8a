//! Core logic for the folio project portfolio.
//! This crate owns the data model, filtering, rendering and the static build.

pub mod filter;
pub mod logging;
pub mod model;
pub mod render;
pub mod site;
pub mod store;
pub mod view;

pub use filter::engine::{apply, apply_with_mask, FilterCriteria, FilterOutcome};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::project::{
    Diagram, GiscusConfig, PortfolioDocument, Project, ProjectDetails, ProjectId, ProjectLinks,
    SiteConfig, YearLabel,
};
pub use render::templates::{render_card, render_detail, render_load_error, render_not_found};
pub use site::build::{build_site, build_site_with_year, BuildError, BuildReport};
pub use site::layout::SiteLayout;
pub use store::project_store::{
    find_project_by_id, unique_technologies, unique_types, unique_years, FilterOptions,
    ProjectStore,
};
pub use store::source::{FileSource, InlineSource, LoadError, LoadResult, ProjectSource};
pub use view::controller::{count_label, render_state, PageState, ViewController, ViewUpdate};
pub use view::route::{route_from_path, Route};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

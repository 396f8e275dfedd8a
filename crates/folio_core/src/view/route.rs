//! Path routing for detail pages.

use crate::model::project::ProjectId;

/// Literal path segment that precedes a project id.
pub const PROJECTS_SEGMENT: &str = "projects";

/// Result of resolving a detail-page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `.../projects/<id>/...`
    Project(ProjectId),
    /// No `projects` segment, or nothing after it.
    Missing,
}

impl Route {
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Project(id) => Some(id.as_str()),
            Self::Missing => None,
        }
    }
}

/// Routes a URL path; query and fragment are ignored.
///
/// The project id is the segment right after the first literal `projects`
/// segment. Empty segments are skipped, so trailing slashes do not matter.
pub fn route_from_path(path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    if segments.by_ref().any(|segment| segment == PROJECTS_SEGMENT) {
        if let Some(id) = segments.next() {
            return Route::Project(id.to_string());
        }
    }
    Route::Missing
}

#[cfg(test)]
mod tests {
    use super::{route_from_path, Route};

    #[test]
    fn id_follows_first_projects_segment() {
        assert_eq!(
            route_from_path("/my-portfolio/projects/alpha/"),
            Route::Project("alpha".to_string())
        );
        assert_eq!(
            route_from_path("projects/beta?tab=1#top"),
            Route::Project("beta".to_string())
        );
        assert_eq!(
            route_from_path("/projects/projects/"),
            Route::Project("projects".to_string())
        );
    }

    #[test]
    fn missing_segment_or_id_is_missing() {
        assert_eq!(route_from_path("/projects/"), Route::Missing);
        assert_eq!(route_from_path("/about"), Route::Missing);
        assert_eq!(route_from_path(""), Route::Missing);
    }
}

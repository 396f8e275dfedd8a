#![allow(dead_code)]

use folio_core::{PortfolioDocument, Project, ProjectStore};
use serde_json::{json, Value};

/// Two-project document used across the integration suites.
pub fn sample_document() -> Value {
    json!({
        "config": { "siteName": "Ada Lovelace", "tagline": "Engines and notes" },
        "projects": [
            {
                "id": "a",
                "title": "Alpha",
                "description": "x",
                "icon": "🚀",
                "url": "/projects/a/",
                "year": 2023,
                "type": "web",
                "tech": ["react"],
                "details": {
                    "summary": "Alpha summary",
                    "content": "Alpha content",
                    "images": ["/img/a1.png", "/img/a2.png"],
                    "links": { "github": "https://github.com/ada/alpha", "demo": "https://alpha.example" },
                    "diagram": { "type": "mermaid", "code": "graph TD; A-->B" },
                    "giscus": { "repo": "ada/site", "repoId": "R_1", "categoryId": "C_1" }
                }
            },
            {
                "id": "b",
                "title": "Beta",
                "description": "y",
                "icon": "🛠️",
                "url": "/projects/b/",
                "year": 2022,
                "type": "cli",
                "tech": ["go"],
                "details": { "summary": "Beta summary", "content": "Beta content" }
            }
        ]
    })
}

pub fn sample_store() -> ProjectStore {
    let document: PortfolioDocument = serde_json::from_value(sample_document()).unwrap();
    ProjectStore::from_document(document).unwrap()
}

pub fn project(
    id: &str,
    year: i64,
    kind: &str,
    tech: &[&str],
    title: &str,
    description: &str,
) -> Project {
    let mut project = Project::new(id, title);
    project.year = folio_core::YearLabel::Number(year);
    project.kind = kind.to_string();
    project.tech = tech.iter().map(|t| t.to_string()).collect();
    project.description = description.to_string();
    project
}

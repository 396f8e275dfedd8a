//! Directory layout of the static build.

use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "projects.json";

/// Input and output directories of one site build.
///
/// Relative paths resolve against the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Static files copied verbatim to the output root.
    pub public_dir: PathBuf,
    /// Output directory. Created when missing, never wiped.
    pub dist_dir: PathBuf,
    /// Holds `projects.json`.
    pub data_dir: PathBuf,
    /// Top-level `*.css` files are copied to `<dist>/css`.
    pub styles_dir: PathBuf,
    /// Copied recursively to `<dist>/js`.
    pub scripts_dir: PathBuf,
    /// URL prefix for a sub-path deployment, e.g. `/my-portfolio`.
    pub base_path: String,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self::rooted(".")
    }
}

impl SiteLayout {
    /// Standard layout under one project root.
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let src = root.join("src");
        Self {
            public_dir: root.join("public"),
            dist_dir: root.join("dist"),
            data_dir: src.join("data"),
            styles_dir: src.join("styles"),
            scripts_dir: src.join("scripts"),
            base_path: String::new(),
        }
    }

    pub fn with_dist_dir(mut self, dist_dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dist_dir.into();
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Location of the source data document.
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }
}

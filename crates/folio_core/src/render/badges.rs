//! Shields.io badge generation.
//!
//! # Responsibility
//! - Map technology names to badge colors and logo names.
//! - Produce badge image URLs and `<img>` tags for tech, year and type.
//!
//! # Invariants
//! - Color lookup normalizes casing and whitespace; the stored name is
//!   shown unchanged.
//! - Unknown technologies fall back to `DEFAULT_TECH_COLOR`.

use crate::model::project::YearLabel;
use crate::render::html::escape_attr;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

const BADGE_BASE_URL: &str = "https://img.shields.io/badge";
pub const DEFAULT_TECH_COLOR: &str = "0D1117";
const YEAR_BADGE_COLOR: &str = "2563EB";
const TYPE_BADGE_COLOR: &str = "10B981";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

static TECH_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("html5", "E34F26"),
        ("html", "E34F26"),
        ("javascript", "f7df1c"),
        ("js", "f7df1c"),
        ("bootstrap", "7953b3"),
        ("typescript", "007ACC"),
        ("ts", "007ACC"),
        ("react", "45b8d8"),
        ("reactjs", "45b8d8"),
        ("angular", "DD0031"),
        ("jest", "be3d19"),
        ("adobephotoshop", "30a8ff"),
        ("photoshop", "30a8ff"),
        ("adobexd", "ff62f6"),
        ("xd", "ff62f6"),
        ("nodejs", "43853d"),
        ("node.js", "43853d"),
        ("node", "43853d"),
        ("webpack", "8DD6F9"),
        ("docker", "46a2f1"),
        ("githubactions", "2088FF"),
        ("github-actions", "2088FF"),
        ("googlecloudplatform", "1a73e8"),
        ("gcp", "1a73e8"),
        ("insomnia", "5849BE"),
        ("apollo", "311C87"),
        ("apollographql", "311C87"),
        ("redux", "764ABC"),
        ("graphql", "E10098"),
        ("sass", "CC6699"),
        ("scss", "CC6699"),
        ("styledcomponents", "db7092"),
        ("styled-components", "db7092"),
        ("git", "F05032"),
        ("nestjs", "ea2845"),
        ("nest", "ea2845"),
        ("npm", "CB3837"),
        ("d3js", "F9A03C"),
        ("d3.js", "F9A03C"),
        ("d3", "F9A03C"),
        ("prettier", "F7B93E"),
        ("mongodb", "13aa52"),
        ("mongo", "13aa52"),
        ("vite", "646CFF"),
        ("pwa", "5A0FC8"),
        ("scala", "DC322F"),
        ("apachespark", "E25A1C"),
        ("spark", "E25A1C"),
        ("apachesparks", "E25A1C"),
        ("databricks", "FF3621"),
        ("deltalake", "00ADD4"),
        ("delta", "00ADD4"),
        ("apachekafka", "231F20"),
        ("kafka", "231F20"),
        ("python", "3776AB"),
        ("java", "007396"),
        ("spring", "6DB33F"),
        ("springboot", "6DB33F"),
        ("postgresql", "4169E1"),
        ("postgres", "4169E1"),
        ("mysql", "4479A1"),
        ("aws", "FF9900"),
        ("amazon", "FF9900"),
        ("azure", "0089D6"),
        ("kubernetes", "326CE5"),
        ("k8s", "326CE5"),
        ("terraform", "7B42BC"),
        ("jenkins", "D24939"),
        ("gitlab", "FCA121"),
        ("pandas", "150458"),
        ("airflow", "017CEE"),
        ("apacheairflow", "017CEE"),
    ])
});

/// Badge size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSize {
    /// Compact badge used on list cards.
    Small,
    /// Full badge used on the detail page.
    Regular,
}

impl BadgeSize {
    fn class_name(self) -> &'static str {
        match self {
            Self::Small => "tech-badge-small",
            Self::Regular => "tech-badge-img",
        }
    }
}

/// Lower-cases and strips all whitespace: `"Node JS"` -> `"nodejs"`.
pub fn normalize_tech_name(tech: &str) -> String {
    WHITESPACE_RE.replace_all(&tech.to_lowercase(), "").into_owned()
}

/// Hex color (without `#`) for a technology badge.
pub fn tech_color(tech: &str) -> &'static str {
    TECH_COLORS
        .get(normalize_tech_name(tech).as_str())
        .copied()
        .unwrap_or(DEFAULT_TECH_COLOR)
}

/// Logo color: dark text on the yellow JavaScript badge, white elsewhere.
pub fn tech_logo_color(tech: &str) -> &'static str {
    match normalize_tech_name(tech).as_str() {
        "javascript" | "js" => "black",
        _ => "white",
    }
}

pub fn tech_badge_url(tech: &str) -> String {
    format!(
        "{BADGE_BASE_URL}/-{}-{}?style=flat-square&logo={}&logoColor={}",
        urlencoding::encode(tech),
        tech_color(tech),
        urlencoding::encode(&normalize_tech_name(tech)),
        tech_logo_color(tech)
    )
}

pub fn tech_badge(tech: &str, size: BadgeSize) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="{}" />"#,
        escape_attr(&tech_badge_url(tech)),
        escape_attr(tech),
        size.class_name()
    )
}

/// All badges for a technology list, in stored order.
pub fn tech_badges(techs: &[String], size: BadgeSize) -> String {
    techs.iter().map(|tech| tech_badge(tech, size)).collect()
}

pub fn year_badge_url(year: &YearLabel) -> String {
    format!(
        "{BADGE_BASE_URL}/{}-{YEAR_BADGE_COLOR}?style=flat-square",
        urlencoding::encode(&year.as_display())
    )
}

pub fn type_badge_url(kind: &str) -> String {
    format!(
        "{BADGE_BASE_URL}/{}-{TYPE_BADGE_COLOR}?style=flat-square",
        urlencoding::encode(kind)
    )
}

/// Card-sized year badge.
pub fn year_badge(year: &YearLabel) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="card-badge" />"#,
        escape_attr(&year_badge_url(year)),
        escape_attr(&year.as_display())
    )
}

/// Card-sized type badge.
pub fn type_badge(kind: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="card-badge" />"#,
        escape_attr(&type_badge_url(kind)),
        escape_attr(kind)
    )
}

/// Labelled year badge for the detail page.
pub fn year_badge_detail(year: &YearLabel) -> String {
    let url = format!(
        "{BADGE_BASE_URL}/Year-{}-{YEAR_BADGE_COLOR}?style=flat-square&logoColor=white",
        urlencoding::encode(&year.as_display())
    );
    format!(
        r#"<img src="{}" alt="Year: {}" class="badge-img" />"#,
        escape_attr(&url),
        escape_attr(&year.as_display())
    )
}

/// Labelled type badge for the detail page.
pub fn type_badge_detail(kind: &str) -> String {
    let url = format!(
        "{BADGE_BASE_URL}/Type-{}-{TYPE_BADGE_COLOR}?style=flat-square&logoColor=white",
        urlencoding::encode(kind)
    );
    format!(
        r#"<img src="{}" alt="Type: {}" class="badge-img" />"#,
        escape_attr(&url),
        escape_attr(kind)
    )
}

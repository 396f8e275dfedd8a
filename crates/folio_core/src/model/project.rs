//! Project domain model.
//!
//! # Responsibility
//! - Define the typed records decoded from the portfolio data document.
//! - Keep every optional nested field absent-tolerant at decode time.
//!
//! # Invariants
//! - `id` is the routing key and stays stable across rebuilds.
//! - Records are immutable after load; no setter mutates a loaded project.
//! - A missing optional field decodes to its default, never to an error.
//!
//! # See also
//! - docs/architecture/data-document.md

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Stable identifier of one project, used as the routing key.
pub type ProjectId = String;

/// Year label of a project.
///
/// The data document may carry either a number (`2023`) or a free-form
/// label (`"2021-2022"`). Filtering compares the display form only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearLabel {
    Number(i64),
    Text(String),
}

impl YearLabel {
    /// Returns the string form shown in badges and option lists.
    pub fn as_display(&self) -> String {
        self.to_string()
    }

    /// Returns whether `value` equals this label's display form.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Number(number) => value == number.to_string(),
            Self::Text(text) => text == value,
        }
    }
}

impl Default for YearLabel {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Display for YearLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One portfolio entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: ProjectId,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    /// Emoji or short text shown next to the title.
    #[serde(deserialize_with = "lenient_text")]
    pub icon: String,
    /// Link target of the card title and "View Project" button.
    #[serde(deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(deserialize_with = "lenient")]
    pub year: YearLabel,
    /// Serialized as `type` to match the data document.
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub kind: String,
    /// Ordered technology names. Order only affects badge order.
    #[serde(deserialize_with = "lenient")]
    pub tech: Vec<String>,
    /// Only the detail page reads this; a malformed block leaves cards intact.
    #[serde(deserialize_with = "lenient")]
    pub details: ProjectDetails,
}

impl Project {
    /// Creates a project with the given id and title and empty metadata.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns whether `tech` is present verbatim in this project's stack.
    pub fn uses_tech(&self, tech: &str) -> bool {
        self.tech.iter().any(|entry| entry == tech)
    }
}

/// Detail-page content of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDetails {
    #[serde(deserialize_with = "lenient_text")]
    pub summary: String,
    #[serde(deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(deserialize_with = "lenient")]
    pub images: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub links: Option<ProjectLinks>,
    #[serde(deserialize_with = "lenient")]
    pub diagram: Option<Diagram>,
    #[serde(deserialize_with = "lenient")]
    pub giscus: Option<GiscusConfig>,
}

/// External links shown as buttons on the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl ProjectLinks {
    /// Returns the GitHub link when it is present and non-blank.
    pub fn github(&self) -> Option<&str> {
        non_blank(self.github.as_deref())
    }

    /// Returns the demo link when it is present and non-blank.
    pub fn demo(&self) -> Option<&str> {
        non_blank(self.demo.as_deref())
    }
}

/// Architecture diagram source, e.g. a mermaid graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagram {
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
}

pub const GISCUS_DEFAULT_MAPPING: &str = "pathname";
pub const GISCUS_DEFAULT_STRICT: &str = "0";
pub const GISCUS_DEFAULT_REACTIONS_ENABLED: &str = "1";
pub const GISCUS_DEFAULT_EMIT_METADATA: &str = "0";
pub const GISCUS_DEFAULT_INPUT_POSITION: &str = "top";
pub const GISCUS_DEFAULT_THEME: &str = "preferred_color_scheme";
pub const GISCUS_DEFAULT_LANG: &str = "en";
pub const GISCUS_DEFAULT_LOADING: &str = "lazy";

/// Discussion widget configuration attached to one project.
///
/// Only `repo_id` and `category_id` are required for the widget to load;
/// every other attribute falls back to a fixed default.
///
/// Attributes are decoded one by one: numbers and `true` are stringified,
/// while `0`, `false` and non-scalar values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GiscusConfig {
    #[serde(deserialize_with = "lenient_attr")]
    pub repo: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub repo_id: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub category_id: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub mapping: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub term: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub strict: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub reactions_enabled: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub emit_metadata: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub input_position: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub theme: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub lang: Option<String>,
    #[serde(deserialize_with = "lenient_attr")]
    pub loading: Option<String>,
}

impl GiscusConfig {
    /// Returns whether enough identifiers are present to load the widget.
    pub fn is_enabled(&self) -> bool {
        non_blank(self.repo_id.as_deref()).is_some()
            && non_blank(self.category_id.as_deref()).is_some()
    }

    pub fn mapping(&self) -> &str {
        or_default(self.mapping.as_deref(), GISCUS_DEFAULT_MAPPING)
    }

    pub fn strict(&self) -> &str {
        or_default(self.strict.as_deref(), GISCUS_DEFAULT_STRICT)
    }

    pub fn reactions_enabled(&self) -> &str {
        or_default(
            self.reactions_enabled.as_deref(),
            GISCUS_DEFAULT_REACTIONS_ENABLED,
        )
    }

    pub fn emit_metadata(&self) -> &str {
        or_default(self.emit_metadata.as_deref(), GISCUS_DEFAULT_EMIT_METADATA)
    }

    pub fn input_position(&self) -> &str {
        or_default(
            self.input_position.as_deref(),
            GISCUS_DEFAULT_INPUT_POSITION,
        )
    }

    pub fn theme(&self) -> &str {
        or_default(self.theme.as_deref(), GISCUS_DEFAULT_THEME)
    }

    pub fn lang(&self) -> &str {
        or_default(self.lang.as_deref(), GISCUS_DEFAULT_LANG)
    }

    pub fn loading(&self) -> &str {
        or_default(self.loading.as_deref(), GISCUS_DEFAULT_LOADING)
    }
}

const DEFAULT_SITE_NAME: &str = "Portfolio";

/// Site-level display settings from the data document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: Option<String>,
    pub tagline: Option<String>,
}

impl SiteConfig {
    /// Returns the configured site name, or a generic fallback.
    pub fn site_name(&self) -> &str {
        or_default(self.site_name.as_deref(), DEFAULT_SITE_NAME)
    }

    pub fn tagline(&self) -> &str {
        self.tagline.as_deref().unwrap_or("")
    }
}

/// Top-level shape of the data document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioDocument {
    #[serde(deserialize_with = "lenient")]
    pub config: SiteConfig,
    pub projects: Vec<Project>,
}

/// Decodes an optional section, falling back to its default when the value
/// has the wrong shape. Malformed optional content is treated as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Display text: strings pass through, numbers and bools are stringified,
/// `null` and containers become empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    };
    Ok(text)
}

/// Widget attribute: like `lenient_text`, but falsy scalars are unset so the
/// attribute falls back to its default.
fn lenient_attr<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let attr = match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    };
    Ok(attr)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    non_blank(value).unwrap_or(default)
}

use serde::{Deserialize, Serialize};

/// Description body after fallback resolution. `Html` passes through
/// verbatim at render time, `Text` is escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectBodyViewModel {
    Html { html: String },
    Text { text: String },
}

/// One rendered project entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItemViewModel {
    /// List key; unique within the collection by upstream guarantee
    pub slug: String,
    /// Internal navigable path derived from the slug
    pub href: String,
    /// Title, already fallen back to the slug when absent
    pub title: String,
    /// Pre-formatted, passed through untouched
    pub date: String,
    pub source_url: String,
    pub body: ProjectBodyViewModel,
}

/// Ordered project list, order identical to the input collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListViewModel {
    pub items: Vec<ProjectItemViewModel>,
}

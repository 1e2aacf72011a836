use serde::{Deserialize, Serialize};

use crate::markup::TrustedHtml;
use crate::slug::Slug;

/// Author metadata from the site configuration.
///
/// Supplied wholesale by the data provider; never mutated by rendering.
/// A missing record (or an empty name) suppresses the biographical
/// paragraph, avatar still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    pub summary: Option<String>,
    pub school: Option<String>,
}

/// One project entry as produced by the content layer.
///
/// `date` is pre-formatted for display and the collection arrives already
/// sorted by it (descending); the renderer passes it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable identifier (hex digest of the slug)
    pub id: String,
    /// List key and link target; unique within a collection
    pub slug: Slug,
    /// Falls back to the slug at render time when absent
    pub title: Option<String>,
    pub source_url: String,
    /// Authored description, trusted HTML; excerpt is the fallback
    pub description: Option<TrustedHtml>,
    /// Plain-text excerpt derived from the body
    pub excerpt: String,
    /// Pre-formatted display date, e.g. "January 01, 2024"
    pub date: String,
}

/// Ordered project records, order significant (newest first, guaranteed
/// upstream — no in-component sorting).
pub type ProjectCollection = Vec<ProjectRecord>;

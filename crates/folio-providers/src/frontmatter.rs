use serde::Deserialize;

use crate::error::{Error, Result};

/// Frontmatter fence delimiter (TOML dialect)
pub const FENCE: &str = "+++";

/// Maximum excerpt length in characters
pub const EXCERPT_MAX_CHARS: usize = 140;

/// Structured metadata at the head of a content file.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Accepts both quoted strings and bare TOML dates
    date: toml::Value,
    pub source: Option<String>,
    pub description: Option<String>,
}

impl FrontMatter {
    /// The date field as text, regardless of how it was written in TOML.
    pub fn date_text(&self) -> String {
        match &self.date {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Split a content file into parsed frontmatter and the remaining body.
///
/// Expects the file to open with a `+++` fence, TOML metadata, and a
/// closing `+++` fence. A third fence later in the body is left alone.
pub fn split_document(text: &str) -> Result<(FrontMatter, &str)> {
    let mut parts = text.splitn(3, FENCE);
    let lead = parts.next().unwrap_or_default();
    let raw = parts
        .next()
        .ok_or_else(|| Error::Parse("missing frontmatter fence".to_string()))?;
    let body = parts
        .next()
        .ok_or_else(|| Error::Parse("unterminated frontmatter".to_string()))?;
    if !lead.trim().is_empty() {
        return Err(Error::Parse(
            "content before frontmatter fence".to_string(),
        ));
    }

    let front: FrontMatter = toml::from_str(raw)?;
    Ok((front, body.trim_start_matches(['\r', '\n'])))
}

/// Derive a plain-text excerpt from a content body: first non-empty
/// paragraph, whitespace-normalized, truncated.
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let first = body
        .split("\n\n")
        .map(str::trim)
        .find(|p| !p.is_empty())
        .unwrap_or("");

    let normalized = first
        .trim_start_matches('#')
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    truncate(&normalized, max_chars)
}

/// Truncate text to max_chars characters, adding "..." if truncated
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

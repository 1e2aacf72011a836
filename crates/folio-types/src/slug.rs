use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Unique URL-safe identifier for a content record.
///
/// Doubles as the list key and the link target: `Slug("hello-world")`
/// navigates to `/hello-world/`. Uniqueness within a collection is an
/// upstream guarantee (the content layer derives slugs from file stems);
/// the renderer trusts it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Create a Slug from an already-normalized value, rejecting anything
    /// that is not URL-safe (lowercase alphanumerics and hyphens).
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let valid = !raw.is_empty()
            && !raw.starts_with('-')
            && !raw.ends_with('-')
            && raw
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if valid {
            Ok(Self(raw))
        } else {
            Err(Error::InvalidSlug(raw))
        }
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Internal navigable path for this slug
    pub fn href(&self) -> String {
        format!("/{}/", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

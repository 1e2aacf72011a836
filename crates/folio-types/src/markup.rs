use serde::{Deserialize, Serialize};
use std::fmt;

/// Pre-sanitized HTML that may be emitted verbatim.
///
/// The only type the views ever write without escaping. Everything else
/// (titles, dates, excerpts, URLs) goes through the HTML escaper, so the
/// trust boundary is visible in the type system instead of being an
/// implicit property of the content pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Mark a string as trusted HTML. Callers assert that the content
    /// originates from the authored, pre-filtered record set.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Get the raw HTML as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TrustedHtml {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for TrustedHtml {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim() {
        let html = TrustedHtml::new("<p>hi & bye</p>");
        assert_eq!(html.to_string(), "<p>hi & bye</p>");
    }
}

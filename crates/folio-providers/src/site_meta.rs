use serde::Deserialize;
use std::path::Path;

use folio_types::AuthorRecord;

use crate::Result;

/// File name of the site metadata config at the site root
pub const SITE_META_FILE: &str = "site.toml";

/// Site-level metadata, the `site.toml` counterpart of the original
/// generator's `siteMetadata` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteMeta {
    pub author: Option<AuthorMeta>,
}

/// Raw `[author]` table; every field optional in the config.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorMeta {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub school: Option<String>,
}

impl SiteMeta {
    /// Load metadata from a config file. A missing file is an empty
    /// config, not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let meta = toml::from_str(&text)?;
        Ok(meta)
    }

    /// The author record, if a usable (non-empty) name is configured.
    pub fn author_record(&self) -> Option<AuthorRecord> {
        let author = self.author.as_ref()?;
        let name = author.name.as_ref()?.trim();
        if name.is_empty() {
            return None;
        }
        Some(AuthorRecord {
            name: name.to_string(),
            summary: author.summary.clone().filter(|s| !s.trim().is_empty()),
            school: author.school.clone().filter(|s| !s.trim().is_empty()),
        })
    }
}

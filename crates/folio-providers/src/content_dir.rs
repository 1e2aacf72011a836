use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use folio_types::{AuthorRecord, ProjectCollection, ProjectRecord, Slug, TrustedHtml};

use crate::error::{Error, Result};
use crate::frontmatter::{self, EXCERPT_MAX_CHARS};
use crate::site_meta::{SITE_META_FILE, SiteMeta};
use crate::traits::SiteData;

/// Subdirectory of the site root holding content files
pub const CONTENT_SUBDIR: &str = "content";

/// Display format for record dates ("January 01, 2024")
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

/// File-backed site data provider.
///
/// Reads `site.toml` and `content/*.md` under a site root and produces the
/// two query shapes of [`SiteData`]. Scanning is fail-safe: a file that
/// does not parse is skipped with a warning rather than failing the whole
/// query.
pub struct ContentDir {
    root: PathBuf,
}

/// One parsed content file, before query filtering/ordering.
#[derive(Debug, Clone)]
pub(crate) struct ContentEntry {
    pub slug: Slug,
    pub title: Option<String>,
    pub source: Option<String>,
    pub description: Option<String>,
    pub excerpt: String,
    pub date: NaiveDate,
}

impl ContentEntry {
    pub fn has_source(&self) -> bool {
        self.source.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

impl ContentDir {
    /// Open a site root directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::Site(format!(
                "not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a path looks like a content file worth parsing.
    fn probe(path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        if path.extension().is_none_or(|e| e != "md") {
            return false;
        }
        std::fs::metadata(path).is_ok_and(|m| m.len() > 0)
    }

    /// Parse every content file under the site root, in deterministic
    /// (file-name) order. Unparseable files are skipped with a warning.
    pub(crate) fn scan(&self) -> Result<Vec<ContentEntry>> {
        let content_root = self.root.join(CONTENT_SUBDIR);
        if !content_root.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&content_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !Self::probe(path) {
                continue;
            }
            match load_entry(path) {
                Ok(parsed) => entries.push(parsed),
                Err(err) => {
                    eprintln!("Warning: skipping {}: {}", path.display(), err);
                }
            }
        }
        Ok(entries)
    }
}

impl SiteData for ContentDir {
    fn author(&self) -> Result<Option<AuthorRecord>> {
        let meta = SiteMeta::load_from(&self.root.join(SITE_META_FILE))?;
        Ok(meta.author_record())
    }

    fn projects(&self) -> Result<ProjectCollection> {
        let mut entries: Vec<ContentEntry> = self
            .scan()?
            .into_iter()
            .filter(ContentEntry::has_source)
            .collect();

        // Stable sort: equal dates keep scan order
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(entries.into_iter().map(into_record).collect())
    }
}

fn load_entry(path: &Path) -> Result<ContentEntry> {
    let text = std::fs::read_to_string(path)?;
    let (front, body) = frontmatter::split_document(&text)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Parse("unusable file name".to_string()))?;

    Ok(ContentEntry {
        slug: slug_from_stem(stem)?,
        title: front.title.clone(),
        source: front.source.clone(),
        description: front.description.clone(),
        excerpt: frontmatter::excerpt(body, EXCERPT_MAX_CHARS),
        date: parse_date(&front.date_text())?,
    })
}

/// Derive a URL-safe slug from a file stem: lowercased, with runs of
/// anything else collapsed to a single hyphen.
pub fn slug_from_stem(stem: &str) -> Result<Slug> {
    static NON_URL_SAFE: Lazy<Regex> =
        Lazy::new(|| Regex::new("[^a-z0-9]+").expect("valid regex"));

    let lowered = stem.to_lowercase();
    let normalized = NON_URL_SAFE.replace_all(&lowered, "-");
    Slug::parse(normalized.trim_matches('-')).map_err(Error::from)
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|_| Error::Parse(format!("unrecognized date: {:?}", raw)))
}

fn into_record(entry: ContentEntry) -> ProjectRecord {
    let id = record_id(&entry.slug);
    let date = entry.date.format(DISPLAY_DATE_FORMAT).to_string();
    ProjectRecord {
        id,
        slug: entry.slug,
        title: entry.title,
        // has_source filter guarantees presence
        source_url: entry.source.unwrap_or_default(),
        description: entry.description.map(TrustedHtml::new),
        excerpt: entry.excerpt,
        date,
    }
}

fn record_id(slug: &Slug) -> String {
    let digest = Sha256::digest(slug.as_str().as_bytes());
    format!("{:x}", digest)
}

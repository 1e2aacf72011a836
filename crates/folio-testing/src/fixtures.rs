//! Fixtures for building throwaway site directories.
//!
//! A [`SiteFixture`] is a temp directory shaped like a site root:
//! `site.toml` at the top, content files under `content/`. Dropping the
//! fixture removes the directory.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temp-dir site root builder for provider and CLI tests.
pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    /// Create an empty site root.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// The site root path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `site.toml` with an `[author]` table.
    pub fn with_author(self, name: &str, summary: Option<&str>) -> Result<Self> {
        let mut toml = format!("[author]\nname = {:?}\n", name);
        if let Some(summary) = summary {
            toml.push_str(&format!("summary = {:?}\n", summary));
        }
        fs::write(self.root().join("site.toml"), toml)?;
        Ok(self)
    }

    /// Write a content file from raw frontmatter lines and a body. The
    /// file name may contain subdirectories (`nested/post.md`).
    pub fn add_content(&self, file_name: &str, frontmatter: &str, body: &str) -> Result<()> {
        let path = self.root().join("content").join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = format!("+++\n{}\n+++\n\n{}\n", frontmatter.trim_end(), body);
        fs::write(path, text)?;
        Ok(())
    }

    /// Write a well-formed project file (date + source, optional extras).
    pub fn add_project(
        &self,
        file_name: &str,
        date: &str,
        source: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        let mut frontmatter = format!("date = {:?}\nsource = {:?}\n", date, source);
        if let Some(title) = title {
            frontmatter.push_str(&format!("title = {:?}\n", title));
        }
        if let Some(description) = description {
            frontmatter.push_str(&format!("description = {:?}\n", description));
        }
        self.add_content(file_name, &frontmatter, "Body paragraph for the post.")
    }
}

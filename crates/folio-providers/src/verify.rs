use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::content_dir::{ContentDir, DISPLAY_DATE_FORMAT};
use crate::site_meta::{SITE_META_FILE, SiteMeta};
use crate::{Result, SiteData};

/// Severity of a content diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// One finding about the content set
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }
}

/// Check the upstream assumptions the renderers rely on but never enforce:
/// slug uniqueness across the content set and descending date order of the
/// project collection. Also surfaces conditions that silently degrade
/// (missing titles, blank sources, unconfigured author).
pub fn verify(site: &ContentDir) -> Result<Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    let entries = site.scan()?;

    // Slug uniqueness is the list-keying invariant; duplicates typically
    // come from same-named files in different subdirectories.
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for entry in &entries {
        *seen.entry(entry.slug.as_str()).or_insert(0) += 1;
    }
    let mut duplicates: Vec<&&str> = seen
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(slug, _)| slug)
        .collect();
    duplicates.sort();
    for slug in duplicates {
        diagnostics.push(Diagnostic::error(format!(
            "duplicate slug {:?}: list keys and link targets collide",
            slug
        )));
    }

    for entry in &entries {
        if entry.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
            diagnostics.push(Diagnostic::warning(format!(
                "{:?} has no title, heading falls back to the slug",
                entry.slug.as_str()
            )));
        }
        if entry
            .source
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
        {
            diagnostics.push(Diagnostic::warning(format!(
                "{:?} has a blank source, excluded from the project list",
                entry.slug.as_str()
            )));
        }
    }

    // Run the project query and confirm the ordering contract on its
    // actual output, not on the assumption that sorting happened.
    let projects = site.projects()?;
    let parsed_dates: Vec<Option<chrono::NaiveDate>> = projects
        .iter()
        .map(|p| chrono::NaiveDate::parse_from_str(&p.date, DISPLAY_DATE_FORMAT).ok())
        .collect();
    for (pair, dates) in projects.windows(2).zip(parsed_dates.windows(2)) {
        if let (Some(prev), Some(next)) = (dates[0], dates[1])
            && prev < next
        {
            diagnostics.push(Diagnostic::error(format!(
                "project list is not date-descending near {:?}",
                pair[1].slug.as_str()
            )));
        }
    }

    let meta = SiteMeta::load_from(&site.root().join(SITE_META_FILE))?;
    if site.author()?.is_none() {
        let detail = if meta.author.is_some() {
            "author has no usable name"
        } else {
            "no [author] table"
        };
        diagnostics.push(Diagnostic::warning(format!(
            "{}: bio renders the avatar only ({})",
            SITE_META_FILE, detail
        )));
    }

    Ok(diagnostics)
}

use folio_types::ProjectRecord;

use crate::view_models::{ProjectBodyViewModel, ProjectItemViewModel, ProjectListViewModel};

/// Map one record onto its view model, resolving the fallbacks:
/// title -> slug, description -> excerpt.
pub fn present_project(record: &ProjectRecord) -> ProjectItemViewModel {
    let title = record
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| record.slug.as_str().to_string());

    let body = match &record.description {
        Some(html) => ProjectBodyViewModel::Html {
            html: html.as_str().to_string(),
        },
        None => ProjectBodyViewModel::Text {
            text: record.excerpt.clone(),
        },
    };

    ProjectItemViewModel {
        slug: record.slug.as_str().to_string(),
        href: record.slug.href(),
        title,
        date: record.date.clone(),
        source_url: record.source_url.clone(),
        body,
    }
}

/// Map the whole collection, preserving input order exactly.
pub fn present_projects(records: &[ProjectRecord]) -> ProjectListViewModel {
    ProjectListViewModel {
        items: records.iter().map(present_project).collect(),
    }
}

use folio_types::{AuthorRecord, ProjectCollection};

use crate::Result;

/// Typed data-access interface the renderers consume.
///
/// Stands in for the site generator's build-time query layer: each method
/// corresponds to one query shape and returns a fully-shaped result
/// synchronously. Implementations own all filtering and ordering; the
/// renderers never re-sort or re-filter.
pub trait SiteData {
    /// Author query shape: the site's author metadata, if configured.
    fn author(&self) -> Result<Option<AuthorRecord>>;

    /// Project query shape: all content records with a non-empty source,
    /// sorted by date descending.
    fn projects(&self) -> Result<ProjectCollection>;
}

// Error types
pub mod error;

// Typed data-access interface (public API)
pub mod traits;

// Content-directory provider
pub mod content_dir;
pub mod frontmatter;
pub mod site_meta;

// Content diagnostics
pub mod verify;

pub use content_dir::{ContentDir, slug_from_stem};
pub use error::{Error, Result};
pub use frontmatter::{FrontMatter, excerpt, split_document};
pub use site_meta::SiteMeta;
pub use traits::SiteData;
pub use verify::{Diagnostic, DiagnosticLevel, verify};

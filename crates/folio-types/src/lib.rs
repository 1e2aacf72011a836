pub mod error;
pub mod markup;
pub mod records;
pub mod slug;

pub use error::{Error, Result};
pub use markup::TrustedHtml;
pub use records::{AuthorRecord, ProjectCollection, ProjectRecord};
pub use slug::Slug;

// Presentation layer: records flow through presenters into serializable
// view models, views turn view models into HTML fragments. Fallback rules
// (title -> slug, description -> excerpt, summary -> omitted) live in the
// presenters; views only decide markup and escaping.

pub mod assets;
pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;

pub use assets::AvatarAsset;
pub use presenters::{present_bio, present_project, present_projects};
pub use views::{BioView, ProjectListView};

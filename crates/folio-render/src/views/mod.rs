mod bio;
mod project;

pub use bio::{BioView, CONTACT_HANDLE, PROFILE_URL};
pub use project::ProjectListView;

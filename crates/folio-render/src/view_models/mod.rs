mod bio;
mod project;

pub use bio::{AuthorBioViewModel, AvatarViewModel, BioViewModel, ImageSourceViewModel};
pub use project::{ProjectBodyViewModel, ProjectItemViewModel, ProjectListViewModel};

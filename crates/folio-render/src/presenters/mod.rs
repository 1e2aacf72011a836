mod bio;
mod project;

pub use bio::present_bio;
pub use project::{present_project, present_projects};

pub mod bio;
pub mod check;
pub mod page;
pub mod projects;

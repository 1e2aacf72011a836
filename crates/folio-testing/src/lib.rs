//! Testing utilities for folio integration tests.

pub mod fixtures;

pub use fixtures::SiteFixture;

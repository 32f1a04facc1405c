//! Internal test modules - whitebox tests with crate access



/// Markup fixture exercising every entry kind.
pub(crate) const RULES_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/rules.txt");

/// Directory the fixture's resources resolve against.
pub(crate) const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

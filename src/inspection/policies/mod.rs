pub mod version_constraint;

pub use version_constraint::{normalize_version, satisfies, ComposerVersion, VersionConstraint};

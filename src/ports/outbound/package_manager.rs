use crate::inspection::domain::{DependencyReasons, InstalledPackage};
use crate::shared::Result;

/// Which set of direct, non-dev dependencies to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listing {
    /// Every dependency, with latest-version information
    All,
    /// Only dependencies with a newer version available
    Outdated,
    /// Dependencies declared by the project itself, without latest-version information
    Root,
}

/// PackageManager port for querying the installed dependency set
///
/// This port abstracts the external package manager (composer) so the
/// application core never spawns processes directly.
pub trait PackageManager {
    /// Lists installed packages
    ///
    /// # Errors
    /// Returns an error if the package manager cannot be executed at all.
    /// Unparseable output is reported as an empty listing.
    fn installed(&self, listing: Listing) -> Result<Vec<InstalledPackage>>;

    /// Explains why `name` is installed and what blocks an upgrade to `latest`
    ///
    /// # Errors
    /// Returns an error if the package manager cannot be executed at all.
    fn reasons(&self, name: &str, latest: &str) -> Result<DependencyReasons>;
}

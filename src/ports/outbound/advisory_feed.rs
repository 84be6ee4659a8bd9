use crate::inspection::domain::Advisory;
use crate::shared::Result;

/// AdvisoryFeed port for fetching known security advisories
///
/// This port abstracts the remote advisory service (Packagist) queried
/// for a batch of package names.
pub trait AdvisoryFeed {
    /// Fetches every advisory known for the given packages
    ///
    /// # Arguments
    /// * `packages` - Package names of one batch
    ///
    /// # Returns
    /// Advisories of the requested packages, in feed order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The service answers with a non-success status
    /// - The response body cannot be parsed
    fn fetch(&self, packages: &[String]) -> Result<Vec<Advisory>>;
}

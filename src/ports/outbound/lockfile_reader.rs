use crate::inspection::domain::LockSnapshot;
use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading the project's lock file
///
/// This port abstracts the file system operations needed to read
/// `composer.lock` from a project directory.
pub trait LockfileReader {
    /// Reads `composer.lock` from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing composer.lock
    ///
    /// # Returns
    /// The installed name -> version mapping. Malformed content yields an
    /// empty snapshot rather than an error.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The composer.lock file does not exist
    /// - The file is a symbolic link, not a regular file, or too large
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lock_snapshot(&self, project_path: &Path) -> Result<LockSnapshot>;
}

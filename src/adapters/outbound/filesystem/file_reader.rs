use crate::inspection::domain::LockSnapshot;
use crate::ports::outbound::LockfileReader;
use crate::shared::error::PatrolError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name of the lock file inside a project directory
pub const LOCK_FILE_NAME: &str = "composer.lock";

#[derive(Debug, Deserialize)]
struct RawLockFile {
    #[serde(default)]
    packages: Vec<RawLockedPackage>,
}

#[derive(Debug, Deserialize)]
struct RawLockedPackage {
    name: Option<String>,
    version: Option<String>,
}

/// FileSystemReader adapter for reading the lock file from the file system
///
/// This adapter implements the LockfileReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    /// Parses lock file content. Anything unreadable degrades to an empty
    /// snapshot; entries lacking a name or a version are skipped.
    pub fn parse_snapshot(content: &str) -> LockSnapshot {
        let Ok(lock) = serde_json::from_str::<RawLockFile>(content) else {
            return LockSnapshot::empty();
        };

        LockSnapshot::from_entries(
            lock.packages
                .into_iter()
                .filter_map(|package| Some((package.name?, package.version?))),
        )
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lock_snapshot(&self, project_path: &Path) -> Result<LockSnapshot> {
        let lockfile_path = project_path.join(LOCK_FILE_NAME);

        if !lockfile_path.exists() {
            return Err(PatrolError::LockFileNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "Patrol was unable to find a \"{}\" file in \"{}\".\n   \
                     Did you run \"composer install\"?",
                    LOCK_FILE_NAME,
                    project_path.display()
                ),
            }
            .into());
        }

        let content = self
            .safe_read_file(&lockfile_path, LOCK_FILE_NAME)
            .map_err(|e| PatrolError::FileReadError {
                path: lockfile_path.clone(),
                details: e.to_string(),
            })?;

        Ok(Self::parse_snapshot(&content))
    }
}

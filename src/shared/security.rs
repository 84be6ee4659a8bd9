use crate::shared::error::PatrolError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
/// Lock files above this size are rejected before being read into memory
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "composer.lock")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds [`MAX_FILE_SIZE`]
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates the project directory given on the command line.
///
/// The directory must exist, must not be a symbolic link and must be a directory.
pub fn validate_project_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(invalid_project_path(path, "Directory does not exist"));
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| {
        invalid_project_path(path, &format!("Failed to read path metadata: {}", e))
    })?;

    if metadata.is_symlink() {
        return Err(invalid_project_path(
            path,
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.",
        ));
    }

    if !metadata.is_dir() {
        return Err(invalid_project_path(path, "Not a directory"));
    }

    Ok(())
}

fn invalid_project_path(path: &Path, reason: &str) -> anyhow::Error {
    PatrolError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("composer.lock");
        fs::write(&file_path, "{}").unwrap();

        let result = validate_regular_file(&file_path, "composer.lock");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "composer.lock");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.lock");
        let link = temp_dir.path().join("composer.lock");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_regular_file(&link, "composer.lock");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/composer.lock");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/composer.lock");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_project_directory_valid() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_directory(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_directory_nonexistent() {
        let path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_directory(&path).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
        assert!(matches!(
            err.downcast_ref::<PatrolError>(),
            Some(PatrolError::InvalidProjectPath { .. })
        ));
    }

    #[test]
    fn test_validate_project_directory_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("composer.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_directory(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }
}

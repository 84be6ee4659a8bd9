use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between a failed inspection
/// (low score or vulnerable dependencies) and a failure to inspect at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - score at or above the minimum and no vulnerabilities
    Success = 0,
    /// Score below the configured minimum, or a vulnerable dependency was found
    InspectionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing lock file, package manager unavailable, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InspectionFailed => write!(f, "Inspection Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal, user-facing errors.
///
/// Degraded data (malformed lock file, failed advisory request) is never
/// reported through this type; it is substituted with empty data instead.
#[derive(Debug, Error)]
pub enum PatrolError {
    #[error("composer.lock file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockFileNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Unable to run the package manager: {binary}\nDetails: {details}\n\n💡 Hint: Make sure composer is installed and available on your PATH, or pass --composer <BINARY>")]
    PackageManagerUnavailable { binary: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid configuration: {path}\nDetails: {details}\n\n💡 Hint: Check the values in your patrol.config.yml")]
    ConfigError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InspectionFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InspectionFailed),
            "Inspection Failed (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_lock_file_not_found_display() {
        let error = PatrolError::LockFileNotFound {
            path: PathBuf::from("/app/composer.lock"),
            suggestion: "Did you run \"composer install\"?".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("composer.lock file not found"));
        assert!(display.contains("/app/composer.lock"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("composer install"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = PatrolError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("Directory does not exist"));
    }

    #[test]
    fn test_package_manager_unavailable_display() {
        let error = PatrolError::PackageManagerUnavailable {
            binary: "composer".to_string(),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unable to run the package manager: composer"));
        assert!(display.contains("No such file or directory"));
        assert!(display.contains("--composer"));
    }

    #[test]
    fn test_config_error_display() {
        let error = PatrolError::ConfigError {
            path: PathBuf::from("patrol.config.yml"),
            details: "min must be a finite, non-negative number".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("non-negative"));
    }

    #[test]
    fn test_errors_downcast_through_anyhow() {
        let error: anyhow::Error = PatrolError::FileReadError {
            path: PathBuf::from("/test/file"),
            details: "Permission denied".to_string(),
        }
        .into();
        assert!(matches!(
            error.downcast_ref::<PatrolError>(),
            Some(PatrolError::FileReadError { .. })
        ));
    }
}

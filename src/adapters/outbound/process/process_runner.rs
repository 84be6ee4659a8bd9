use crate::ports::outbound::CommandRunner;
use crate::shared::error::PatrolError;
use crate::shared::Result;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// ProcessCommandRunner adapter running the package manager as a subprocess
///
/// Commands run inside the project directory. Only standard output is
/// captured; the exit status is ignored because composer reports "nothing
/// found" through it.
pub struct ProcessCommandRunner {
    binary: String,
    working_dir: PathBuf,
}

impl ProcessCommandRunner {
    pub fn new(binary: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.working_dir)
            .env("COMPOSER_NO_INTERACTION", "1")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| PatrolError::PackageManagerUnavailable {
                binary: self.binary.clone(),
                details: e.to_string(),
            })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_binary_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new("patrol-no-such-binary-xyz", temp_dir.path());

        let err = runner.run(&["show"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PatrolError>(),
            Some(PatrolError::PackageManagerUnavailable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new("echo", temp_dir.path());

        assert_eq!(runner.run(&["hello", "world"]).unwrap(), "hello world\n");
        assert_eq!(runner.binary(), "echo");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new("false", temp_dir.path());

        assert_eq!(runner.run(&[]).unwrap(), "");
    }
}

use patrol::prelude::*;
use std::path::Path;

/// Mock LockfileReader for testing
pub struct MockLockfileReader {
    pub packages: Vec<(String, String)>,
    pub should_fail: bool,
}

impl MockLockfileReader {
    pub fn new(packages: &[(&str, &str)]) -> Self {
        Self {
            packages: packages
                .iter()
                .map(|(name, version)| (name.to_string(), version.to_string()))
                .collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            packages: Vec::new(),
            should_fail: true,
        }
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lock_snapshot(&self, _project_path: &Path) -> Result<LockSnapshot> {
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        Ok(LockSnapshot::from_entries(self.packages.clone()))
    }
}

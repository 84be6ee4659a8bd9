use patrol::prelude::*;
use std::cell::RefCell;

/// Mock AdvisoryFeed for testing; records every requested batch
#[derive(Default)]
pub struct MockAdvisoryFeed {
    advisories: Vec<Advisory>,
    should_fail: bool,
    requests: RefCell<Vec<Vec<String>>>,
}

impl MockAdvisoryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_advisory(mut self, package: &str, title: &str, affected_versions: &str) -> Self {
        self.advisories.push(Advisory {
            package_name: package.to_string(),
            title: title.to_string(),
            link: format!("https://github.com/advisories/{}", title.replace(' ', "-")),
            reported_at: "2023-01-01 10:00:00".to_string(),
            affected_versions: affected_versions.to_string(),
            cve: None,
        });
        self
    }

    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.borrow().clone()
    }
}

impl AdvisoryFeed for MockAdvisoryFeed {
    fn fetch(&self, packages: &[String]) -> Result<Vec<Advisory>> {
        self.requests.borrow_mut().push(packages.to_vec());
        if self.should_fail {
            anyhow::bail!("Mock advisory feed failure");
        }
        Ok(self
            .advisories
            .iter()
            .filter(|advisory| packages.contains(&advisory.package_name))
            .cloned()
            .collect())
    }
}

use crate::inspection::domain::{LockSnapshot, Vulnerability};
use crate::inspection::services::AdvisoryMatcher;
use crate::ports::outbound::AdvisoryFeed;
use crate::shared::{Collection, Key};
use std::cell::{Cell, OnceCell};

/// Number of package names sent per advisory request
pub const BATCH_SIZE: usize = 30;

/// AdvisoryClient - correlates the lock snapshot with the advisory feed
///
/// The feed is queried lazily, once per run, in batches of [`BATCH_SIZE`]
/// package names. A batch that fails contributes no vulnerabilities.
pub struct AdvisoryClient<'a, F> {
    feed: &'a F,
    snapshot: LockSnapshot,
    vulnerabilities: OnceCell<Collection<Vulnerability>>,
    failed_batches: Cell<usize>,
}

impl<'a, F: AdvisoryFeed> AdvisoryClient<'a, F> {
    pub fn new(feed: &'a F, snapshot: LockSnapshot) -> Self {
        Self {
            feed,
            snapshot,
            vulnerabilities: OnceCell::new(),
            failed_batches: Cell::new(0),
        }
    }

    /// Every vulnerability affecting a locked version, fetched on first use.
    pub fn vulnerabilities(&self) -> &Collection<Vulnerability> {
        self.vulnerabilities.get_or_init(|| self.load())
    }

    pub fn vulnerabilities_of(&self, package_name: &str) -> Vec<Vulnerability> {
        self.vulnerabilities()
            .filter(|vulnerability, _| vulnerability.package_name() == package_name)
            .into_vec()
    }

    /// Number of batches whose request failed.
    pub fn failed_batches(&self) -> usize {
        self.failed_batches.get()
    }

    fn load(&self) -> Collection<Vulnerability> {
        self.snapshot
            .dependencies()
            .chunk(BATCH_SIZE)
            .map(|batch, _| self.fetch_batch(batch))
            .flatten()
    }

    fn fetch_batch(&self, batch: &Collection<String>) -> Collection<Vulnerability> {
        let names: Vec<String> = batch
            .keys()
            .into_vec()
            .into_iter()
            .filter_map(|key| key.as_name().map(str::to_string))
            .collect();

        let Ok(advisories) = self.feed.fetch(&names) else {
            self.failed_batches.set(self.failed_batches.get() + 1);
            return Collection::new();
        };

        advisories
            .iter()
            .filter_map(|advisory| {
                let installed = batch.get(Key::from(advisory.package_name.as_str()))?;
                AdvisoryMatcher::narrow(advisory, installed)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::domain::Advisory;
    use crate::shared::Result;
    use std::cell::RefCell;

    struct StubFeed {
        advisories: Vec<Advisory>,
        fail: bool,
        requests: RefCell<Vec<Vec<String>>>,
    }

    impl StubFeed {
        fn new(advisories: Vec<Advisory>) -> Self {
            Self {
                advisories,
                fail: false,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(Vec::new())
            }
        }
    }

    impl AdvisoryFeed for StubFeed {
        fn fetch(&self, packages: &[String]) -> Result<Vec<Advisory>> {
            self.requests.borrow_mut().push(packages.to_vec());
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self
                .advisories
                .iter()
                .filter(|advisory| packages.contains(&advisory.package_name))
                .cloned()
                .collect())
        }
    }

    fn advisory(package: &str, affected: &str) -> Advisory {
        Advisory {
            package_name: package.to_string(),
            title: "X".to_string(),
            link: "https://x".to_string(),
            reported_at: "2023-01-01".to_string(),
            affected_versions: affected.to_string(),
            cve: None,
        }
    }

    #[test]
    fn test_narrows_advisories_to_locked_version() {
        let feed = StubFeed::new(vec![advisory("acme/log", "<1.3.0|>=2.0.0,<2.1.0")]);
        let client = AdvisoryClient::new(&feed, LockSnapshot::from_entries(vec![("acme/log", "1.2.0")]));

        let vulnerabilities = client.vulnerabilities_of("acme/log");

        assert_eq!(vulnerabilities.len(), 1);
        assert_eq!(vulnerabilities[0].affected_versions(), "<1.3.0");
        assert_eq!(vulnerabilities[0].current(), "1.2.0");
        assert!(client.vulnerabilities_of("acme/http").is_empty());
    }

    #[test]
    fn test_unmatched_advisory_yields_nothing() {
        let feed = StubFeed::new(vec![advisory("acme/log", "<1.0.0")]);
        let client = AdvisoryClient::new(&feed, LockSnapshot::from_entries(vec![("acme/log", "1.2.0")]));

        assert!(client.vulnerabilities().is_empty());
    }

    #[test]
    fn test_batches_of_thirty_and_single_fetch() {
        let entries: Vec<(String, String)> = (0..65)
            .map(|i| (format!("acme/pkg-{}", i), "1.0.0".to_string()))
            .collect();
        let feed = StubFeed::new(Vec::new());
        let client = AdvisoryClient::new(&feed, LockSnapshot::from_entries(entries));

        client.vulnerabilities_of("acme/pkg-0");
        client.vulnerabilities_of("acme/pkg-1");

        let requests = feed.requests.borrow();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].len(), 30);
        assert_eq!(requests[1].len(), 30);
        assert_eq!(requests[2].len(), 5);
        assert_eq!(requests[0][0], "acme/pkg-0");
    }

    #[test]
    fn test_failed_batch_is_empty() {
        let feed = StubFeed::failing();
        let client = AdvisoryClient::new(&feed, LockSnapshot::from_entries(vec![("acme/log", "1.2.0")]));

        assert!(client.vulnerabilities().is_empty());
        assert_eq!(client.failed_batches(), 1);
    }

    #[test]
    fn test_empty_snapshot_makes_no_request() {
        let feed = StubFeed::new(Vec::new());
        let client = AdvisoryClient::new(&feed, LockSnapshot::empty());

        assert!(client.vulnerabilities().is_empty());
        assert!(feed.requests.borrow().is_empty());
    }
}

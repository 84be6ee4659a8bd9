use patrol::inspection::domain::DependencyReasons;
use patrol::ports::outbound::Listing;
use patrol::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock PackageManager serving canned listings and reasons
#[derive(Default)]
pub struct MockPackageManager {
    listings: HashMap<Listing, Vec<InstalledPackage>>,
    reasons: HashMap<String, DependencyReasons>,
    calls: RefCell<Vec<String>>,
}

impl MockPackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, listing: Listing, packages: Vec<InstalledPackage>) -> Self {
        self.listings.insert(listing, packages);
        self
    }

    pub fn with_reasons(mut self, name: &str, requirers: &[&str], blockers: &[&str]) -> Self {
        self.reasons.insert(
            name.to_string(),
            DependencyReasons {
                requirers: requirers.iter().map(|s| s.to_string()).collect(),
                blockers: blockers.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }

    /// Every call made so far, as `installed:<listing>` or `reasons:<name>`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl PackageManager for MockPackageManager {
    fn installed(&self, listing: Listing) -> Result<Vec<InstalledPackage>> {
        self.calls
            .borrow_mut()
            .push(format!("installed:{:?}", listing));
        Ok(self.listings.get(&listing).cloned().unwrap_or_default())
    }

    fn reasons(&self, name: &str, _latest: &str) -> Result<DependencyReasons> {
        self.calls.borrow_mut().push(format!("reasons:{}", name));
        Ok(self.reasons.get(name).cloned().unwrap_or_default())
    }
}

use crate::application::services::DependencyRepository;
use crate::inspection::domain::Dependency;
use crate::ports::outbound::{AdvisoryFeed, PackageManager};
use crate::shared::Result;

/// Result of the listing step
#[derive(Debug, Clone, PartialEq)]
pub struct DependenciesListOutcome {
    /// Dependencies that are outdated or vulnerable, in listing order
    pub entries: Vec<Dependency>,
    /// True when any dependency carries a vulnerability
    pub failed: bool,
}

/// DependenciesListHandler - selects the dependencies worth reporting
pub struct DependenciesListHandler;

impl DependenciesListHandler {
    pub fn handle<PM, F>(
        repository: &DependencyRepository<'_, PM, F>,
    ) -> Result<DependenciesListOutcome>
    where
        PM: PackageManager,
        F: AdvisoryFeed,
    {
        let all = repository.all()?;

        let failed = all.iter().any(|(_, dependency)| dependency.is_vulnerable());
        let entries = all
            .filter(|dependency, _| dependency.is_reportable())
            .into_vec();

        Ok(DependenciesListOutcome { entries, failed })
    }
}

use crate::application::services::DependencyRepository;
use crate::inspection::domain::Score;
use crate::inspection::services::ScoreCalculator;
use crate::ports::outbound::{AdvisoryFeed, PackageManager};
use crate::shared::Result;

/// Result of the scoring step
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    pub score: Score,
    /// True when the score is below the configured minimum
    pub failed: bool,
}

/// ScoreHandler - reduces the repository views into a single [`Score`]
pub struct ScoreHandler {
    min: f64,
}

impl ScoreHandler {
    pub fn new(min: f64) -> Self {
        Self { min }
    }

    pub fn handle<PM, F>(&self, repository: &DependencyRepository<'_, PM, F>) -> Result<ScoreOutcome>
    where
        PM: PackageManager,
        F: AdvisoryFeed,
    {
        let all = repository.all()?;
        let updated = repository.updated()?;
        let outdated = repository.outdated()?;

        let vulnerabilities = all
            .map(|dependency, _| dependency.vulnerabilities().to_vec())
            .flatten();

        let score = ScoreCalculator::calculate(
            all.count(),
            updated.count(),
            outdated.count(),
            vulnerabilities.count(),
        );

        Ok(ScoreOutcome {
            failed: score.is_below(self.min),
            score,
        })
    }
}

use crate::application::dto::{InspectRequest, InspectResponse};
use crate::application::handlers::{DependenciesListHandler, ScoreHandler};
use crate::application::read_models::InspectionReport;
use crate::application::services::{AdvisoryClient, DependencyRepository};
use crate::inspection::domain::LockSnapshot;
use crate::ports::outbound::{AdvisoryFeed, LockfileReader, PackageManager, ProgressReporter};
use crate::shared::Result;

/// Number of steps reported through the progress bar
const TOTAL_STEPS: usize = 3;

/// InspectDependenciesUseCase - Core use case of the inspector
///
/// Reads the lock file, queries the package manager and the advisory feed,
/// then runs the scoring and listing handlers against one repository.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PM` - PackageManager implementation
/// * `F` - AdvisoryFeed implementation
/// * `PR` - ProgressReporter implementation
pub struct InspectDependenciesUseCase<LR, PM, F, PR> {
    lockfile_reader: LR,
    package_manager: PM,
    advisory_feed: F,
    progress_reporter: PR,
}

impl<LR, PM, F, PR> InspectDependenciesUseCase<LR, PM, F, PR>
where
    LR: LockfileReader,
    PM: PackageManager,
    F: AdvisoryFeed,
    PR: ProgressReporter,
{
    /// Creates a new InspectDependenciesUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, package_manager: PM, advisory_feed: F, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            package_manager,
            advisory_feed,
            progress_reporter,
        }
    }

    /// Executes the inspection
    ///
    /// # Errors
    /// Returns an error if the lock file is missing or unreadable, or if the
    /// package manager cannot be executed. Advisory feed failures only
    /// produce a warning.
    pub fn execute(&self, request: InspectRequest) -> Result<InspectResponse> {
        // Step 1: Read the lock file
        let snapshot = self.read_and_report_lock_snapshot(&request)?;

        // Step 2: Correlate with the advisory feed
        self.progress_reporter
            .report_progress(1, TOTAL_STEPS, Some("Checking security advisories"));
        let advisories = AdvisoryClient::new(&self.advisory_feed, snapshot);
        let vulnerable = advisories.vulnerabilities().count();

        if advisories.failed_batches() > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} advisory request(s) failed; vulnerabilities may be missing.",
                advisories.failed_batches()
            ));
        }

        // Step 3: Query the package manager and score
        self.progress_reporter
            .report_progress(2, TOTAL_STEPS, Some("Querying composer"));
        let repository = DependencyRepository::new(
            &self.package_manager,
            &advisories,
            request.exclude_packages.clone(),
        );
        let score = ScoreHandler::new(request.min).handle(&repository)?;

        // Step 4: Select the dependencies to report
        self.progress_reporter
            .report_progress(3, TOTAL_STEPS, Some("Building report"));
        let listing = DependenciesListHandler::handle(&repository)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Inspection complete: {} dependencies, {} known vulnerabilities in composer.lock",
            score.score.dependencies(),
            vulnerable
        ));

        let failed = score.failed || listing.failed;
        Ok(InspectResponse::new(
            InspectionReport::new(score.score, listing.entries),
            failed,
        ))
    }

    /// Reads the lock snapshot, reporting progress
    fn read_and_report_lock_snapshot(&self, request: &InspectRequest) -> Result<LockSnapshot> {
        self.progress_reporter.report(&format!(
            "📖 Loading composer.lock from: {}",
            request.project_path.display()
        ));

        let snapshot = self
            .lockfile_reader
            .read_lock_snapshot(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "🔍 Inspecting {} locked packages...",
            snapshot.len()
        ));

        Ok(snapshot)
    }
}

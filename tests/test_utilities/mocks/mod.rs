/// Mock implementations for testing
mod mock_advisory_feed;
mod mock_lockfile_reader;
mod mock_package_manager;
mod mock_progress_reporter;

pub use mock_advisory_feed::MockAdvisoryFeed;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_package_manager::MockPackageManager;
pub use mock_progress_reporter::MockProgressReporter;

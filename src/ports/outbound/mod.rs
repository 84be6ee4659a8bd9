/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, package manager,
/// advisory feed, console).
pub mod advisory_feed;
pub mod command_runner;
pub mod formatter;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod package_manager;
pub mod progress_reporter;

pub use advisory_feed::AdvisoryFeed;
pub use command_runner::CommandRunner;
pub use formatter::ReportFormatter;
pub use lockfile_reader::LockfileReader;
pub use output_presenter::OutputPresenter;
pub use package_manager::{Listing, PackageManager};
pub use progress_reporter::ProgressReporter;

//! patrol - dependency inspector for Composer projects
//!
//! Reads `composer.lock`, asks composer which dependencies are outdated,
//! checks the locked versions against the Packagist security-advisories
//! feed and reduces everything to a score, following hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inspection`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use patrol::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let project = PathBuf::from(".");
//!
//! // Create adapters
//! let runner = CachingCommandRunner::new(ProcessCommandRunner::new("composer", project.clone()));
//! let use_case = InspectDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     ComposerBinary::new(runner),
//!     PackagistAdvisoryFeed::new()?,
//!     StderrProgressReporter::new(false),
//! );
//!
//! // Execute
//! let response = use_case.execute(InspectRequest::new(project, 80.0, vec![]))?;
//!
//! // Format output
//! let formatter = ListFormatter::new(RenderOptions::default());
//! println!("{}", formatter.format(&response.report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inspection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{ListFormatter, TableFormatter};
    pub use crate::adapters::outbound::network::PackagistAdvisoryFeed;
    pub use crate::adapters::outbound::process::{
        CachingCommandRunner, ComposerBinary, ProcessCommandRunner,
    };
    pub use crate::application::dto::{InspectRequest, InspectResponse, RenderOptions, ReportFormat};
    pub use crate::application::read_models::InspectionReport;
    pub use crate::application::use_cases::InspectDependenciesUseCase;
    pub use crate::inspection::domain::{
        Advisory, Dependency, InstalledPackage, LatestStatus, LockSnapshot, Score, ScoreColor,
        Vulnerability,
    };
    pub use crate::inspection::policies::VersionConstraint;
    pub use crate::inspection::services::{AdvisoryMatcher, ScoreCalculator};
    pub use crate::ports::outbound::{
        AdvisoryFeed, CommandRunner, LockfileReader, OutputPresenter, PackageManager,
        ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}

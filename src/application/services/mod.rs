//! Application services - stateful collaborators built once per inspection run.
mod advisory_client;
mod dependency_repository;

pub use advisory_client::{AdvisoryClient, BATCH_SIZE};
pub use dependency_repository::{DependencyRepository, DEFAULT_EXCLUDED_PACKAGES};

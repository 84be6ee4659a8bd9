//! Handlers run in sequence against one dependency repository; each one
//! may mark the inspection as failed.
mod dependencies_list;
mod score;

pub use dependencies_list::{DependenciesListHandler, DependenciesListOutcome};
pub use score::{ScoreHandler, ScoreOutcome};

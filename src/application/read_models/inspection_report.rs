//! Inspection report read model
//!
//! Aggregates everything the report formatters need: the score and the
//! dependencies worth a line in the report.

use crate::inspection::domain::{Dependency, Score, Vulnerability};

/// Read model rendered by the report formatters
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionReport {
    /// Health score of the whole dependency set
    pub score: Score,
    /// Outdated or vulnerable dependencies, in listing order
    pub entries: Vec<Dependency>,
}

impl InspectionReport {
    pub fn new(score: Score, entries: Vec<Dependency>) -> Self {
        Self { score, entries }
    }

    /// Every vulnerability of the reported dependencies, grouped by dependency
    pub fn vulnerabilities(&self) -> impl Iterator<Item = &Vulnerability> {
        self.entries
            .iter()
            .flat_map(|dependency| dependency.vulnerabilities().iter())
    }

    pub fn has_vulnerabilities(&self) -> bool {
        self.entries.iter().any(Dependency::is_vulnerable)
    }
}

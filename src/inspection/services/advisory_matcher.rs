use crate::inspection::domain::{Advisory, Vulnerability};
use crate::inspection::policies::satisfies;

/// AdvisoryMatcher service for narrowing advisories to an installed version
///
/// Pure logic: no I/O, works only with domain objects.
pub struct AdvisoryMatcher;

impl AdvisoryMatcher {
    /// Splits a raw `affectedVersions` value into its clauses.
    ///
    /// Clauses are separated by `|`; commas inside a clause are treated as
    /// whitespace-separated conjunctions.
    pub fn clauses(affected_versions: &str) -> Vec<String> {
        affected_versions
            .split('|')
            .map(|clause| clause.replace(',', " ").trim().to_string())
            .filter(|clause| !clause.is_empty())
            .collect()
    }

    /// Returns a vulnerability built from the first clause satisfied by
    /// `installed`, or `None` when no clause matches.
    pub fn narrow(advisory: &Advisory, installed: &str) -> Option<Vulnerability> {
        Self::clauses(&advisory.affected_versions)
            .into_iter()
            .find(|clause| satisfies(installed, clause))
            .map(|clause| Vulnerability::from_advisory(advisory, clause, installed.to_string()))
    }
}

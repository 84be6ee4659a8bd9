use crate::shared::collect;

/// Extracts package names from the plain-text output of `why` and `why-not`.
pub struct ReasonParser;

impl ReasonParser {
    /// First whitespace-separated token of every non-blank line.
    pub fn first_tokens(output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect()
    }

    /// Packages requiring the inspected one, without duplicates.
    pub fn requirers(output: &str) -> Vec<String> {
        collect(Self::first_tokens(output)).unique().into_vec()
    }

    /// Reasons preventing an upgrade, in the order they were reported.
    pub fn blockers(output: &str) -> Vec<String> {
        Self::first_tokens(output)
    }
}

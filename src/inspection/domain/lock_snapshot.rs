use crate::shared::{Collection, Key};

/// Immutable name -> installed-version mapping read once from the lock file.
///
/// This is the source of truth for which versions are queried against the
/// advisory feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockSnapshot {
    dependencies: Collection<String>,
}

impl LockSnapshot {
    /// Builds a snapshot from `(name, version)` pairs; a repeated name keeps
    /// the last version.
    pub fn from_entries<I, N, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            dependencies: Collection::from_pairs(
                entries
                    .into_iter()
                    .map(|(name, version)| (Key::Name(name.into()), version.into())),
            ),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Installed versions keyed by package name.
    pub fn dependencies(&self) -> &Collection<String> {
        &self.dependencies
    }

    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dependencies.count()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_deduplicates() {
        let snapshot = LockSnapshot::from_entries(vec![
            ("acme/log", "1.0.0"),
            ("acme/http", "2.0.0"),
            ("acme/log", "1.2.0"),
        ]);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.version_of("acme/log"), Some("1.2.0"));
        assert_eq!(snapshot.version_of("acme/http"), Some("2.0.0"));
        assert_eq!(snapshot.version_of("missing"), None);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = LockSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.dependencies().count(), 0);
    }
}

use crate::ports::outbound::CommandRunner;
use crate::shared::Result;
use dashmap::DashMap;

/// CachingCommandRunner wraps a CommandRunner and memoizes its output.
///
/// This adapter implements the decorator pattern: an identical command is
/// executed at most once per run, keyed by its exact argument string.
/// Failed invocations are not cached.
pub struct CachingCommandRunner<R: CommandRunner> {
    inner: R,
    cache: DashMap<String, String>,
}

impl<R: CommandRunner> CachingCommandRunner<R> {
    /// Creates a new caching runner wrapping the given inner runner
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }

    fn cache_key(args: &[&str]) -> String {
        args.join(" ")
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<R: CommandRunner> CommandRunner for CachingCommandRunner<R> {
    fn run(&self, args: &[&str]) -> Result<String> {
        let key = Self::cache_key(args);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let output = self.inner.run(args)?;
        self.cache.insert(key, output.clone());

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock runner that tracks call counts
    struct CountingRunner {
        call_count: AtomicUsize,
        fail: bool,
    }

    impl CountingRunner {
        fn new(fail: bool) -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                fail,
            }
        }

        fn get_call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    impl CommandRunner for CountingRunner {
        fn run(&self, args: &[&str]) -> Result<String> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("cannot run");
            }
            Ok(args.join("+"))
        }
    }

    #[test]
    fn test_identical_command_runs_once() {
        let runner = CachingCommandRunner::new(CountingRunner::new(false));

        assert_eq!(runner.run(&["why", "acme/log"]).unwrap(), "why+acme/log");
        assert_eq!(runner.run(&["why", "acme/log"]).unwrap(), "why+acme/log");

        assert_eq!(runner.inner.get_call_count(), 1);
        assert_eq!(runner.cache_size(), 1);
    }

    #[test]
    fn test_different_commands_cached_separately() {
        let runner = CachingCommandRunner::new(CountingRunner::new(false));

        runner.run(&["why", "acme/log"]).unwrap();
        runner.run(&["why", "acme/http"]).unwrap();

        assert_eq!(runner.inner.get_call_count(), 2);
        assert_eq!(runner.cache_size(), 2);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let runner = CachingCommandRunner::new(CountingRunner::new(true));

        assert!(runner.run(&["show"]).is_err());
        assert!(runner.run(&["show"]).is_err());

        assert_eq!(runner.inner.get_call_count(), 2);
        assert_eq!(runner.cache_size(), 0);
    }
}

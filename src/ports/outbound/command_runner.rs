use crate::shared::Result;

/// CommandRunner port for running package-manager commands
pub trait CommandRunner {
    /// Runs the package manager with `args` and returns its standard output.
    ///
    /// # Errors
    /// Returns an error only when the command cannot be started. A non-zero
    /// exit status is not an error.
    fn run(&self, args: &[&str]) -> Result<String>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String> {
        (**self).run(args)
    }
}

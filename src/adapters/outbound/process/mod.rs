/// Process adapters for running the package manager
mod caching_runner;
mod composer_binary;
mod process_runner;

pub use caching_runner::CachingCommandRunner;
pub use composer_binary::ComposerBinary;
pub use process_runner::ProcessCommandRunner;

/// Filesystem adapters for file I/O operations
mod file_reader;
mod stdout_presenter;

pub use file_reader::{FileSystemReader, LOCK_FILE_NAME};
pub use stdout_presenter::StdoutPresenter;

/// Shared kernel - error types, result alias, file-safety checks and the
/// sequence container used as the pipeline's data-flow medium.
pub mod collection;
pub mod error;
pub mod result;
pub mod security;

pub use collection::{collect, Collection, Key, Truthy};
pub use result::Result;

pub mod advisory;
pub mod dependency;
pub mod lock_snapshot;
pub mod score;

pub use advisory::{Advisory, Vulnerability};
pub use dependency::{Dependency, DependencyReasons, InstalledPackage, LatestStatus, UpdateSafety};
pub use lock_snapshot::LockSnapshot;
pub use score::{Score, ScoreColor};

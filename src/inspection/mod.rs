//! Inspection domain - dependency records, advisories, lock snapshots and the
//! pure rules used to correlate and score them.
pub mod domain;
pub mod policies;
pub mod services;

//! Data the engine hands to the world outside a session.
//!
//! - `summary`: ranking/share payload and mission report for a settled session
//! - `snapshot`: binary save/resume of an in-progress session

pub mod snapshot;
pub mod summary;

pub use snapshot::SessionSnapshot;
pub use summary::{MissionReport, SessionSummary};

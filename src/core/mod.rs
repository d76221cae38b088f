//! core
//!
//! Domain types, path routing, and the configuration store.

pub mod paths;
pub mod storage;
pub mod types;

pub use storage::{Document, Store};
pub use types::{CommitType, TypeError, INIT_COMMIT_MESSAGE};

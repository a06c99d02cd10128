//! Replay a JSON task export into a Habitica account.
//!
//! The import is a single sequential pass, driven end to end by [`run`]:
//!
//! 1. [`ImportBatch::load`] reads `{ "data": { "tasks": [...] } }` from disk
//! 2. [`TagResolver::fetch_existing_tags`] seeds a [`TagRegistry`] from the account
//! 3. [`TaskReplayer::import_batch`] resolves each task's tag names to ids,
//!    drops unsupported fields, submits the task and paces requests
//! 4. The returned [`RunSummary`] is printed as the final report
//!
//! Per-task rejections are recorded and the loop continues. Only a transport
//! failure ends the run early, surfacing as [`ImportError::Service`].

pub mod batch;
pub mod config;
pub mod error;
pub mod replay;
pub mod summary;
pub mod tags;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::{ImportBatch, Task, UNSUPPORTED_FIELDS};
pub use config::ImportConfig;
pub use error::ImportError;
pub use replay::{run, TaskReplayer};
pub use summary::{RunSummary, TaskFailure};
pub use tags::{TagRegistry, TagResolver};

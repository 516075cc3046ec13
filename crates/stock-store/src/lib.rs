//! Persistent product storage for SmartStock.
//!
//! This crate owns the authoritative product collection for a device and
//! keeps it durable across restarts. The durable record is a single JSON
//! file holding the full collection; every mutation re-serializes the whole
//! snapshot as one atomic unit.
//!
//! # Consistency
//!
//! Mutators persist the candidate collection first and only then replace the
//! in-memory snapshot. A rejected durable write therefore leaves the store
//! exactly as it was, and a subsequent read can never observe memory and
//! disk out of sync.
//!
//! # Architecture
//!
//! - `store` - the [`ProductStore`] collection and its operations
//! - `backend` - the [`SnapshotBackend`] seam plus file and in-memory
//!   implementations
//! - `io/` - snapshot file reading and writing (atomic writes)
//! - `error` - error types with user-friendly messages

mod backend;
mod error;
mod io;
mod store;

pub use backend::{JsonFileBackend, MemoryBackend, SnapshotBackend};
pub use error::{Result, StoreError};
pub use io::{load_snapshot, save_snapshot};
pub use store::ProductStore;

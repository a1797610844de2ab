//! amedit engine - change orchestration
//!
//! Wraps the core `apply()` entry point with snapshot-based undo/redo,
//! change reports and lifecycle logging.

pub mod config;
pub mod context;

pub use config::ChangeContextConfig;
pub use context::{ChangeContext, HistoryEntry};

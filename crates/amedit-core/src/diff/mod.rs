//! Change reports.
//!
//! Compares the snapshots taken before and after a change and reports, per
//! identity key, which documents were created, modified and removed.
//!
//! ```ignore
//! use amedit_core::diff::{compute_report, render_report};
//!
//! let report = compute_report(&before, &after, true, change.describe());
//! println!("{}", render_report(&report));
//! ```

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_report, statement_delta};
pub use human_summary::render_report;
pub use model::{ChangeReport, StatementDelta};

//! Undo/redo controller with boundary logging.
//!
//! `ChangeContext` owns one workspace. Every applied change is recorded as a
//! pair of snapshots (before, after); undo restores `before`, redo restores
//! `after`. Changes never need an inverse of their own.
//!
//! ## Logging Ownership
//!
//! The context owns lifecycle logging for `apply_change`, `undo_change` and
//! `redo_change`:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//! - a `noop` event when there is nothing to undo or redo
//!
//! The kernel emits only `tracing::debug!` details underneath.

use std::collections::BTreeSet;
use std::time::Instant;

use amedit_core::diff::{compute_report, ChangeReport};
use amedit_core::errors::Result;
use amedit_core::model::DocumentKey;
use amedit_core::snapshot::Snapshot;
use amedit_core::workspace::Workspace;
use amedit_core::{apply, log_op_end, log_op_error, log_op_start, Change};
use amedit_core_types::schema::EVENT_NOOP;
use amedit_core_types::ChangeId;
use chrono::{DateTime, Utc};

use crate::config::ChangeContextConfig;

/// One undoable change
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    id: ChangeId,
    kind: &'static str,
    description: String,
    before: Snapshot,
    after: Snapshot,
}

impl HistoryEntry {
    pub fn id(&self) -> &ChangeId {
        &self.id
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn before(&self) -> &Snapshot {
        &self.before
    }

    pub fn after(&self) -> &Snapshot {
        &self.after
    }

    /// When the change was applied
    pub fn applied_at(&self) -> DateTime<Utc> {
        self.after.captured_at()
    }
}

pub struct ChangeContext {
    workspace: Workspace,
    config: ChangeContextConfig,
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    last: ChangeReport,
}

impl ChangeContext {
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(workspace: Workspace, config: ChangeContextConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            workspace,
            config,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            last: ChangeReport::default(),
        })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn into_workspace(self) -> Workspace {
        self.workspace
    }

    pub fn config(&self) -> &ChangeContextConfig {
        &self.config
    }

    /// Apply a change and record it for undo
    ///
    /// Clears the redo stack. On failure the workspace is restored to the
    /// snapshot taken before the call and history is left as it was.
    ///
    /// # Errors
    ///
    /// Returns the change's precondition violation, or `GroupMemberFailed`
    /// for a failing group member.
    pub fn apply_change(&mut self, change: Change) -> Result<ChangeReport> {
        let kind = change.kind();
        log_op_start!("apply_change", change_kind = kind);
        let start = Instant::now();

        let before = Snapshot::capture(&self.workspace);
        let workspace = std::mem::take(&mut self.workspace);
        self.workspace = match apply(workspace, &change, &self.config) {
            Ok(next) => next,
            Err(e) => {
                self.workspace = before.restore();
                log_op_error!(
                    "apply_change",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    change_kind = kind
                );
                return Err(e);
            }
        };

        let after = Snapshot::capture(&self.workspace);
        let description = change.describe();
        let report = compute_report(
            &before,
            &after,
            self.config.detailed_change_report,
            description.clone(),
        );
        let entry = HistoryEntry {
            id: ChangeId::new(),
            kind,
            description,
            before,
            after,
        };
        let change_id = entry.id.clone();

        self.undo_stack.push(entry);
        self.redo_stack.clear();
        self.trim_history();
        self.last = report.clone();

        log_op_end!(
            "apply_change",
            duration_ms = start.elapsed().as_millis() as u64,
            change_kind = kind,
            change_id = %change_id,
            created = report.created.len() as u64,
            modified = report.modified.len() as u64,
            removed = report.removed.len() as u64
        );
        Ok(report)
    }

    /// Restore the workspace to before the most recent change
    ///
    /// Returns `None` if there is nothing to undo. The returned report
    /// describes the restoring transition.
    pub fn undo_change(&mut self) -> Option<ChangeReport> {
        let Some(entry) = self.undo_stack.pop() else {
            tracing::info!(
                component = module_path!(),
                op = "undo_change",
                event = EVENT_NOOP,
                "nothing to undo"
            );
            return None;
        };
        log_op_start!("undo_change", change_id = %entry.id);
        let start = Instant::now();

        self.workspace = entry.before.restore();
        let report = compute_report(
            &entry.after,
            &entry.before,
            self.config.detailed_change_report,
            format!("Undo {}", entry.description),
        );
        self.last = report.clone();

        log_op_end!(
            "undo_change",
            duration_ms = start.elapsed().as_millis() as u64,
            change_id = %entry.id,
            created = report.created.len() as u64,
            modified = report.modified.len() as u64,
            removed = report.removed.len() as u64
        );
        self.redo_stack.push(entry);
        Some(report)
    }

    /// Re-apply the most recently undone change
    ///
    /// Returns `None` if there is nothing to redo.
    pub fn redo_change(&mut self) -> Option<ChangeReport> {
        let Some(entry) = self.redo_stack.pop() else {
            tracing::info!(
                component = module_path!(),
                op = "redo_change",
                event = EVENT_NOOP,
                "nothing to redo"
            );
            return None;
        };
        log_op_start!("redo_change", change_id = %entry.id);
        let start = Instant::now();

        self.workspace = entry.after.restore();
        let report = compute_report(
            &entry.before,
            &entry.after,
            self.config.detailed_change_report,
            format!("Redo {}", entry.description),
        );
        self.last = report.clone();

        log_op_end!(
            "redo_change",
            duration_ms = start.elapsed().as_millis() as u64,
            change_id = %entry.id,
            created = report.created.len() as u64,
            modified = report.modified.len() as u64,
            removed = report.removed.len() as u64
        );
        self.undo_stack.push(entry);
        Some(report)
    }

    /// Forget the created/modified/removed sets of the last transition
    ///
    /// Undo and redo history is kept.
    pub fn reset_file_states(&mut self) {
        self.last = ChangeReport::default();
    }

    /// Report of the last apply, undo or redo
    pub fn last_report(&self) -> &ChangeReport {
        &self.last
    }

    pub fn created_files(&self) -> &BTreeSet<DocumentKey> {
        &self.last.created
    }

    pub fn modified_files(&self) -> &BTreeSet<DocumentKey> {
        &self.last.modified
    }

    pub fn removed_files(&self) -> &BTreeSet<DocumentKey> {
        &self.last.removed
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Descriptions of undoable changes, oldest first
    pub fn history(&self) -> Vec<&str> {
        self.undo_stack
            .iter()
            .map(|entry| entry.description.as_str())
            .collect()
    }

    /// Undoable entries, oldest first
    pub fn undo_entries(&self) -> &[HistoryEntry] {
        &self.undo_stack
    }

    /// Redoable entries; the last one is redone first
    pub fn redo_entries(&self) -> &[HistoryEntry] {
        &self.redo_stack
    }

    fn trim_history(&mut self) {
        if let Some(max) = self.config.max_history {
            if self.undo_stack.len() > max {
                let excess = self.undo_stack.len() - max;
                self.undo_stack.drain(..excess);
                tracing::debug!(dropped = excess, "trimmed undo history");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amedit_core::errors::EditError;
    use amedit_core::graph::Graph;
    use amedit_core::model::Document;

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut ctx = ChangeContext::new(Workspace::new(), ChangeContextConfig::default()).unwrap();
        assert!(ctx.undo_change().is_none());
        assert!(ctx.redo_change().is_none());
        assert!(!ctx.can_undo());
    }

    #[test]
    fn test_history_is_capped() {
        let config = ChangeContextConfig::default().with_max_history(2);
        let mut ctx = ChangeContext::new(Workspace::new(), config).unwrap();
        for name in ["a.ttl", "b.ttl", "c.ttl"] {
            ctx.apply_change(Change::AddFile {
                document: Document::at(name, Graph::new()),
            })
            .unwrap();
        }
        assert_eq!(ctx.history(), vec!["Add file b.ttl", "Add file c.ttl"]);

        ctx.undo_change().unwrap();
        ctx.undo_change().unwrap();
        assert!(ctx.undo_change().is_none());
        assert_eq!(ctx.workspace().len(), 1);
    }

    #[test]
    fn test_zero_history_is_rejected() {
        let config = ChangeContextConfig::default().with_max_history(0);
        let result = ChangeContext::new(Workspace::new(), config);
        assert!(matches!(result, Err(EditError::InvalidConfig { .. })));
    }

    #[test]
    fn test_reset_file_states_keeps_history() {
        let mut ctx = ChangeContext::new(Workspace::new(), ChangeContextConfig::default()).unwrap();
        ctx.apply_change(Change::AddFile {
            document: Document::at("a.ttl", Graph::new()),
        })
        .unwrap();
        assert_eq!(ctx.created_files().len(), 1);

        ctx.reset_file_states();
        assert!(ctx.created_files().is_empty());
        assert!(ctx.can_undo());
    }
}

//! Human-readable summary renderer for change reports.

use crate::diff::model::ChangeReport;
use crate::model::DocumentKey;
use std::collections::BTreeSet;

/// Render a plain-text summary of a [`ChangeReport`].
///
/// Informational only; the structured report is the contract.
pub fn render_report(report: &ChangeReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("## {}\n\n", report.description));

    if report.is_empty() {
        out.push_str("_No documents changed._\n");
        return out;
    }

    section(&mut out, "Created", &report.created);
    section(&mut out, "Modified", &report.modified);
    section(&mut out, "Removed", &report.removed);

    if !report.deltas.is_empty() {
        out.push_str("### Statements\n\n");
        for (key, delta) in &report.deltas {
            out.push_str(&format!(
                "- `{}`: +{} / -{}\n",
                key,
                delta.added.len(),
                delta.removed.len()
            ));
        }
        out.push('\n');
    }
    out
}

fn section(out: &mut String, title: &str, keys: &BTreeSet<DocumentKey>) {
    if keys.is_empty() {
        return;
    }
    out.push_str(&format!("### {} ({})\n\n", title, keys.len()));
    for key in keys {
        out.push_str(&format!("- `{}`\n", key));
    }
    out.push('\n');
}

//! Content digests for graphs and snapshots
//!
//! Digests are hex-encoded SHA256 over a canonical text listing. Graph
//! statements are already kept in sorted order, so equal graphs always
//! produce equal digests. Blank node ids are part of the listing.

use sha2::{Digest, Sha256};

use crate::graph::Graph;
use crate::snapshot::Snapshot;

/// Digest of a graph's statements, one per line in graph order
pub fn graph_digest(graph: &Graph) -> String {
    let mut hasher = Sha256::new();
    for st in graph {
        hasher.update(st.to_string().as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}

/// Digest of a snapshot: identity key, location and graph digest per entry
///
/// Entry order is significant; the capture time is not.
pub fn snapshot_digest(snapshot: &Snapshot) -> String {
    let mut hasher = Sha256::new();
    for entry in snapshot.entries() {
        let line = format!(
            "{}\t{}\t{}\n",
            entry.key,
            entry.location.as_deref().unwrap_or(""),
            graph_digest(&entry.graph)
        );
        hasher.update(line.as_bytes());
    }
    hex::encode(hasher.finalize())
}

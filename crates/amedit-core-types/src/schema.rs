//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent between the kernel, the
//! change engine and log assertions in tests.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_CHANGE_ID: &str = "change_id";
pub const FIELD_CHANGE_KIND: &str = "change_kind";

// Entity identifiers
pub const FIELD_DOCUMENT_KEY: &str = "document_key";
pub const FIELD_ELEMENT_URN: &str = "element_urn";
pub const FIELD_NAMESPACE: &str = "namespace";

// Report sizes
pub const FIELD_CREATED: &str = "created";
pub const FIELD_MODIFIED: &str = "modified";
pub const FIELD_REMOVED: &str = "removed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_NOOP: &str = "noop";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        let events = [EVENT_START, EVENT_END, EVENT_END_ERROR, EVENT_NOOP];
        for (i, a) in events.iter().enumerate() {
            for b in events.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_report_fields_are_distinct() {
        assert_ne!(FIELD_CREATED, FIELD_MODIFIED);
        assert_ne!(FIELD_MODIFIED, FIELD_REMOVED);
    }
}

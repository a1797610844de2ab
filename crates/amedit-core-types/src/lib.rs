//! Core types shared across the amedit crates
//!
//! This crate provides the leaf types used by both the editing kernel and
//! the change engine:
//!
//! - **Identity tokens**: DocumentToken, ChangeId
//! - **Schema constants**: Canonical field keys and event names for logging

pub mod schema;
pub mod token;

pub use token::{ChangeId, DocumentToken};

//! Change context configuration
//!
//! Loadable from TOML; every key is optional:
//!
//! ```toml
//! detailed_change_report = true
//! default_file_header = ["# Copyright (c) 2024 Example Corp"]
//! remove_emptied_files = false
//! max_history = 100
//! ```

use amedit_core::errors::{EditError, Result};
use amedit_core::model::NamespaceScope;
use amedit_core::policy::{bump_location_segments, FilePolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeContextConfig {
    /// Include per-document statement deltas in change reports
    pub detailed_change_report: bool,
    /// Header lines for documents created by moves when the change gives none
    pub default_file_header: Vec<String>,
    /// Remove a document a move left without statements
    pub remove_emptied_files: bool,
    /// Maximum number of undoable changes kept; unbounded if `None`
    pub max_history: Option<usize>,
}

impl Default for ChangeContextConfig {
    fn default() -> Self {
        Self {
            detailed_change_report: true,
            default_file_header: Vec::new(),
            remove_emptied_files: false,
            max_history: None,
        }
    }
}

impl ChangeContextConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the text is not valid TOML for this
    /// structure or `max_history` is zero.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ChangeContextConfig =
            toml::from_str(text).map_err(|e| EditError::InvalidConfig {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` if `max_history` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_history == Some(0) {
            return Err(EditError::InvalidConfig {
                message: "max_history must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = Some(max_history);
        self
    }

    pub fn with_remove_emptied_files(mut self, remove: bool) -> Self {
        self.remove_emptied_files = remove;
        self
    }

    pub fn with_detailed_change_report(mut self, detailed: bool) -> Self {
        self.detailed_change_report = detailed;
        self
    }

    pub fn with_default_file_header(mut self, header: Vec<String>) -> Self {
        self.default_file_header = header;
        self
    }
}

impl FilePolicy for ChangeContextConfig {
    fn default_header(&self) -> &[String] {
        &self.default_file_header
    }

    fn remove_emptied_files(&self) -> bool {
        self.remove_emptied_files
    }

    fn bumped_location(
        &self,
        location: &str,
        from: &NamespaceScope,
        to: &NamespaceScope,
    ) -> Option<String> {
        bump_location_segments(location, from, to)
    }
}

//! Editor options read by the in-memory host.

use crate::layout::DEFAULT_TAB_WIDTH;
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading [`EditorOptions`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    /// The options document is not valid JSON for [`EditorOptions`].
    Json(#[from] serde_json::Error),

    #[error("tab width must be greater than 0, got {0}")]
    /// A tab width of zero was requested.
    InvalidTabWidth(usize),
}

/// Per-editor settings consulted at command time.
///
/// Deserializes from `{"tabWidth": 8}`; `tabSize` is accepted as an alias. Missing fields take
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    /// Tab width in character cells (must be greater than 0).
    #[serde(alias = "tabSize")]
    pub tab_width: usize,
}

impl EditorOptions {
    /// Options with an explicit tab width.
    pub fn with_tab_width(tab_width: usize) -> Result<Self, ConfigError> {
        Self { tab_width }.validate()
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()
    }

    /// Reject settings the editor cannot honor.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.tab_width == 0 {
            return Err(ConfigError::InvalidTabWidth(self.tab_width));
        }
        Ok(self)
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

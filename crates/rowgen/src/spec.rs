//! Row specification: the immutable configuration for one run.

use crate::error::RowGenError;
use serde::Deserialize;
use std::path::Path;

fn default_separator() -> String {
    ",".to_string()
}

/// Ordered field expressions plus rendering options.
///
/// Constructed once (from CLI flags or a YAML spec file) and validated
/// before any generation begins; never mutated afterwards, so it can be
/// shared by reference across parallel workers.
#[derive(Debug, Clone, Deserialize)]
pub struct RowSpec {
    /// Field expressions, one per output column, in order.
    pub fields: Vec<String>,

    /// Explicit header column names. Mutually exclusive with `header_line`.
    #[serde(default)]
    pub header: Option<Vec<String>>,

    /// Preformatted header line emitted verbatim. Mutually exclusive
    /// with `header`.
    #[serde(default)]
    pub header_line: Option<String>,

    /// Field separator for rendered lines. May be multi-character.
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl RowSpec {
    /// Spec with the given fields and default separator, no header.
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            header: None,
            header_line: None,
            separator: default_separator(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_header_line(mut self, header_line: impl Into<String>) -> Self {
        self.header_line = Some(header_line.into());
        self
    }

    /// Load a spec from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, RowGenError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a spec from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RowGenError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Check the configuration invariants. Violations are fatal and
    /// must be surfaced before generation starts.
    pub fn validate(&self) -> Result<(), RowGenError> {
        if self.fields.is_empty() {
            return Err(RowGenError::EmptyFields);
        }
        if self.separator.is_empty() {
            return Err(RowGenError::EmptySeparator);
        }
        if self.header.is_some() && self.header_line.is_some() {
            return Err(RowGenError::ConflictingHeaders);
        }
        if let Some(header) = &self.header {
            if header.len() != self.fields.len() {
                return Err(RowGenError::HeaderLengthMismatch {
                    header: header.len(),
                    fields: self.fields.len(),
                });
            }
        }
        Ok(())
    }
}

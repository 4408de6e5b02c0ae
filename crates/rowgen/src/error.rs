//! Error types for row generation.

use thiserror::Error;

/// Errors surfaced before any generation begins.
///
/// Field expressions that fail to compile are deliberately NOT errors;
/// they become unresolved plans that render as empty values. Only
/// configuration invariant violations are fatal.
#[derive(Error, Debug)]
pub enum RowGenError {
    /// No field expressions were supplied.
    #[error("no field expressions configured")]
    EmptyFields,

    /// Explicit header list does not match the field list.
    #[error("header has {header} column names but {fields} fields are configured")]
    HeaderLengthMismatch {
        /// Number of header column names.
        header: usize,
        /// Number of configured fields.
        fields: usize,
    },

    /// Both a header list and a preformatted header line were supplied.
    #[error("header and header_line are mutually exclusive")]
    ConflictingHeaders,

    /// The field separator is empty.
    #[error("separator must not be empty")]
    EmptySeparator,

    /// IO error reading a field-spec file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed field-spec file.
    #[error("invalid field-spec file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

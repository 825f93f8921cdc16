//! Error types for model construction and configuration.

/// Errors surfaced while building or configuring a [`Model`](crate::Model).
///
/// Every variant is detected eagerly at construction time; rendering a
/// model that was built successfully cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A row or column does not match the length established by the first.
    #[error("sequence {index} has {found} cells, expected {expected}")]
    Shape {
        index: usize,
        found: usize,
        expected: usize,
    },

    /// Delimited input could not be split into a consistent record shape.
    #[error("failed to parse delimited input: {0}")]
    Parse(String),

    /// An explicit alignment list does not cover every column.
    #[error("alignment list has {found} entries for {expected} columns")]
    AlignCount { found: usize, expected: usize },

    /// A headings list does not cover every column.
    #[error("heading list has {found} entries for {expected} columns")]
    HeadingCount { found: usize, expected: usize },

    /// An alignment token was not recognized.
    #[error("unknown alignment: '{0}'")]
    UnknownAlignment(String),
}

impl From<csv::Error> for ModelError {
    fn from(err: csv::Error) -> Self {
        ModelError::Parse(err.to_string())
    }
}

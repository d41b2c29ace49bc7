// ABOUTME: Error types for page classification and table extraction.
// ABOUTME: Provides ExtractError enum with InvalidInput, UnmappedColumn, and Extraction variants.

use thiserror::Error;

/// Errors that can occur while classifying or extracting a statistics page.
///
/// Every variant is fatal for the page being processed; no partial table is
/// ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The page metadata is missing, or its canonical URL matches no known template.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A standings column label has no canonical translation.
    #[error("unmapped column label: {0:?}")]
    UnmappedColumn(String),

    /// The expected table, row, or cell structure is absent or malformed.
    #[error("extraction failed: {0}")]
    Extraction(String),
}

impl ExtractError {
    /// Creates an InvalidInput error with a custom message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ExtractError::InvalidInput(msg.into())
    }

    /// Creates an UnmappedColumn error for the given source label.
    pub fn unmapped_column(label: impl Into<String>) -> Self {
        ExtractError::UnmappedColumn(label.into())
    }

    /// Creates an Extraction error with a custom message.
    pub fn extraction(msg: impl Into<String>) -> Self {
        ExtractError::Extraction(msg.into())
    }

    /// Returns true if this is an InvalidInput error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ExtractError::InvalidInput(_))
    }

    /// Returns true if this is an UnmappedColumn error.
    pub fn is_unmapped_column(&self) -> bool {
        matches!(self, ExtractError::UnmappedColumn(_))
    }

    /// Returns true if this is an Extraction error.
    pub fn is_extraction(&self) -> bool {
        matches!(self, ExtractError::Extraction(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_label() {
        let err = ExtractError::unmapped_column("Maalierotus");
        assert_eq!(err.to_string(), "unmapped column label: \"Maalierotus\"");
        assert!(err.is_unmapped_column());
        assert!(!err.is_extraction());
    }
}

//! Error types for JSON fragment formatting.

/// Errors that can occur while formatting a JSON fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No input text was supplied.
    #[error("input is required")]
    NullInput,

    /// A closing `}` or `]` was found with no open object or array.
    #[error("unmatched closing bracket at byte offset {position}")]
    StructuralUnderflow {
        /// Byte offset of the closing bracket in the input.
        position: usize,
    },
}

//! Common error types used across the workspace.

/// Rejected input while building a widget descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown stat variant {0:?}")]
    UnknownVariant(String),
    #[error("duplicate select option value {0:?}")]
    DuplicateOptionValue(String),
    #[error("unknown time filter {0:?}")]
    UnknownTimeFilter(String),
}

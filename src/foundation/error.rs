/// Convenience result type used across the filter graph.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error taxonomy for filter-graph construction and backend resources.
///
/// Queries on a constructed filter input never return these; an empty result is `None`.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// A precondition was violated while building a value.
    #[error("validation error: {0}")]
    Validation(String),

    /// The rendering backend could not provide a resource.
    #[error("backend error: {0}")]
    Backend(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FilterError {
    /// Build a [`FilterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FilterError::Backend`] value.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Build a [`FilterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

//! Error types for the novadata engine.

use std::sync::Arc;

use thiserror::Error;

use novadata_resource::{GlobalId, ResourceType};

/// Errors surfaced by category accessors.
///
/// The enum is `Clone` because memoized results are replayed: a build
/// failure is captured once as a value and handed to every later caller,
/// and a cached per-id failure is returned again on retry. Variants
/// therefore hold `Arc`s or owned strings, never one-shot error objects.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The raw space could not be constructed. Replayed to every accessor.
    #[error("failed to build resource id space: {0}")]
    Build(#[from] Arc<novadata_resource::Error>),

    /// The requested id is absent from its type's table.
    #[error("no {kind} resource with id {id}")]
    IdNotFound { kind: ResourceType, id: GlobalId },

    /// A cross-type or cross-table lookup came up empty (strict mode only;
    /// non-strict mode reports and substitutes instead).
    #[error("unresolved reference: {0}")]
    Reference(String),

    /// A transformer failed for reasons other than a missing reference.
    #[error("transform failed: {0}")]
    Transform(String),
}

impl From<novadata_resource::Error> for Error {
    fn from(error: novadata_resource::Error) -> Self {
        Error::Build(Arc::new(error))
    }
}

/// Result type alias using the engine Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_errors_clone_and_display() {
        let error = Error::from(novadata_resource::Error::NoSources);
        let replayed = error.clone();
        assert_eq!(
            replayed.to_string(),
            "failed to build resource id space: no archive sources supplied"
        );
    }
}

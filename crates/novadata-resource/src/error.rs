//! Error types for novadata-resource.

use thiserror::Error;

/// Errors raised while loading sources or building the merged id space.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from a provider.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A provider produced no archive sources at all.
    #[error("no archive sources supplied")]
    NoSources,

    /// Two archive sources share a name.
    #[error("duplicate archive source name: {0}")]
    DuplicateSource(String),

    /// More sources than the global id scheme can address.
    #[error("too many archive sources: {0} (limit: {limit})", limit = u16::MAX)]
    TooManySources(usize),

    /// Provider-specific failure that is not plain I/O.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Result type alias using the resource Error type.
pub type Result<T> = std::result::Result<T, Error>;

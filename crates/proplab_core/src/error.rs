//! Error types for proplab_core

use thiserror::Error;

/// Errors raised while assembling a [`Registry`](crate::registry::Registry)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two descriptors share an id
    #[error("component '{0}' is registered more than once")]
    DuplicateComponent(String),

    /// A registry must list at least one component
    #[error("registry has no components")]
    Empty,

    /// Audit found a finding of error severity
    #[error("component '{component}': {message}")]
    Inconsistent { component: String, message: String },
}

/// Result type for registry construction
pub type Result<T> = std::result::Result<T, RegistryError>;

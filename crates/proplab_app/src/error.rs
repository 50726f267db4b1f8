//! Error types for proplab_app

use thiserror::Error;

/// Errors reported by the checked playground operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundError {
    /// The id is not in the registry
    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    /// An edit was attempted with no component selected
    #[error("no component selected")]
    NoSelection,

    /// The property has no control, or its control is currently suppressed
    #[error("no control for '{key}' on {component}")]
    NoSuchControl { component: String, key: String },
}

/// Result type for proplab_app operations
pub type Result<T> = std::result::Result<T, PlaygroundError>;

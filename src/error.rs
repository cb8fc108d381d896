//! Error types for property registry construction.
//!
//! Resolving a path never fails with an error: an unresolvable path is simply
//! `None`. The errors here cover building a registry from schema definitions,
//! where a malformed definition must be rejected before any lookup happens.

/// Main error type for registry construction.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A compiled-in or supplied schema definition is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries registered under the same entity-type name
    #[error("Entity type '{entity_type}' is registered more than once")]
    DuplicateEntityType { entity_type: String },

    /// Two sibling properties share a name
    #[error("Property '{name}' is defined more than once under '{path}' in '{entity_type}'")]
    DuplicateProperty {
        entity_type: String,
        path: String,
        name: String,
    },

    /// An entity type or property with an empty name
    #[error("Empty name under '{path}' in '{entity_type}'")]
    EmptyName { entity_type: String, path: String },

    /// The builder was asked to keep an entity type nobody registered
    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    /// Builder configuration is inconsistent
    #[error("Invalid registry configuration: {message}")]
    InvalidConfig { message: String },
}

impl RegistryError {
    /// Create a duplicate property error.
    pub fn duplicate_property(
        entity_type: impl Into<String>,
        path: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::DuplicateProperty {
            entity_type: entity_type.into(),
            path: path.into(),
            name: name.into(),
        }
    }

    /// Create an empty name error.
    pub fn empty_name(entity_type: impl Into<String>, path: impl Into<String>) -> Self {
        Self::EmptyName {
            entity_type: entity_type.into(),
            path: path.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result type alias for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

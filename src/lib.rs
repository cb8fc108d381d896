//! Entity-type property registry for Rust.
//!
//! Holds the property schemas of a fixed set of entity types and resolves
//! paths of string segments to the property descriptor they designate.
//!
//! # Core Components
//!
//! - [`PropRegistry`] - Immutable mapping from entity-type name to root schema
//! - [`PropDescriptor`] - Scalar, object, array or map property node
//! - [`RegistryBuilder`] - Explicit, one-time registry construction
//! - [`find_prop`] - Path resolver
//!
//! # Quick Start
//!
//! ```rust
//! use prop_registry::{PropKind, PropRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = PropRegistry::new()?;
//!
//! // The index segment before an array item's field may be left out
//! let with_index = registry.find_prop(&["dockerImage", "exposedPorts", "0", "protocol"]);
//! let without_index = registry.find_prop(&["dockerImage", "exposedPorts", "protocol"]);
//! assert_eq!(with_index, without_index);
//! assert_eq!(with_index.map(|prop| prop.kind()), Some(PropKind::Scalar));
//!
//! assert!(registry.find_prop(&["dockerImage"]).is_none());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod schema;

// Re-export commonly used types for convenience
pub use config::{RegistryBuilder, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use schema::{
    PropDescriptor, PropKind, PropPath, PropRegistry, RegistryEntry, ScalarKind, find_prop,
};

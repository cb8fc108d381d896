//! Entity-type schemas and property path resolution.
//!
//! This module provides the property registry and the resolver that walks a
//! path of string segments through a registered schema.
//!
//! # Key Types
//!
//! - [`PropDescriptor`] - One node of a schema tree: scalar, object, array or map
//! - [`RegistryEntry`] - Root schema of one entity type
//! - [`PropRegistry`] - Immutable mapping from entity-type name to entry
//! - [`PropPath`] - Owned path of segments
//!
//! # Examples
//!
//! ```rust
//! use prop_registry::schema::PropRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = PropRegistry::new()?;
//! let name = registry.find_prop(&["dockerImage", "name"]);
//! assert_eq!(name.map(|prop| prop.name()), Some("name"));
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod resolver;
pub mod types;


// Re-export the main types for convenience
pub use registry::PropRegistry;
pub use resolver::{PropPath, find_prop, is_index_segment};
pub use types::{PropDescriptor, PropKind, RegistryEntry, ScalarKind};

//! Integration tests for the property registry.
//!
//! ## Test Organization
//!
//! - `resolution` - One test per resolution rule, on the hand-built entry and
//!   the compiled-in entity types
//! - `properties` - proptest checks that hold for arbitrary segments
//! - `shared_registry` - Concurrent reads of one registry

pub mod properties;
pub mod resolution;
pub mod shared_registry;

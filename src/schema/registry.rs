//! Property registry for loading and accessing entity-type schemas.
//!
//! This module provides the [`PropRegistry`], an immutable mapping from
//! entity-type name to its root schema. A registry is built once, checked
//! for structural consistency while it is built, and only read afterwards.

use super::resolver;
use super::types::{PropDescriptor, RegistryEntry};
use crate::config::RegistryBuilder;
use crate::error::{RegistryError, RegistryResult};

use log::debug;
use std::collections::{HashMap, HashSet};

/// Registry of entity-type schemas.
///
/// Entries keep their registration order. Lookup by entity-type name goes
/// through a name index, so `get` does not scan the entries.
#[derive(Debug, Clone)]
pub struct PropRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl PropRegistry {
    /// Create a registry holding the compiled-in entity types.
    ///
    /// Equivalent to `RegistryBuilder::new().build()`.
    pub fn new() -> RegistryResult<Self> {
        RegistryBuilder::new().build()
    }

    /// Create a registry from already parsed entries.
    ///
    /// Fails when two entries share an entity-type name, when two sibling
    /// properties share a name, or when any name is empty.
    pub fn from_entries(entries: Vec<RegistryEntry>) -> RegistryResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.entity_type.is_empty() {
                return Err(RegistryError::empty_name(
                    format!("entry #{}", position),
                    "entityType",
                ));
            }
            Self::check_properties(&entry.entity_type, &entry.entity_type, &entry.properties)?;

            if index.insert(entry.entity_type.clone(), position).is_some() {
                return Err(RegistryError::DuplicateEntityType {
                    entity_type: entry.entity_type.clone(),
                });
            }
            debug!(
                "Registered entity type '{}' with {} top-level properties",
                entry.entity_type,
                entry.properties.len()
            );
        }

        Ok(Self { entries, index })
    }

    /// Parse a single entry from its JSON form.
    pub fn load_entry_from_str(content: &str) -> RegistryResult<RegistryEntry> {
        let entry: RegistryEntry = serde_json::from_str(content)?;
        Ok(entry)
    }

    fn check_properties(
        entity_type: &str,
        path: &str,
        properties: &[PropDescriptor],
    ) -> RegistryResult<()> {
        let mut seen = HashSet::with_capacity(properties.len());
        for prop in properties {
            if !seen.insert(prop.name()) {
                return Err(RegistryError::duplicate_property(
                    entity_type,
                    path,
                    prop.name(),
                ));
            }
            Self::check_descriptor(entity_type, path, prop)?;
        }
        Ok(())
    }

    fn check_descriptor(
        entity_type: &str,
        parent_path: &str,
        prop: &PropDescriptor,
    ) -> RegistryResult<()> {
        if prop.name().is_empty() {
            return Err(RegistryError::empty_name(entity_type, parent_path));
        }

        let path = format!("{}.{}", parent_path, prop.name());
        match prop {
            PropDescriptor::Scalar { .. } => Ok(()),
            PropDescriptor::Object { properties, .. } => {
                Self::check_properties(entity_type, &path, properties)
            }
            PropDescriptor::Array { item, .. } => Self::check_descriptor(entity_type, &path, item),
            PropDescriptor::Map { value, .. } => Self::check_descriptor(entity_type, &path, value),
        }
    }

    /// Get the entry registered under `entity_type`.
    ///
    /// An unregistered name yields `None`; it is not an error.
    pub fn get(&self, entity_type: &str) -> Option<&RegistryEntry> {
        self.index
            .get(entity_type)
            .and_then(|&position| self.entries.get(position))
    }

    /// Whether `entity_type` is registered.
    pub fn contains(&self, entity_type: &str) -> bool {
        self.index.contains_key(entity_type)
    }

    /// All registered entity-type names, in registration order.
    pub fn list_entity_types(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.entity_type.as_str())
            .collect()
    }

    /// All entries, in registration order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a property path against this registry.
    ///
    /// See [`resolver::find_prop`] for the segment rules.
    pub fn find_prop<S: AsRef<str>>(&self, path: &[S]) -> Option<&PropDescriptor> {
        resolver::find_prop(self, path)
    }
}

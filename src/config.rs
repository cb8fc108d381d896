//! Builder pattern for configuring property registries.
//!
//! A registry is assembled once, explicitly, from the compiled-in entity
//! types and any entries the caller supplies. The resulting
//! [`PropRegistry`] is immutable and is handed to consumers by reference.

use crate::error::{RegistryError, RegistryResult};
use crate::schema::{PropRegistry, RegistryEntry, embedded};

use log::{info, warn};

/// Configuration for which entity types end up in a registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Register the compiled-in entity types first. Defaults to `true`.
    pub include_embedded: bool,

    /// Keep only these entity types, in registration order. `None` keeps all.
    pub entity_types: Option<Vec<String>>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_embedded: true,
            entity_types: None,
        }
    }
}

impl RegistryConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> RegistryResult<()> {
        if let Some(entity_types) = &self.entity_types {
            if entity_types.iter().any(String::is_empty) {
                return Err(RegistryError::invalid_config(
                    "Entity type filter cannot contain an empty name",
                ));
            }
        }
        Ok(())
    }
}

/// Builder for configuring and creating a [`PropRegistry`].
///
/// # Examples
///
/// ```rust
/// use prop_registry::{PropDescriptor, RegistryBuilder, RegistryEntry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Compiled-in entity types only
/// let registry = RegistryBuilder::new().build()?;
/// assert!(registry.contains("dockerImage"));
///
/// // A custom entity type without the compiled-in ones
/// let registry = RegistryBuilder::new()
///     .with_embedded(false)
///     .with_entry(RegistryEntry::new(
///         "bucket",
///         vec![PropDescriptor::scalar("region")],
///     ))
///     .build()?;
/// assert_eq!(registry.list_entity_types(), vec!["bucket"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from an explicit configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Include or leave out the compiled-in entity types.
    pub fn with_embedded(mut self, include: bool) -> Self {
        self.config.include_embedded = include;
        self
    }

    /// Register an additional entry after the compiled-in ones.
    pub fn with_entry(mut self, entry: RegistryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Register an additional entry given in its JSON form.
    pub fn with_entry_json(self, content: &str) -> RegistryResult<Self> {
        let entry = PropRegistry::load_entry_from_str(content)?;
        Ok(self.with_entry(entry))
    }

    /// Keep only the named entity types.
    ///
    /// Every name must end up registered, otherwise [`build`](Self::build)
    /// fails with [`RegistryError::UnknownEntityType`].
    pub fn only_entity_types<I, S>(mut self, entity_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.entity_types = Some(entity_types.into_iter().map(Into::into).collect());
        self
    }

    /// Build the registry.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the configuration is invalid, a
    /// compiled-in entry fails to parse, or the entries break a registry
    /// invariant.
    pub fn build(self) -> RegistryResult<PropRegistry> {
        self.config.validate()?;

        let mut entries = Vec::new();
        if self.config.include_embedded {
            for content in embedded::all_entries() {
                entries.push(PropRegistry::load_entry_from_str(content)?);
            }
        }
        entries.extend(self.entries);

        if let Some(keep) = &self.config.entity_types {
            if let Some(missing) = keep
                .iter()
                .find(|name| !entries.iter().any(|entry| &entry.entity_type == *name))
            {
                return Err(RegistryError::UnknownEntityType(missing.clone()));
            }

            let before = entries.len();
            entries.retain(|entry| keep.contains(&entry.entity_type));
            if entries.len() < before {
                warn!(
                    "Entity type filter dropped {} of {} entries",
                    before - entries.len(),
                    before
                );
            }
        }

        let registry = PropRegistry::from_entries(entries)?;
        info!(
            "Property registry built with {} entity types",
            registry.len()
        );
        Ok(registry)
    }
}

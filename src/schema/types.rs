//! Core property descriptor definitions.
//!
//! This module contains the closed set of shapes a property can take and the
//! root entry that groups the top-level properties of one entity type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in an entity-type schema tree.
///
/// Every shape carries the property name it is registered under. Children
/// are owned, so a descriptor tree is always finite and acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropDescriptor {
    /// Leaf value
    Scalar {
        name: String,
        #[serde(rename = "type", default)]
        kind: ScalarKind,
    },
    /// Ordered named children, unique by name
    Object {
        name: String,
        #[serde(default)]
        properties: Vec<PropDescriptor>,
    },
    /// Positionally addressed elements sharing one item shape
    Array {
        name: String,
        item: Box<PropDescriptor>,
    },
    /// String-keyed entries sharing one value shape
    Map {
        name: String,
        value: Box<PropDescriptor>,
    },
}

impl PropDescriptor {
    /// Create a string scalar.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar {
            name: name.into(),
            kind: ScalarKind::String,
        }
    }

    /// Create a scalar of the given kind.
    pub fn scalar_of(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::Scalar {
            name: name.into(),
            kind,
        }
    }

    pub fn object(name: impl Into<String>, properties: Vec<PropDescriptor>) -> Self {
        Self::Object {
            name: name.into(),
            properties,
        }
    }

    pub fn array(name: impl Into<String>, item: PropDescriptor) -> Self {
        Self::Array {
            name: name.into(),
            item: Box::new(item),
        }
    }

    pub fn map(name: impl Into<String>, value: PropDescriptor) -> Self {
        Self::Map {
            name: name.into(),
            value: Box::new(value),
        }
    }

    /// The property name this descriptor is registered under.
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar { name, .. }
            | Self::Object { name, .. }
            | Self::Array { name, .. }
            | Self::Map { name, .. } => name,
        }
    }

    /// The discriminating tag of this descriptor.
    pub fn kind(&self) -> PropKind {
        match self {
            Self::Scalar { .. } => PropKind::Scalar,
            Self::Object { .. } => PropKind::Object,
            Self::Array { .. } => PropKind::Array,
            Self::Map { .. } => PropKind::Map,
        }
    }

    /// Children of an object; empty for every other shape.
    pub fn properties(&self) -> &[PropDescriptor] {
        match self {
            Self::Object { properties, .. } => properties,
            _ => &[],
        }
    }

    /// Look up a child of an object by exact name.
    pub fn child(&self, name: &str) -> Option<&PropDescriptor> {
        self.properties().iter().find(|prop| prop.name() == name)
    }

    /// Shared element shape of an array.
    pub fn item(&self) -> Option<&PropDescriptor> {
        match self {
            Self::Array { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Shared value shape of a map.
    pub fn value(&self) -> Option<&PropDescriptor> {
        match self {
            Self::Map { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Visit this descriptor and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a PropDescriptor)) {
        visit(self);
        match self {
            Self::Scalar { .. } => {}
            Self::Object { properties, .. } => {
                for prop in properties {
                    prop.walk(visit);
                }
            }
            Self::Array { item, .. } => item.walk(visit),
            Self::Map { value, .. } => value.walk(visit),
        }
    }
}

/// Tag of a [`PropDescriptor`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropKind {
    Scalar,
    Object,
    Array,
    Map,
}

impl fmt::Display for PropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Scalar => "scalar",
            Self::Object => "object",
            Self::Array => "array",
            Self::Map => "map",
        };
        f.write_str(tag)
    }
}

/// Value type of a scalar property.
///
/// Descriptive only; path resolution never looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarKind {
    #[default]
    String,
    Number,
    Boolean,
}

/// Root schema of one entity type.
///
/// Structurally an object without an enclosing name: an ordered list of
/// uniquely named top-level properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Entity-type name the entry is registered under
    pub entity_type: String,
    /// Top-level properties in declaration order
    #[serde(default)]
    pub properties: Vec<PropDescriptor>,
}

impl RegistryEntry {
    pub fn new(entity_type: impl Into<String>, properties: Vec<PropDescriptor>) -> Self {
        Self {
            entity_type: entity_type.into(),
            properties,
        }
    }

    /// Look up a top-level property by exact name.
    pub fn child(&self, name: &str) -> Option<&PropDescriptor> {
        self.properties.iter().find(|prop| prop.name() == name)
    }

    /// The root as an object named after the entity type.
    pub fn as_object(&self) -> PropDescriptor {
        PropDescriptor::object(self.entity_type.clone(), self.properties.clone())
    }
}

//! Property path resolution.
//!
//! A path is an ordered list of string segments. The first segment names an
//! entity type, the second a top-level property of that type, and each later
//! segment is read according to the shape of the descriptor reached so far:
//! a property name inside an object, an element accessor inside an array, or
//! a key inside a map.
//!
//! Array and map positions may be elided. Following an array of objects, a
//! non-numeric segment reaches straight into the item's properties, so
//! `["kubernetesDeployment", "kubernetesObject", "spec", "template", "spec",
//! "containers", "image"]` and the same path with `"0"` before `"image"`
//! resolve to the same descriptor. Maps of objects behave the same way with
//! keys in place of indices, and a key spelled like a value property still
//! works as a key: `["dockerHub", "repositories", "private", "pullCount"]`
//! reaches `pullCount` through the repository keyed `private`.
//!
//! Resolution never fails with an error. Every dead end is `None`.

use super::registry::PropRegistry;
use super::types::{PropDescriptor, PropKind};

use log::{debug, trace};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Resolve `path` to the descriptor it designates.
///
/// Returns `None` when the path is empty, names an unregistered entity type,
/// consists of the entity type alone, or walks off the schema at any step.
pub fn find_prop<'r, S: AsRef<str>>(
    registry: &'r PropRegistry,
    path: &[S],
) -> Option<&'r PropDescriptor> {
    let (entity_type, segments) = path.split_first()?;
    let entry = registry.get(entity_type.as_ref())?;
    let (first, rest) = segments.split_first()?;

    let top = entry.child(first.as_ref());
    trace!(
        "'{}' -> '{}': {:?}",
        entry.entity_type,
        first.as_ref(),
        top.map(PropDescriptor::kind)
    );

    let current = walk(top, rest);
    debug!(
        "Resolved {} segment path in '{}': {}",
        path.len(),
        entry.entity_type,
        current.map_or("not found", PropDescriptor::name)
    );
    current
}

/// Consume `segments` starting from `current`.
///
/// Inside a map of objects a segment can be a value property or a key. The
/// property reading is tried first; when it dead-ends before the path is
/// used up, the same segment is read as a key and the rest of the path is
/// walked from the map again.
fn walk<'a, S: AsRef<str>>(
    current: Option<&'a PropDescriptor>,
    segments: &[S],
) -> Option<&'a PropDescriptor> {
    let Some((segment, rest)) = segments.split_first() else {
        return current;
    };
    let segment = segment.as_ref();

    let Some(prop) = current else {
        // A miss does not stop the walk; the remaining segments are still
        // consumed against the absent descriptor and leave it absent.
        for segment in segments {
            trace!("'{}': None", segment.as_ref());
        }
        return None;
    };

    if let PropDescriptor::Map { value, .. } = prop {
        if let Some(field) = value.child(segment) {
            trace!("'{}': {:?} (value property)", segment, Some(field.kind()));
            if rest.is_empty() {
                return Some(field);
            }
            return walk(Some(field), rest).or_else(|| {
                trace!("'{}': {:?} (map key)", segment, Some(prop.kind()));
                walk(Some(prop), rest)
            });
        }
    }

    let next = step(prop, segment);
    trace!("'{}': {:?}", segment, next.map(PropDescriptor::kind));
    walk(next, rest)
}

/// Consume one segment past the top level of an entry.
///
/// Scalars and maps of scalars cannot be indexed any further; a segment
/// applied to either leaves nothing to resolve.
pub fn step<'a>(current: &'a PropDescriptor, segment: &str) -> Option<&'a PropDescriptor> {
    match current {
        PropDescriptor::Object { .. } => current.child(segment),
        PropDescriptor::Array { item, .. } => match item.as_ref() {
            PropDescriptor::Object { .. } => step_into_collection(current, segment),
            PropDescriptor::Array { .. }
            | PropDescriptor::Map { .. }
            | PropDescriptor::Scalar { .. } => Some(item.as_ref()),
        },
        PropDescriptor::Map { value, .. } => match value.as_ref() {
            PropDescriptor::Object { .. } => step_into_collection(current, segment),
            PropDescriptor::Array { .. } | PropDescriptor::Map { .. } => Some(value.as_ref()),
            PropDescriptor::Scalar { .. } => None,
        },
        PropDescriptor::Scalar { .. } => None,
    }
}

/// Elided index and key rule for collections of objects.
///
/// `collection` is an array whose item is an object, or a map whose value is
/// an object. A segment naming a property of that object reaches directly
/// into it, skipping the index or key position. Otherwise the segment is an
/// accessor for one element and the collection itself stays current:
///
/// - arrays: a decimal index stays on the array; any other segment must name
///   an item property.
/// - maps: a segment that names no value property is taken as a key. A
///   segment that does name one is also retried as a key by [`find_prop`]
///   when the property reading cannot resolve the rest of the path.
///
/// Any other shape of `collection` yields `None`.
pub fn step_into_collection<'a>(
    collection: &'a PropDescriptor,
    segment: &str,
) -> Option<&'a PropDescriptor> {
    match collection {
        PropDescriptor::Array { item, .. } if item.kind() == PropKind::Object => {
            if is_index_segment(segment) {
                Some(collection)
            } else {
                item.child(segment)
            }
        }
        PropDescriptor::Map { value, .. } if value.kind() == PropKind::Object => {
            value.child(segment).or(Some(collection))
        }
        _ => None,
    }
}

/// Whether `segment` is a base-10 non-negative integer.
///
/// Only ASCII digits count; signs, whitespace and the empty string do not.
pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// An owned property path.
///
/// The string form separates segments with `/`. Empty segments are kept as
/// they are, so `"dockerImage//name"` has three segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PropPath {
    segments: Vec<String>,
}

impl PropPath {
    pub const SEPARATOR: char = '/';

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.push(segment);
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The leading entity-type segment, if any.
    pub fn entity_type(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolve this path against `registry`.
    pub fn resolve<'r>(&self, registry: &'r PropRegistry) -> Option<&'r PropDescriptor> {
        find_prop(registry, &self.segments)
    }
}

impl FromStr for PropPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::new());
        }
        Ok(s.split(Self::SEPARATOR).collect())
    }
}

impl fmt::Display for PropPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for PropPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for PropPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl AsRef<[String]> for PropPath {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

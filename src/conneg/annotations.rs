//! Parameter annotations and the JSON opt-in marker

use std::any::TypeId;
use std::collections::HashSet;

/// A zero-data tag attachable to a handler parameter.
///
/// Annotations carry no payload; the only question ever asked of one is
/// whether it is present in a parameter's [`Annotations`] set. Host
/// frameworks declare their own tags by implementing this trait on a unit
/// struct.
pub trait Annotation: 'static {}

/// Marker annotation opting a parameter into JSON string conversion.
///
/// A path, query, or header parameter tagged with this marker has its raw
/// string value decoded as JSON instead of handled by the framework's
/// default converters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonParam;

impl Annotation for JsonParam {}

/// The set of annotations attached to one handler parameter.
///
/// Tags are stored by type; the set answers presence queries only.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    tags: HashSet<TypeId>,
}

impl Annotations {
    /// Create an empty annotation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag the parameter with annotation `A`.
    pub fn insert<A: Annotation>(&mut self) {
        self.tags.insert(TypeId::of::<A>());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<A: Annotation>(mut self) -> Self {
        self.insert::<A>();
        self
    }

    /// Whether annotation `A` is present.
    pub fn contains<A: Annotation>(&self) -> bool {
        self.tags.contains(&TypeId::of::<A>())
    }

    /// Whether the parameter carries no annotations at all.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of distinct annotations on the parameter.
    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Required;
    impl Annotation for Required {}

    #[test]
    fn test_empty_set() {
        let annotations = Annotations::new();
        assert!(annotations.is_empty());
        assert!(!annotations.contains::<JsonParam>());
    }

    #[test]
    fn test_presence_is_per_type() {
        let annotations = Annotations::new().with::<Required>();
        assert!(annotations.contains::<Required>());
        assert!(!annotations.contains::<JsonParam>());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut annotations = Annotations::new();
        annotations.insert::<JsonParam>();
        annotations.insert::<JsonParam>();
        assert_eq!(annotations.len(), 1);
    }
}

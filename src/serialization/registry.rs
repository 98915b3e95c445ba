//! Discriminator dispatch for polymorphic model families

use std::collections::BTreeMap;

use tracing::debug;

use super::error::SerializationError;
use super::parse_node::ParseNode;
use super::ODATA_TYPE_KEY;

/// Maps `@odata.type` values to constructors for one polymorphic base.
///
/// Unregistered or missing discriminators fall back to the base type's own
/// constructor, so unknown subtypes still decode with their extra
/// properties kept in additional data.
pub struct DiscriminatorRegistry<K> {
    base_type: &'static str,
    fallback: fn() -> K,
    constructors: BTreeMap<&'static str, fn() -> K>,
}

impl<K> DiscriminatorRegistry<K> {
    pub fn new(base_type: &'static str, fallback: fn() -> K) -> Self {
        Self {
            base_type,
            fallback,
            constructors: BTreeMap::new(),
        }
    }

    /// Register a constructor for `discriminator`
    pub fn with(mut self, discriminator: &'static str, constructor: fn() -> K) -> Self {
        self.constructors.insert(discriminator, constructor);
        self
    }

    /// Construct the variant for a discriminator value
    pub fn create(&self, discriminator: Option<&str>) -> K {
        match discriminator {
            Some(value) => match self.constructors.get(value) {
                Some(constructor) => constructor(),
                None if value == self.base_type => (self.fallback)(),
                None => {
                    debug!(
                        base = self.base_type,
                        discriminator = value,
                        "unregistered discriminator, using base type"
                    );
                    (self.fallback)()
                }
            },
            None => (self.fallback)(),
        }
    }

    /// Read `@odata.type` from an object node and construct the matching variant
    pub fn resolve(&self, node: &dyn ParseNode) -> Result<K, SerializationError> {
        let discriminator = match node.get_child_node(ODATA_TYPE_KEY)? {
            Some(child) => child.get_string_value()?,
            None => None,
        };
        Ok(self.create(discriminator.as_deref()))
    }

    pub fn is_registered(&self, discriminator: &str) -> bool {
        self.constructors.contains_key(discriminator)
    }

    /// Registered discriminators, sorted
    pub fn discriminators(&self) -> Vec<&'static str> {
        self.constructors.keys().copied().collect()
    }

    pub fn base_type(&self) -> &'static str {
        self.base_type
    }
}

impl<K> std::fmt::Debug for DiscriminatorRegistry<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscriminatorRegistry")
            .field("base_type", &self.base_type)
            .field("discriminators", &self.discriminators())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json::JsonParseNode;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Shape {
        Any,
        Circle,
        Square,
    }

    fn registry() -> DiscriminatorRegistry<Shape> {
        DiscriminatorRegistry::new("#test.shape", || Shape::Any)
            .with("#test.square", || Shape::Square)
            .with("#test.circle", || Shape::Circle)
    }

    #[test]
    fn test_create_known_and_unknown() {
        let registry = registry();
        assert_eq!(registry.create(Some("#test.circle")), Shape::Circle);
        assert_eq!(registry.create(Some("#test.triangle")), Shape::Any);
        assert_eq!(registry.create(None), Shape::Any);
    }

    #[test]
    fn test_base_discriminator_uses_fallback() {
        let registry = registry();
        assert_eq!(registry.create(Some("#test.shape")), Shape::Any);
        assert!(!registry.is_registered("#test.shape"));
    }

    #[test]
    fn test_resolve_reads_odata_type() {
        let registry = registry();
        let payload = json!({"@odata.type": "#test.square", "side": 2});
        assert_eq!(registry.resolve(&JsonParseNode::new(&payload)).unwrap(), Shape::Square);

        let untyped = json!({"side": 2});
        assert_eq!(registry.resolve(&JsonParseNode::new(&untyped)).unwrap(), Shape::Any);
    }

    #[test]
    fn test_resolve_rejects_non_string_discriminator() {
        let payload = json!({"@odata.type": 7});
        let err = registry().resolve(&JsonParseNode::new(&payload)).unwrap_err();
        assert!(matches!(err, SerializationError::TypeMismatch { .. }));
    }

    #[test]
    fn test_discriminators_sorted() {
        let registry = registry();
        assert_eq!(registry.discriminators(), vec!["#test.circle", "#test.square"]);
        assert!(registry.is_registered("#test.square"));
        assert!(!registry.is_registered("#test.shape"));
        assert_eq!(registry.base_type(), "#test.shape");
    }
}

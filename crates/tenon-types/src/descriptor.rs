//! Type descriptors
//!
//! A `TypeDesc` identifies a runtime type and carries the
//! assignable-from relation used during overload matching and field
//! assignment. Class subtyping is resolved against the registry;
//! primitives match exactly (no numeric widening).

use crate::registry::ClassRegistry;

/// Opaque identifier for a runtime type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Float,
    /// String
    Str,
    /// Class type, by registry id
    Object(usize),
    /// Top type; assignable from every runtime type
    Any,
}

impl TypeDesc {
    /// Check whether a value of type `other` may be used where `self`
    /// is expected.
    ///
    /// `Object(a)` is assignable from `Object(b)` iff `b` is `a` or a
    /// descendant of `a` in the registry's ancestor chain.
    pub fn is_assignable_from(&self, other: &TypeDesc, registry: &ClassRegistry) -> bool {
        match (self, other) {
            (TypeDesc::Any, _) => true,
            (TypeDesc::Object(sup), TypeDesc::Object(sub)) => {
                registry.is_subclass_of(*sub, *sup)
            }
            (expected, actual) => expected == actual,
        }
    }

    /// Human-readable name for diagnostics
    pub fn describe(&self, registry: &ClassRegistry) -> String {
        match self {
            TypeDesc::Bool => "bool".to_string(),
            TypeDesc::Int => "int".to_string(),
            TypeDesc::Float => "float".to_string(),
            TypeDesc::Str => "string".to_string(),
            TypeDesc::Any => "any".to_string(),
            TypeDesc::Object(id) => registry
                .get_class(*id)
                .map(|class| class.name.clone())
                .unwrap_or_else(|| format!("class#{id}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::Class;

    fn registry_with_chain() -> ClassRegistry {
        // Animal (0) -> Dog (1)
        let mut registry = ClassRegistry::new();
        registry.register_class(Class::new(0, "Animal".to_string()));
        registry.register_class(Class::with_parent(1, "Dog".to_string(), 0));
        registry
    }

    #[test]
    fn test_primitives_match_exactly() {
        let registry = ClassRegistry::new();
        assert!(TypeDesc::Int.is_assignable_from(&TypeDesc::Int, &registry));
        assert!(!TypeDesc::Float.is_assignable_from(&TypeDesc::Int, &registry));
        assert!(!TypeDesc::Str.is_assignable_from(&TypeDesc::Bool, &registry));
    }

    #[test]
    fn test_any_is_top() {
        let registry = registry_with_chain();
        assert!(TypeDesc::Any.is_assignable_from(&TypeDesc::Int, &registry));
        assert!(TypeDesc::Any.is_assignable_from(&TypeDesc::Object(1), &registry));
        assert!(!TypeDesc::Int.is_assignable_from(&TypeDesc::Any, &registry));
    }

    #[test]
    fn test_object_subtyping() {
        let registry = registry_with_chain();
        // Dog where Animal is expected: ok
        assert!(TypeDesc::Object(0).is_assignable_from(&TypeDesc::Object(1), &registry));
        // Animal where Dog is expected: no
        assert!(!TypeDesc::Object(1).is_assignable_from(&TypeDesc::Object(0), &registry));
        // Reflexive
        assert!(TypeDesc::Object(1).is_assignable_from(&TypeDesc::Object(1), &registry));
    }

    #[test]
    fn test_describe() {
        let registry = registry_with_chain();
        assert_eq!(TypeDesc::Object(1).describe(&registry), "Dog");
        assert_eq!(TypeDesc::Object(99).describe(&registry), "class#99");
        assert_eq!(TypeDesc::Str.describe(&registry), "string");
    }
}

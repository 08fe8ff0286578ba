//! Conventional setter discovery
//!
//! A property `name` maps to the setter name `setName`. Candidates
//! are public methods taking exactly one parameter, searched on the
//! class and its ancestors (the public-method view includes inherited
//! methods). The unconstrained mode refuses to guess between
//! overloads with different parameter types.

use rustc_hash::FxHashSet;

use tenon_types::{Class, ClassRegistry, Method, TypeDesc, Visibility};

use crate::error::{ReflectError, ReflectResult};

/// Derive the conventional setter name for a property
pub fn setter_name(property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

/// Find a setter for `property` whose single parameter type is
/// assignable from `desired`. First such candidate wins; `None` when
/// no candidate fits.
pub fn find_setter<'a>(
    registry: &'a ClassRegistry,
    class_id: usize,
    property: &str,
    desired: &TypeDesc,
) -> Option<(&'a Class, &'a Method)> {
    let name = setter_name(property);
    for class in registry.class_hierarchy(class_id) {
        for method in class.declared_methods(&name) {
            if method.visibility == Visibility::Public
                && method.params.len() == 1
                && method.params[0].is_assignable_from(desired, registry)
            {
                return Some((class, method));
            }
        }
    }
    None
}

/// Find the setter for `property` without a desired parameter type.
///
/// When candidates with more than one distinct parameter type exist,
/// fails with `AmbiguousSetter` rather than guessing. When all
/// candidates share one parameter type, an arbitrary one (the first
/// found) is returned. `Ok(None)` when there is no candidate at all.
pub fn find_single_setter<'a>(
    registry: &'a ClassRegistry,
    class_id: usize,
    property: &str,
) -> ReflectResult<Option<(&'a Class, &'a Method)>> {
    let name = setter_name(property);
    let mut candidates: Vec<(&Class, &Method)> = Vec::new();
    let mut param_types: FxHashSet<TypeDesc> = FxHashSet::default();

    for class in registry.class_hierarchy(class_id) {
        for method in class.declared_methods(&name) {
            if method.visibility == Visibility::Public && method.params.len() == 1 {
                param_types.insert(method.params[0]);
                candidates.push((class, method));
            }
        }
    }

    if param_types.len() > 1 {
        return Err(ReflectError::AmbiguousSetter {
            name,
            class: registry
                .get_class(class_id)
                .map(|class| class.name.clone())
                .unwrap_or_else(|| format!("class#{class_id}")),
        });
    }

    Ok(candidates.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tenon_types::{MethodFn, Value};

    fn noop() -> MethodFn {
        Arc::new(|_, _| Ok(Value::Null))
    }

    #[test]
    fn test_setter_name_derivation() {
        assert_eq!(setter_name("name"), "setName");
        assert_eq!(setter_name("x"), "setX");
        assert_eq!(setter_name("URL"), "setURL");
        assert_eq!(setter_name(""), "set");
    }

    #[test]
    fn test_ambiguous_setter_refused() {
        let mut registry = ClassRegistry::new();
        let mut class = Class::new(0, "Bean".to_string());
        class.add_method(Method::new("setName", vec![TypeDesc::Str], noop()));
        class.add_method(Method::new("setName", vec![TypeDesc::Int], noop()));
        registry.register_class(class);

        let err = find_single_setter(&registry, 0, "name").unwrap_err();
        match err {
            ReflectError::AmbiguousSetter { name, class } => {
                assert_eq!(name, "setName");
                assert_eq!(class, "Bean");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_same_signature_candidates_pick_first() {
        // Same parameter type declared on both the class and its parent
        let mut registry = ClassRegistry::new();
        let mut base = Class::new(0, "Base".to_string());
        base.add_method(Method::new("setName", vec![TypeDesc::Str], noop()));
        registry.register_class(base);

        let mut bean = Class::with_parent(1, "Bean".to_string(), 0);
        bean.add_method(Method::new("setName", vec![TypeDesc::Str], noop()));
        registry.register_class(bean);

        let (class, _) = find_single_setter(&registry, 1, "name").unwrap().unwrap();
        assert_eq!(class.name, "Bean");
    }

    #[test]
    fn test_no_setter_is_ok_none() {
        let mut registry = ClassRegistry::new();
        registry.register_class(Class::new(0, "Bare".to_string()));
        assert!(find_single_setter(&registry, 0, "name").unwrap().is_none());
    }

    #[test]
    fn test_constrained_setter_accepts_supertype_parameter() {
        // Only setName(Any) exists; desired type Str is assignable to it
        let mut registry = ClassRegistry::new();
        let mut class = Class::new(0, "Bean".to_string());
        class.add_method(Method::new("setName", vec![TypeDesc::Any], noop()));
        registry.register_class(class);

        let (_, method) = find_setter(&registry, 0, "name", &TypeDesc::Str).unwrap();
        assert_eq!(method.params, vec![TypeDesc::Any]);
    }

    #[test]
    fn test_constrained_setter_rejects_mismatch() {
        let mut registry = ClassRegistry::new();
        let mut class = Class::new(0, "Bean".to_string());
        class.add_method(Method::new("setName", vec![TypeDesc::Int], noop()));
        registry.register_class(class);

        assert!(find_setter(&registry, 0, "name", &TypeDesc::Str).is_none());
    }

    #[test]
    fn test_private_setter_not_a_candidate() {
        let mut registry = ClassRegistry::new();
        let mut class = Class::new(0, "Bean".to_string());
        class.add_method(
            Method::new("setName", vec![TypeDesc::Str], noop())
                .with_visibility(Visibility::Private),
        );
        registry.register_class(class);

        assert!(find_setter(&registry, 0, "name", &TypeDesc::Str).is_none());
        assert!(find_single_setter(&registry, 0, "name").unwrap().is_none());
    }

    #[test]
    fn test_setter_found_on_ancestor() {
        let mut registry = ClassRegistry::new();
        let mut base = Class::new(0, "Base".to_string());
        base.add_method(Method::new("setName", vec![TypeDesc::Str], noop()));
        registry.register_class(base);
        registry.register_class(Class::with_parent(1, "Bean".to_string(), 0));

        let (class, _) = find_setter(&registry, 1, "name", &TypeDesc::Str).unwrap();
        assert_eq!(class.name, "Base");
    }
}

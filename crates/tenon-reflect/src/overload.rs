//! Overload and constructor matching
//!
//! A candidate matches an argument vector iff the parameter count
//! equals the argument count and, at every position, the argument is
//! null or its runtime type is assignable to the declared parameter
//! type. Selection is first-found in declaration order: no scoring,
//! no most-specific tie-break. Methods ascend the ancestor chain when
//! the declaring class has no match; constructors never ascend.

use tenon_types::{Class, ClassRegistry, Constructor, Method, TypeDesc, Value};

/// Check a declared parameter list against an argument vector.
///
/// Empty parameter list matches only an empty argument vector. Null
/// arguments match any declared type.
pub fn signature_matches(registry: &ClassRegistry, params: &[TypeDesc], args: &[Value]) -> bool {
    if params.len() != args.len() {
        return false;
    }
    params.iter().zip(args).all(|(param, arg)| match arg.type_desc() {
        None => true,
        Some(actual) => param.is_assignable_from(&actual, registry),
    })
}

/// Find the first method named `name` compatible with `args`,
/// searching the class and then its ancestors.
///
/// Returns the declaring class alongside the method. Visibility is
/// not consulted here; this is the declared-member view used for
/// dynamic invocation.
pub fn find_method<'a>(
    registry: &'a ClassRegistry,
    class_id: usize,
    name: &str,
    args: &[Value],
) -> Option<(&'a Class, &'a Method)> {
    for class in registry.class_hierarchy(class_id) {
        for method in class.declared_methods(name) {
            if signature_matches(registry, &method.params, args) {
                return Some((class, method));
            }
        }
    }
    None
}

/// Find the first constructor of the exact class compatible with
/// `args`. Constructors declared on ancestors are never considered.
pub fn find_constructor<'a>(
    registry: &'a ClassRegistry,
    class_id: usize,
    args: &[Value],
) -> Option<&'a Constructor> {
    let class = registry.get_class(class_id)?;
    class
        .constructors
        .iter()
        .find(|ctor| signature_matches(registry, &ctor.params, args))
}

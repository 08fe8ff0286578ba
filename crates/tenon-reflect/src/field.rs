//! Field lookup and access-checked writes
//!
//! Lookup walks the ancestor chain and reports absence as `None`;
//! a missing field is routine, not exceptional. Writes bypass
//! declared visibility (a deliberate escape hatch) but still honor
//! the runtime's protection model (readonly fields) and the field's
//! declared type.

use tenon_types::{Class, ClassRegistry, Field, Value};

use crate::error::{ReflectError, ReflectResult};

/// Find a field by name on the class or the nearest ancestor
/// declaring it. Returns the declaring class alongside the field;
/// `None` once the root is exhausted.
pub fn find_field<'a>(
    registry: &'a ClassRegistry,
    class_id: usize,
    name: &str,
) -> Option<(&'a Class, &'a Field)> {
    for class in registry.class_hierarchy(class_id) {
        if let Some(field) = class.declared_field(name) {
            return Some((class, field));
        }
    }
    None
}

/// Write a field on an object instance.
///
/// Declared visibility is deliberately not checked: private and
/// protected fields are writable through this path. Readonly fields
/// fail with `FieldAccessDenied`; a value whose runtime type is not
/// assignable to the declared field type fails with `InvalidValue`
/// (null is always assignable).
pub fn set_value(
    registry: &ClassRegistry,
    target: &Value,
    field: &Field,
    value: Value,
) -> ReflectResult<()> {
    let instance = target.as_instance().ok_or_else(|| ReflectError::InvalidValue {
        target: field.name.clone(),
        expected: field.ty.describe(registry),
        actual: target.kind_name().to_string(),
    })?;

    if field.readonly {
        return Err(ReflectError::FieldAccessDenied {
            field: field.name.clone(),
            class: class_name(registry, instance.class_id()),
        });
    }

    if let Some(actual) = value.type_desc() {
        if !field.ty.is_assignable_from(&actual, registry) {
            return Err(ReflectError::InvalidValue {
                target: field.name.clone(),
                expected: field.ty.describe(registry),
                actual: actual.describe(registry),
            });
        }
    }

    instance.set(field.name.clone(), value);
    Ok(())
}

/// Read a field slot from an object instance; `None` for non-objects
/// or unset slots.
pub fn get_value(target: &Value, name: &str) -> Option<Value> {
    target.as_instance().and_then(|instance| instance.get(name))
}

fn class_name(registry: &ClassRegistry, class_id: usize) -> String {
    registry
        .get_class(class_id)
        .map(|class| class.name.clone())
        .unwrap_or_else(|| format!("class#{class_id}"))
}

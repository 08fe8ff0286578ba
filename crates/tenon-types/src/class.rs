//! Class metadata
//!
//! A `Class` records its declared members in declaration order.
//! Order matters: overload resolution is first-found, so the order
//! members are added is part of the observable contract.

use crate::member::{Constructor, Field, Method};

/// Runtime class metadata
#[derive(Debug, Clone)]
pub struct Class {
    /// Class id (registry index)
    pub id: usize,
    /// Fully qualified class name, unique within a registry
    pub name: String,
    /// Parent class id (None for root classes)
    pub parent_id: Option<usize>,
    /// Declared fields, in declaration order
    pub fields: Vec<Field>,
    /// Declared methods, in declaration order
    pub methods: Vec<Method>,
    /// Declared constructors, in declaration order
    pub constructors: Vec<Constructor>,
}

impl Class {
    /// Create a new root class
    pub fn new(id: usize, name: String) -> Self {
        Self {
            id,
            name,
            parent_id: None,
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Create a new class with a parent
    pub fn with_parent(id: usize, name: String, parent_id: usize) -> Self {
        Self {
            id,
            name,
            parent_id: Some(parent_id),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Declare a field
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Declare a method; declaration order decides overload ties
    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Declare a constructor; declaration order decides overload ties
    pub fn add_constructor(&mut self, constructor: Constructor) {
        self.constructors.push(constructor);
    }

    /// Look up a field declared on this exact class
    pub fn declared_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Methods declared on this exact class with a name, in
    /// declaration order
    pub fn declared_methods(&self, name: &str) -> Vec<&Method> {
        self.methods.iter().filter(|method| method.name == name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDesc;
    use crate::member::MethodFn;
    use crate::value::Value;
    use std::sync::Arc;

    fn noop_body() -> MethodFn {
        Arc::new(|_, _| Ok(Value::Null))
    }

    #[test]
    fn test_declared_field() {
        let mut class = Class::new(0, "Point".to_string());
        class.add_field(Field::new("x", TypeDesc::Int));
        class.add_field(Field::new("y", TypeDesc::Int));

        assert!(class.declared_field("x").is_some());
        assert!(class.declared_field("z").is_none());
    }

    #[test]
    fn test_declared_methods_preserve_order() {
        let mut class = Class::new(0, "Widget".to_string());
        class.add_method(Method::new("resize", vec![TypeDesc::Int], noop_body()));
        class.add_method(Method::new("resize", vec![TypeDesc::Float], noop_body()));

        let params: Vec<_> = class
            .declared_methods("resize")
            .into_iter()
            .map(|m| m.params[0])
            .collect();
        assert_eq!(params, vec![TypeDesc::Int, TypeDesc::Float]);
    }
}

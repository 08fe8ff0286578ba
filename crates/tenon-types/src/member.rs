//! Candidate members: fields, methods, constructors
//!
//! Members carry their declared parameter types for matching and a
//! body closure for invocation. With no runtime reflection available,
//! the closure is the registered stand-in for the member's code.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::descriptor::TypeDesc;
use crate::value::{Instance, Value};

/// Failure raised by an invoked constructor or method body
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CallError {
    /// What the invoked body reported
    pub message: String,
}

impl CallError {
    /// Create a call error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Declared visibility of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible everywhere
    Public,
    /// Visible to the class and its descendants
    Protected,
    /// Visible to the declaring class only
    Private,
}

/// Method body: receiver (if any) plus argument vector
pub type MethodFn =
    Arc<dyn Fn(Option<&Value>, &[Value]) -> Result<Value, CallError> + Send + Sync>;

/// Constructor factory: argument vector to a fresh value
pub type ConstructorFn = Arc<dyn Fn(&[Value]) -> Result<Value, CallError> + Send + Sync>;

/// A declared field
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Declared type
    pub ty: TypeDesc,
    /// Declared visibility; field writes deliberately bypass this
    pub visibility: Visibility,
    /// Readonly fields refuse writes outright
    pub readonly: bool,
}

impl Field {
    /// Create a public, writable field
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            readonly: false,
        }
    }

    /// Set the declared visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark the field readonly
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

/// A declared method
#[derive(Clone)]
pub struct Method {
    /// Method name
    pub name: String,
    /// Declared parameter types, in order
    pub params: Vec<TypeDesc>,
    /// Declared visibility
    pub visibility: Visibility,
    /// Whether the method takes no receiver
    pub is_static: bool,
    body: MethodFn,
}

impl Method {
    /// Create a public instance method
    pub fn new(name: impl Into<String>, params: Vec<TypeDesc>, body: MethodFn) -> Self {
        Self {
            name: name.into(),
            params,
            visibility: Visibility::Public,
            is_static: false,
            body,
        }
    }

    /// Set the declared visibility
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark the method static
    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Invoke the method body
    pub fn call(&self, receiver: Option<&Value>, args: &[Value]) -> Result<Value, CallError> {
        (self.body)(receiver, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("visibility", &self.visibility)
            .field("is_static", &self.is_static)
            .finish_non_exhaustive()
    }
}

/// A declared constructor
#[derive(Clone)]
pub struct Constructor {
    /// Declared parameter types, in order
    pub params: Vec<TypeDesc>,
    factory: ConstructorFn,
}

impl Constructor {
    /// Create a constructor from an explicit factory
    pub fn new(params: Vec<TypeDesc>, factory: ConstructorFn) -> Self {
        Self { params, factory }
    }

    /// Stock constructor that allocates an instance of `class_id` and
    /// populates the named fields positionally from the arguments.
    pub fn field_initializer(class_id: usize, fields: &[(&str, TypeDesc)]) -> Self {
        let params: Vec<TypeDesc> = fields.iter().map(|(_, ty)| *ty).collect();
        let names: Vec<String> = fields.iter().map(|(name, _)| (*name).to_string()).collect();
        let factory: ConstructorFn = Arc::new(move |args| {
            let instance = Instance::new(class_id);
            for (name, value) in names.iter().zip(args) {
                instance.set(name.clone(), value.clone());
            }
            Ok(Value::object(instance))
        });
        Self { params, factory }
    }

    /// Invoke the factory
    pub fn call(&self, args: &[Value]) -> Result<Value, CallError> {
        (self.factory)(args)
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

//! Dynamic runtime values
//!
//! `Value` is the unit of the argument vector: every argument and
//! every field slot holds one. Values are cheap to clone; object
//! payloads are shared behind an `Arc`.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::descriptor::TypeDesc;

/// A dynamic runtime value
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value; matches any declared parameter type
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// Immutable string
    Str(Arc<str>),
    /// Object instance
    Object(Arc<Instance>),
}

impl Value {
    /// Create a string value
    pub fn str(s: impl AsRef<str>) -> Self {
        Value::Str(Arc::from(s.as_ref()))
    }

    /// Wrap an instance into an object value
    pub fn object(instance: Instance) -> Self {
        Value::Object(Arc::new(instance))
    }

    /// Check whether this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Runtime type descriptor of this value, `None` for null
    pub fn type_desc(&self) -> Option<TypeDesc> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(TypeDesc::Bool),
            Value::Int(_) => Some(TypeDesc::Int),
            Value::Float(_) => Some(TypeDesc::Float),
            Value::Str(_) => Some(TypeDesc::Str),
            Value::Object(instance) => Some(TypeDesc::Object(instance.class_id())),
        }
    }

    /// Short kind name used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Object(_) => "object",
        }
    }

    /// Interpret as a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Interpret as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Interpret as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Interpret as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret as an object instance
    pub fn as_instance(&self) -> Option<&Arc<Instance>> {
        match self {
            Value::Object(instance) => Some(instance),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            // Object identity, not structural equality
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// An object instance: class id plus name-keyed field storage
///
/// Raw `get`/`set` here are unchecked; typed and access-checked
/// assignment lives in the resolver. The lock makes concurrent
/// readers safe against the field-set escape hatch.
#[derive(Debug)]
pub struct Instance {
    class_id: usize,
    fields: RwLock<FxHashMap<String, Value>>,
}

impl Instance {
    /// Create an instance with no fields set
    pub fn new(class_id: usize) -> Self {
        Self {
            class_id,
            fields: RwLock::new(FxHashMap::default()),
        }
    }

    /// Class this instance belongs to
    pub fn class_id(&self) -> usize {
        self.class_id
    }

    /// Read a field slot; `None` when never set
    pub fn get(&self, name: &str) -> Option<Value> {
        self.fields.read().get(name).cloned()
    }

    /// Write a field slot unconditionally
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.fields.write().insert(name.into(), value);
    }
}

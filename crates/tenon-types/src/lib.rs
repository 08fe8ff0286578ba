//! Tenon runtime type model
//!
//! This crate provides the metadata the resolver operates on:
//! - Dynamic values and object instances
//! - Type descriptors with an assignable-from relation
//! - Class metadata (declared fields, methods, constructors)
//! - The class registry (name lookup, ancestor chain, subtype queries)
//!
//! The registry is populated once at startup and treated as read-only
//! afterwards; all resolver queries are pure lookups over it.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod class;
pub mod descriptor;
pub mod member;
pub mod registry;
pub mod value;

pub use class::Class;
pub use descriptor::TypeDesc;
pub use member::{
    CallError, Constructor, ConstructorFn, Field, Method, MethodFn, Visibility,
};
pub use registry::ClassRegistry;
pub use value::{Instance, Value};

//! Tenon dynamic member resolver
//!
//! Locates classes, constructors, methods and fields by name and
//! best-matching runtime argument types, without compile-time type
//! information:
//!
//! - Class resolution by name across a layered loader chain
//!   (custom, calling-context, local), first error preserved
//! - Overload and constructor matching against an argument vector;
//!   methods ascend the ancestor chain, constructors do not
//! - Field lookup along the ancestor chain (absence is routine, not
//!   an error) and access-checked field writes
//! - Conventional setter discovery with explicit refusal to guess
//!   between incompatible overloads
//! - Resource lookup through the same loader chain
//!
//! Resolution is a pure function of the registered metadata and the
//! argument vector; nothing is cached and nothing is mutated, so
//! every operation is safe to call concurrently.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod field;
pub mod loader;
pub mod overload;
pub mod resolver;
pub mod resource;
pub mod setter;

pub use error::{MemberKind, ReflectError, ReflectResult};
pub use loader::{ClassLoader, LoadError, LoaderChain, RegistryLoader, Resource};
pub use resolver::Resolver;

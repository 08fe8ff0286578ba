//! Resolver facade
//!
//! Ties the loader chain and the class registry together behind the
//! operations callers actually use: load a class by name, construct
//! an instance, invoke a method on a value, and the field/setter
//! entry points. Invocation failures are wrapped distinctly from
//! resolution failures.

use std::sync::Arc;

use tracing::debug;

use tenon_types::{Class, ClassRegistry, Field, Method, TypeDesc, Value};

use crate::error::{MemberKind, ReflectError, ReflectResult};
use crate::loader::LoaderChain;
use crate::{field, overload, setter};

/// Dynamic member resolver over a registry and a loader chain
///
/// All operations are pure lookups over externally owned metadata and
/// are safe to call from any number of threads.
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<ClassRegistry>,
    chain: LoaderChain,
}

impl Resolver {
    /// Create a resolver over a registry and a loader chain
    pub fn new(registry: Arc<ClassRegistry>, chain: LoaderChain) -> Self {
        Self { registry, chain }
    }

    /// The registry this resolver reads from
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// The loader chain this resolver consults
    pub fn chain(&self) -> &LoaderChain {
        &self.chain
    }

    /// Resolve a class name through the loader chain
    pub fn load_class(&self, name: &str) -> ReflectResult<usize> {
        self.chain.load_class(name)
    }

    /// Load a class and construct an instance with no arguments
    pub fn instantiate(&self, class_name: &str) -> ReflectResult<Value> {
        self.instantiate_with(class_name, &[])
    }

    /// Load a class and construct an instance from an argument vector.
    ///
    /// Constructor matching considers the named class only; it never
    /// ascends to ancestors.
    pub fn instantiate_with(&self, class_name: &str, args: &[Value]) -> ReflectResult<Value> {
        let class_id = self.chain.load_class(class_name)?;
        let ctor = overload::find_constructor(&self.registry, class_id, args).ok_or_else(|| {
            ReflectError::NoMatchingMember {
                kind: MemberKind::Constructor,
                name: "new".to_string(),
                class: class_name.to_string(),
                arity: args.len(),
            }
        })?;

        debug!(class = class_name, arity = args.len(), "instantiating");
        ctor.call(args).map_err(|source| ReflectError::InvocationFailed {
            member: format!("{class_name}::new"),
            source,
        })
    }

    /// Resolve a method against the target's class (ascending the
    /// ancestor chain) and invoke it with the receiver.
    ///
    /// A failure raised by the invoked body comes back as
    /// `InvocationFailed`, distinct from any resolution failure.
    pub fn invoke(&self, target: &Value, method_name: &str, args: &[Value]) -> ReflectResult<Value> {
        let no_match = |class: String| ReflectError::NoMatchingMember {
            kind: MemberKind::Method,
            name: method_name.to_string(),
            class,
            arity: args.len(),
        };

        // Primitives declare no members
        let instance = target
            .as_instance()
            .ok_or_else(|| no_match(target.kind_name().to_string()))?;

        let (class, method) =
            overload::find_method(&self.registry, instance.class_id(), method_name, args)
                .ok_or_else(|| no_match(self.class_name(instance.class_id())))?;

        debug!(class = %class.name, method = method_name, "invoking");
        method
            .call(Some(target), args)
            .map_err(|source| ReflectError::InvocationFailed {
                member: format!("{}::{}", class.name, method_name),
                source,
            })
    }

    /// Find a field on a class or its ancestors; `None` is routine
    pub fn find_field(&self, class_id: usize, name: &str) -> Option<(&Class, &Field)> {
        field::find_field(&self.registry, class_id, name)
    }

    /// Find a field by name on a target value's class
    pub fn find_field_on(&self, target: &Value, name: &str) -> Option<(&Class, &Field)> {
        let instance = target.as_instance()?;
        field::find_field(&self.registry, instance.class_id(), name)
    }

    /// Write a field on a target, bypassing declared visibility
    pub fn set_field(&self, target: &Value, field: &Field, value: Value) -> ReflectResult<()> {
        field::set_value(&self.registry, target, field, value)
    }

    /// Read a field slot from a target
    pub fn get_field(&self, target: &Value, name: &str) -> Option<Value> {
        field::get_value(target, name)
    }

    /// Find a setter for a property constrained to a desired type
    pub fn find_setter(
        &self,
        class_id: usize,
        property: &str,
        desired: &TypeDesc,
    ) -> Option<(&Class, &Method)> {
        setter::find_setter(&self.registry, class_id, property, desired)
    }

    /// Find the single unambiguous setter for a property
    pub fn find_single_setter(
        &self,
        class_id: usize,
        property: &str,
    ) -> ReflectResult<Option<(&Class, &Method)>> {
        setter::find_single_setter(&self.registry, class_id, property)
    }

    fn class_name(&self, class_id: usize) -> String {
        self.registry
            .get_class(class_id)
            .map(|class| class.name.clone())
            .unwrap_or_else(|| format!("class#{class_id}"))
    }
}

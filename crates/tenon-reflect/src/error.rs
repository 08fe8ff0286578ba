//! Resolver error taxonomy
//!
//! Resolution failures are always reported to the caller; the two
//! routine absences (field lookup, resource lookup) are `Option`
//! results instead and never surface here.

use std::fmt;

use tenon_types::CallError;

use crate::loader::LoadError;

/// Kind of candidate member under resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// A constructor
    Constructor,
    /// An instance or static method
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Constructor => write!(f, "constructor"),
            MemberKind::Method => write!(f, "method"),
        }
    }
}

/// Resolution and invocation errors
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    /// Every loader in the chain failed; wraps the first underlying
    /// cause encountered, not the last
    #[error("class not found: {name}")]
    ClassNotFound {
        /// Fully qualified name that was requested
        name: String,
        /// Failure from the first (most trusted) loader tried
        #[source]
        source: LoadError,
    },

    /// No declared member signature is compatible with the arguments
    #[error("no matching {kind} {name} on class {class} for {arity} argument(s)")]
    NoMatchingMember {
        /// Constructor or method
        kind: MemberKind,
        /// Member name searched for
        name: String,
        /// Class the search started on
        class: String,
        /// Number of arguments supplied
        arity: usize,
    },

    /// Field exists but the runtime's protection model refuses the write
    #[error("not allowed to write field {field} on class {class}")]
    FieldAccessDenied {
        /// Field name
        field: String,
        /// Class owning the instance
        class: String,
    },

    /// Value type incompatible with the declared target type
    #[error("value of type {actual} is not assignable to {target} of type {expected}")]
    InvalidValue {
        /// What was being assigned (field name)
        target: String,
        /// Declared type
        expected: String,
        /// Runtime type of the supplied value
        actual: String,
    },

    /// Multiple single-parameter setters with different parameter
    /// types share the name; refusing to guess
    #[error("more than one setter named {name} with different parameter types on class {class}")]
    AmbiguousSetter {
        /// Derived setter name
        name: String,
        /// Class the search started on
        class: String,
    },

    /// The resolved member was invoked and its body failed; distinct
    /// from any failure during resolution
    #[error("invocation of {member} failed")]
    InvocationFailed {
        /// Qualified member name
        member: String,
        /// Failure raised by the invoked body
        #[source]
        source: CallError,
    },
}

/// Resolver result alias
pub type ReflectResult<T> = Result<T, ReflectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_not_found_display_and_source() {
        use std::error::Error;

        let err = ReflectError::ClassNotFound {
            name: "org.example.Missing".to_string(),
            source: LoadError::UnknownClass {
                name: "org.example.Missing".to_string(),
            },
        };
        assert_eq!(err.to_string(), "class not found: org.example.Missing");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_no_matching_member_display() {
        let err = ReflectError::NoMatchingMember {
            kind: MemberKind::Constructor,
            name: "new".to_string(),
            class: "Widget".to_string(),
            arity: 2,
        };
        assert_eq!(
            err.to_string(),
            "no matching constructor new on class Widget for 2 argument(s)"
        );
    }
}

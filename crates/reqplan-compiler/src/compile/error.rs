//! Compilation error types.

/// Configuration error during plan compilation.
///
/// Every variant is fatal to the root being compiled and names the
/// offending type (and field where one exists). Nothing is silently
/// skipped: a partial plan would under-report violations at check time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A field referenced a type the graph does not define.
    #[error("unknown type `{type_name}` referenced by field `{field}` of `{referrer}`")]
    UnknownFieldType {
        referrer: String,
        field: String,
        type_name: String,
    },

    /// A type declared a parent the graph does not define.
    #[error("unknown parent type `{parent}` declared by `{type_name}`")]
    UnknownParent { type_name: String, parent: String },

    /// A requested root is not in the graph.
    #[error("unknown root type `{0}`")]
    UnknownRoot(String),

    /// Only concrete types are compiled as roots.
    #[error("root type `{0}` is abstract and cannot be compiled")]
    AbstractRoot(String),

    /// A container field has no element type bound.
    #[error("unbound element type on field `{field}` of `{type_name}`")]
    UnboundElement { type_name: String, field: String },

    /// A container field's element type is itself a container; element
    /// resolution must recover exactly one checked type.
    #[error(
        "unresolvable element type on field `{field}` of `{type_name}`: \
         nested container elements are not supported"
    )]
    NestedElement { type_name: String, field: String },
}

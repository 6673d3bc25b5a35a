//! Type and field descriptor definitions.
//!
//! A descriptor is the read-only view of one declared type: its fields,
//! each field's declared type and required marker, and an optional parent
//! reference (single chain, no multiple inheritance).

use serde::{Deserialize, Serialize};

/// Declared type of a field.
///
/// Closed set of shapes; the classifier dispatches over these variants
/// rather than inspecting names at runtime. Container element types are
/// optional because a schema may leave an element type unbound; the
/// compiler rejects that as a configuration error, not the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTy {
    /// Boolean primitive.
    Bool,
    /// Integer primitive.
    Int,
    /// Floating-point primitive.
    Float,
    /// Text value.
    Text,
    /// Reference to another declared type, by name.
    Object(String),
    /// Ordered container.
    List(Option<Box<FieldTy>>),
    /// Unordered container.
    Set(Option<Box<FieldTy>>),
    /// Fixed-size array.
    Array(Option<Box<FieldTy>>),
}

impl FieldTy {
    /// Whether this is a primitive type (Bool, Int, Float).
    ///
    /// Primitives cannot represent absence and are excluded from check
    /// generation entirely.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Float)
    }

    /// Whether this is a container type (List, Set, Array).
    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Set(_) | Self::Array(_))
    }

    /// The declared element type, for containers with a bound element.
    pub fn element(&self) -> Option<&FieldTy> {
        match self {
            Self::List(e) | Self::Set(e) | Self::Array(e) => e.as_deref(),
            _ => None,
        }
    }
}

/// One field declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, used verbatim in violation paths.
    pub name: String,
    /// Instance key read at check time. Defaults to the field name.
    /// Opaque to the compiler; it is copied into instructions unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor: Option<String>,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: FieldTy,
    /// Required marker: gates presence/non-emptiness checks only.
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    /// The key the checker reads this field under.
    pub fn accessor_key(&self) -> &str {
        self.accessor.as_deref().unwrap_or(&self.name)
    }
}

/// Read-only description of one declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully-qualified type name (unique key in the graph).
    pub name: String,
    /// Parent type name, if any (single chain).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Abstract types are never compiled and yield no plan.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// Root marker: compiled as an entry point by default root discovery.
    #[serde(default)]
    pub root: bool,
    /// Fields declared directly on this type, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Whether this type can be instantiated (and therefore compiled).
    pub fn is_concrete(&self) -> bool {
        !self.is_abstract
    }

    /// Last segment of the qualified name (`shop.Order` -> `Order`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

//! Field shape classification.
//!
//! A closed variant with one arm per shape; the compiler dispatches over
//! these instead of inspecting declared types inline. Pure, no side
//! effects.

use reqplan_core::FieldTy;

/// Resolved element type of a container field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind<'a> {
    /// Primitive elements: the container length check is all there is.
    Scalar,
    /// Text elements, each checked for non-emptiness.
    Text,
    /// Object elements, validated by the named type's plan.
    Object(&'a str),
}

/// Shape of a field's declared type, as seen by the plan compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape<'a> {
    /// Primitive numeric/boolean. Generates no checks at all: primitives
    /// cannot represent absence, so a required marker on one is a no-op.
    Scalar,
    /// Text value; the required marker means non-empty.
    Text,
    /// Ordered container.
    Ordered(ElementKind<'a>),
    /// Unordered container.
    Unordered(ElementKind<'a>),
    /// Fixed-size array.
    Array(ElementKind<'a>),
    /// Nested object of the named type.
    Nested(&'a str),
}

impl<'a> FieldShape<'a> {
    /// The resolved element kind, for container shapes.
    pub fn element(&self) -> Option<ElementKind<'a>> {
        match self {
            Self::Ordered(e) | Self::Unordered(e) | Self::Array(e) => Some(*e),
            _ => None,
        }
    }
}

/// Why a container's element type failed to resolve.
///
/// Both are configuration errors; the compiler attaches the offending
/// type and field names when surfacing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementIssue {
    /// No element type bound on the container.
    Unbound,
    /// The element type is itself a container; resolution must recover
    /// exactly one checked type.
    Nested,
}

/// Classify a field's declared type.
pub fn classify(ty: &FieldTy) -> Result<FieldShape<'_>, ElementIssue> {
    match ty {
        FieldTy::Bool | FieldTy::Int | FieldTy::Float => Ok(FieldShape::Scalar),
        FieldTy::Text => Ok(FieldShape::Text),
        FieldTy::Object(name) => Ok(FieldShape::Nested(name)),
        FieldTy::List(e) => Ok(FieldShape::Ordered(element_kind(e.as_deref())?)),
        FieldTy::Set(e) => Ok(FieldShape::Unordered(element_kind(e.as_deref())?)),
        FieldTy::Array(e) => Ok(FieldShape::Array(element_kind(e.as_deref())?)),
    }
}

fn element_kind(elem: Option<&FieldTy>) -> Result<ElementKind<'_>, ElementIssue> {
    match elem {
        None => Err(ElementIssue::Unbound),
        Some(FieldTy::Bool | FieldTy::Int | FieldTy::Float) => Ok(ElementKind::Scalar),
        Some(FieldTy::Text) => Ok(ElementKind::Text),
        Some(FieldTy::Object(name)) => Ok(ElementKind::Object(name)),
        Some(FieldTy::List(_) | FieldTy::Set(_) | FieldTy::Array(_)) => {
            Err(ElementIssue::Nested)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(name: &str) -> FieldTy {
        FieldTy::Object(name.to_string())
    }

    #[test]
    fn primitives_are_scalar() {
        assert_eq!(classify(&FieldTy::Bool), Ok(FieldShape::Scalar));
        assert_eq!(classify(&FieldTy::Int), Ok(FieldShape::Scalar));
        assert_eq!(classify(&FieldTy::Float), Ok(FieldShape::Scalar));
    }

    #[test]
    fn text_and_object() {
        assert_eq!(classify(&FieldTy::Text), Ok(FieldShape::Text));
        assert_eq!(classify(&obj("shop.Customer")), Ok(FieldShape::Nested("shop.Customer")));
    }

    #[test]
    fn containers_resolve_elements() {
        let ty = FieldTy::List(Some(Box::new(obj("shop.Item"))));
        assert_eq!(
            classify(&ty),
            Ok(FieldShape::Ordered(ElementKind::Object("shop.Item")))
        );

        let ty = FieldTy::Set(Some(Box::new(FieldTy::Text)));
        assert_eq!(classify(&ty), Ok(FieldShape::Unordered(ElementKind::Text)));

        let ty = FieldTy::Array(Some(Box::new(FieldTy::Int)));
        assert_eq!(classify(&ty), Ok(FieldShape::Array(ElementKind::Scalar)));
    }

    #[test]
    fn unbound_element_is_an_error() {
        assert_eq!(classify(&FieldTy::List(None)), Err(ElementIssue::Unbound));
        assert_eq!(classify(&FieldTy::Array(None)), Err(ElementIssue::Unbound));
    }

    #[test]
    fn nested_container_element_is_an_error() {
        let ty = FieldTy::List(Some(Box::new(FieldTy::Set(Some(Box::new(FieldTy::Text))))));
        assert_eq!(classify(&ty), Err(ElementIssue::Nested));
    }

    #[test]
    fn element_accessor() {
        let ty = FieldTy::List(Some(Box::new(FieldTy::Text)));
        let shape = classify(&ty).unwrap();
        assert_eq!(shape.element(), Some(ElementKind::Text));
        assert_eq!(FieldShape::Text.element(), None);
    }
}

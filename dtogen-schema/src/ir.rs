//! Intermediate representation for code generation.
//!
//! This module classifies each field of a descriptor into a [`Shape`] and
//! resolves its transfer-side type, giving the emitters a flat list of
//! [`ClassifiedField`]s to work from.

use crate::descriptor::{FieldDescriptor, NestedNameSet, TypeDescriptor, dto_name};
use crate::types::{Notation, TypeShape};

/// Structural category of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Not a nested convertible type; copied as is.
    Scalar,
    /// `T` with `T` nested convertible.
    Direct,
    /// `T?` with `T` nested convertible.
    Optional,
    /// `[T]` with `T` nested convertible.
    Array,
    /// `[T]?` with `T` nested convertible.
    OptionalArray,
}

impl Shape {
    /// Returns true if values of this shape go through a conversion call.
    #[must_use]
    pub const fn is_convertible(&self) -> bool {
        !matches!(self, Self::Scalar)
    }
}

/// A field together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedField {
    /// Source field.
    pub field: FieldDescriptor,
    /// Shape category.
    pub shape: Shape,
    /// Transfer-side type text, in the notation the field was declared with.
    pub transfer_type: String,
    /// Whether the base name is in the nested name set.
    pub is_convertible: bool,
}

impl ClassifiedField {
    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.field.name
    }

    /// Returns the transfer-side type as Rust type text.
    #[must_use]
    pub fn transfer_rust_type(&self) -> String {
        TypeShape::parse(&self.transfer_type).rust_type()
    }
}

/// Classifies one field against the nested name set.
///
/// Candidates are tried in the set's order and, per candidate, the forms
/// `[T]`, `[T]?`, `T`, `T?` in that priority; the first match wins. Matching
/// compares canonical shapes, so `Vec<T>` and `[T]` are the same form.
/// A field that matches nothing is [`Shape::Scalar`] and keeps its declared
/// type unchanged.
#[must_use]
pub fn classify(field: &FieldDescriptor, nested: &NestedNameSet) -> ClassifiedField {
    let declared = TypeShape::parse(&field.declared_type);

    for candidate in nested.iter() {
        let Some(shape) = match_forms(&declared, candidate) else {
            continue;
        };

        let notation = Notation::detect(&field.declared_type);
        let transfer_type = declared
            .with_base_name(&dto_name(candidate))
            .render(notation);

        tracing::debug!(
            field = %field.name,
            declared = %field.declared_type,
            transfer = %transfer_type,
            ?shape,
            "classified convertible field"
        );

        return ClassifiedField {
            field: field.clone(),
            shape,
            transfer_type,
            is_convertible: true,
        };
    }

    ClassifiedField {
        field: field.clone(),
        shape: Shape::Scalar,
        transfer_type: field.declared_type.clone(),
        is_convertible: false,
    }
}

/// Classifies every field of a descriptor, preserving declaration order.
#[must_use]
pub fn classify_fields(descriptor: &TypeDescriptor, nested: &NestedNameSet) -> Vec<ClassifiedField> {
    descriptor
        .fields
        .iter()
        .map(|field| classify(field, nested))
        .collect()
}

fn match_forms(declared: &TypeShape, candidate: &str) -> Option<Shape> {
    let is_candidate = |shape: &TypeShape| matches!(shape, TypeShape::Bare(name) if name == candidate);

    // Priority: [T], [T]?, T, T?
    match declared {
        TypeShape::Array(inner) if is_candidate(inner) => Some(Shape::Array),
        TypeShape::Optional(inner) => match inner.as_ref() {
            TypeShape::Array(element) if is_candidate(element) => Some(Shape::OptionalArray),
            bare if is_candidate(bare) => Some(Shape::Optional),
            _ => None,
        },
        bare if is_candidate(bare) => Some(Shape::Direct),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(names: &[&str]) -> NestedNameSet {
        names.iter().copied().collect()
    }

    fn classify_type(declared: &str, names: &[&str]) -> ClassifiedField {
        classify(&FieldDescriptor::new("field", declared), &nested(names))
    }

    #[test]
    fn test_classify_four_forms() {
        let cases = [
            ("[Order]", Shape::Array, "[OrderDTO]"),
            ("[Order]?", Shape::OptionalArray, "[OrderDTO]?"),
            ("Order", Shape::Direct, "OrderDTO"),
            ("Order?", Shape::Optional, "OrderDTO?"),
        ];

        for (declared, shape, transfer) in cases {
            let classified = classify_type(declared, &["Order"]);
            assert_eq!(classified.shape, shape, "{declared}");
            assert_eq!(classified.transfer_type, transfer, "{declared}");
            assert!(classified.is_convertible);
        }
    }

    #[test]
    fn test_classify_rust_notation() {
        let classified = classify_type("Option<Vec<Order>>", &["Order"]);
        assert_eq!(classified.shape, Shape::OptionalArray);
        assert_eq!(classified.transfer_type, "Option<Vec<OrderDTO>>");

        let classified = classify_type("Vec < Order >", &["Order"]);
        assert_eq!(classified.shape, Shape::Array);
        assert_eq!(classified.transfer_type, "Vec<OrderDTO>");
    }

    #[test]
    fn test_classify_scalar_keeps_declared_type() {
        let classified = classify_type("[ProductItem]", &[]);
        assert_eq!(classified.shape, Shape::Scalar);
        assert_eq!(classified.transfer_type, "[ProductItem]");
        assert!(!classified.is_convertible);
    }

    #[test]
    fn test_classify_unknown_name_degrades_to_scalar() {
        let classified = classify_type("[ProductItem]", &["Product", "Item"]);
        assert_eq!(classified.shape, Shape::Scalar);
        assert_eq!(classified.transfer_type, "[ProductItem]");
    }

    #[test]
    fn test_classify_no_partial_match() {
        assert_eq!(classify_type("Addresses", &["Address"]).shape, Shape::Scalar);
        assert_eq!(classify_type("MyAddress?", &["Address"]).shape, Shape::Scalar);
    }

    #[test]
    fn test_classify_deeper_nesting_is_scalar() {
        for declared in ["[[Order]]", "[Order?]", "Order??", "Vec<Option<Order>>"] {
            let classified = classify_type(declared, &["Order"]);
            assert_eq!(classified.shape, Shape::Scalar, "{declared}");
            assert_eq!(classified.transfer_type, declared);
        }
    }

    #[test]
    fn test_classify_first_candidate_wins() {
        let classified = classify_type("TypeB", &["TypeA", "TypeB"]);
        assert_eq!(classified.shape, Shape::Direct);
        assert_eq!(classified.transfer_type, "TypeBDTO");
    }

    #[test]
    fn test_classify_fields_preserves_order() {
        let descriptor = TypeDescriptor::new(
            "Container",
            vec![
                FieldDescriptor::new("items", "[ProductItem]"),
                FieldDescriptor::new("optionalItem", "ProductItem?"),
                FieldDescriptor::new("optionalItems", "[ProductItem]?"),
                FieldDescriptor::new("regularValue", "String"),
            ],
        );
        let classified = classify_fields(&descriptor, &nested(&["ProductItem"]));

        let names: Vec<_> = classified.iter().map(ClassifiedField::name).collect();
        assert_eq!(
            names,
            vec!["items", "optionalItem", "optionalItems", "regularValue"]
        );
        let shapes: Vec<_> = classified.iter().map(|c| c.shape).collect();
        assert_eq!(
            shapes,
            vec![
                Shape::Array,
                Shape::Optional,
                Shape::OptionalArray,
                Shape::Scalar
            ]
        );
    }

    #[test]
    fn test_transfer_rust_type() {
        assert_eq!(
            classify_type("[Order]?", &["Order"]).transfer_rust_type(),
            "Option<Vec<OrderDTO>>"
        );
        assert_eq!(classify_type("[String]", &[]).transfer_rust_type(), "Vec<String>");
        assert_eq!(classify_type("Int", &[]).transfer_rust_type(), "Int");
    }

    #[test]
    fn test_shape_is_convertible() {
        assert!(!Shape::Scalar.is_convertible());
        assert!(Shape::Direct.is_convertible());
        assert!(Shape::OptionalArray.is_convertible());
    }
}

//! Canonical display forms and link targets for type references.

use crate::model::{TypeLink, TypeRef};

/// Returns the canonical display form of a type reference.
///
/// Primitives render as their bare name, references as `<<namespace-name>>`
/// cross-links, and arrays prefix their element's display form with
/// `Array of`. Map key and value types are rendered by two separate calls.
pub fn display_name(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive(primitive) => primitive.as_str().to_string(),
        TypeRef::Array { element } => format!("Array of {}", display_name(element)),
        TypeRef::Reference(link) => link_to(link),
    }
}

/// Returns the cross-link to the section documenting `link`'s target.
///
/// Link targets are `{namespace}-{name}`, unique per pair; equal type names
/// in different namespaces stay distinguishable through the prefix.
pub fn link_to(link: &TypeLink) -> String {
    format!("<<{}-{}>>", link.namespace, link.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Primitive;

    #[test]
    fn primitive_renders_bare_name() {
        assert_eq!(display_name(&TypeRef::Primitive(Primitive::Int32)), "int32");
    }

    #[test]
    fn array_of_primitive() {
        let ty = TypeRef::Array {
            element: Box::new(TypeRef::Primitive(Primitive::String)),
        };
        assert_eq!(display_name(&ty), "Array of string");
    }

    #[test]
    fn array_of_reference_links_to_element() {
        let ty = TypeRef::Array {
            element: Box::new(TypeRef::Reference(TypeLink::new("Vehicle", "Position"))),
        };
        assert_eq!(display_name(&ty), "Array of <<Vehicle-Position>>");
    }

    #[test]
    fn reference_links_to_defining_namespace() {
        let ty = TypeRef::Reference(TypeLink::new("Common", "Position"));
        assert_eq!(display_name(&ty), "<<Common-Position>>");
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in primitive types of the interface definition language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// Boolean value.
    Boolean,
    /// 32-bit floating point number.
    Float,
    /// 64-bit floating point number.
    Double,
    /// UTF-8 string.
    String,
    /// Raw byte buffer.
    ByteBuffer,
}

impl Primitive {
    /// Returns the lowercase name used in rendered documentation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Int8 => "int8",
            Primitive::UInt8 => "uint8",
            Primitive::Int16 => "int16",
            Primitive::UInt16 => "uint16",
            Primitive::Int32 => "int32",
            Primitive::UInt32 => "uint32",
            Primitive::Int64 => "int64",
            Primitive::UInt64 => "uint64",
            Primitive::Boolean => "boolean",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::String => "string",
            Primitive::ByteBuffer => "bytebuffer",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weak, namespace-qualified link to a named type definition.
///
/// A link never owns its referent; it is resolved on demand through the
/// lookup tables in [`crate::model::ModelIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeLink {
    /// Name of the namespace defining the target type.
    pub namespace: String,
    /// Name of the target type within its namespace.
    pub name: String,
}

impl TypeLink {
    /// Creates a link to `name` defined in `namespace`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// A type reference carried by a typed member.
///
/// References to named definitions are kept as [`TypeLink`]s bound by the
/// parsing collaborator; the core never follows more than one level of
/// indirection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    /// A built-in primitive type.
    Primitive(Primitive),
    /// An inline (anonymous) array of some element type.
    Array {
        /// Element type of the array.
        element: Box<TypeRef>,
    },
    /// A reference to a named type definition.
    Reference(TypeLink),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_names_are_lowercase() {
        assert_eq!(Primitive::Int32.as_str(), "int32");
        assert_eq!(Primitive::ByteBuffer.as_str(), "bytebuffer");
        assert_eq!(Primitive::UInt64.to_string(), "uint64");
    }

    #[test]
    fn type_ref_deserializes_all_shapes() {
        let primitive: TypeRef = serde_json::from_str("\"uint16\"").unwrap();
        assert_eq!(primitive, TypeRef::Primitive(Primitive::UInt16));

        let array: TypeRef = serde_json::from_str(r#"{"element": "boolean"}"#).unwrap();
        assert_eq!(
            array,
            TypeRef::Array {
                element: Box::new(TypeRef::Primitive(Primitive::Boolean))
            }
        );

        let reference: TypeRef =
            serde_json::from_str(r#"{"namespace": "Demo", "name": "Position"}"#).unwrap();
        assert_eq!(reference, TypeRef::Reference(TypeLink::new("Demo", "Position")));
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{TypeLink, TypeRef};

/// Annotation comments attached to an entity, keyed by tag.
///
/// The parsing collaborator strips the `@` sigil from source annotations, so
/// the conventional tags are plain `description` and `see`. An entity
/// without annotations carries an empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comments(HashMap<String, String>);

impl Comments {
    /// Creates an empty comments mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw string stored under `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }

    /// Returns the raw `description` annotation, if any.
    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    /// Returns the raw `see` annotation, if any.
    pub fn see(&self) -> Option<&str> {
        self.get("see")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Comments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(tag, text)| (tag.into(), text.into()))
                .collect(),
        )
    }
}

/// An interface attribute with its data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name, unique within the interface.
    pub name: String,
    /// Data type of the attribute.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
}

/// A named, typed argument of a method or broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Argument name.
    pub name: String,
    /// Argument type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
}

/// An interface method with input and output arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Method name, unique within the interface.
    pub name: String,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
    /// Input arguments in declaration order.
    #[serde(default)]
    pub in_args: Vec<Argument>,
    /// Output arguments in declaration order.
    #[serde(default)]
    pub out_args: Vec<Argument>,
    /// Declared error type, if the method can fail.
    #[serde(default)]
    pub error: Option<TypeRef>,
}

/// An interface broadcast with output arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    /// Broadcast name, unique within the interface.
    pub name: String,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
    /// Output arguments in declaration order.
    #[serde(default)]
    pub out_args: Vec<Argument>,
}

/// A named, typed field of a struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
}

/// A named struct definition, optionally extending a base struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    /// Struct name, unique within its namespace.
    pub name: String,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
    /// Weak link to the base struct, if this struct extends one.
    #[serde(default)]
    pub extends: Option<TypeLink>,
    /// Locally declared fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A single enumerator, optionally carrying an explicit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enumerator {
    /// Enumerator name.
    pub name: String,
    /// Explicit literal value; absent enumerators continue the running count.
    #[serde(default)]
    pub value: Option<i64>,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
}

/// A named enumeration definition, optionally extending a base enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enumeration name, unique within its namespace.
    pub name: String,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
    /// Weak link to the base enumeration, if this one extends it.
    #[serde(default)]
    pub extends: Option<TypeLink>,
    /// Locally declared enumerators in declaration order.
    #[serde(default)]
    pub enumerators: Vec<Enumerator>,
}

/// A named array definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayDef {
    /// Array name, unique within its namespace.
    pub name: String,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
    /// Element type of the array.
    pub element: TypeRef,
}

/// A named map definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDef {
    /// Map name, unique within its namespace.
    pub name: String,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
    /// Key type of the map.
    pub key: TypeRef,
    /// Value type of the map.
    pub value: TypeRef,
}

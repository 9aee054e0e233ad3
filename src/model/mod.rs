//! Read-only interface-description model consumed by the documentation
//! pipeline.
//!
//! The model is produced by an external parsing collaborator, either
//! constructed in-process against these types or deserialized from the JSON
//! interchange (see [`Model::load`]). All `extends` and type references are
//! already bound as namespace-qualified [`TypeLink`]s; the core performs no
//! name resolution beyond lookups through [`ModelIndex`].

mod loading;
mod lookup;
mod members;
mod types;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use lookup::{ModelIndex, NamespaceIndex, TypeDef};
pub use members::{
    Argument, ArrayDef, Attribute, Broadcast, Comments, EnumDef, Enumerator, Field, MapDef,
    Method, StructDef,
};
pub use types::{Primitive, TypeLink, TypeRef};

/// A fully resolved interface-description model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Packages in documentation order.
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A package grouping one or more namespaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Package name.
    pub name: String,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
    /// Namespaces in declaration order.
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
}

impl Package {
    /// Creates an empty package called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Comments::new(),
            namespaces: Vec::new(),
        }
    }
}

/// Whether a namespace is an interface or a plain type collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    /// An interface with attributes, methods and broadcasts.
    Interface,
    /// A collection of type definitions without behavior.
    TypeCollection,
}

impl NamespaceKind {
    /// Capitalized name used in section titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            NamespaceKind::Interface => "Interface",
            NamespaceKind::TypeCollection => "Type Collection",
        }
    }

    /// Lowercase name used in running text.
    pub fn lower_name(&self) -> &'static str {
        match self {
            NamespaceKind::Interface => "interface",
            NamespaceKind::TypeCollection => "type collection",
        }
    }
}

/// Declared version of a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A named container of member and type definitions.
///
/// Member collections preserve declaration order; names are unique within
/// each collection. Collections that do not apply to the namespace kind
/// (attributes on a type collection, for example) stay empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    /// Interface or type collection.
    pub kind: NamespaceKind,
    /// Namespace name, unique within the model.
    pub name: String,
    /// Declared version, if any.
    #[serde(default)]
    pub version: Option<Version>,
    /// Attached annotations.
    #[serde(default)]
    pub comments: Comments,
    /// Attributes in declaration order.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Broadcasts in declaration order.
    #[serde(default)]
    pub broadcasts: Vec<Broadcast>,
    /// Struct definitions in declaration order.
    #[serde(default)]
    pub structs: Vec<StructDef>,
    /// Enumeration definitions in declaration order.
    #[serde(default)]
    pub enumerations: Vec<EnumDef>,
    /// Array definitions in declaration order.
    #[serde(default)]
    pub arrays: Vec<ArrayDef>,
    /// Map definitions in declaration order.
    #[serde(default)]
    pub maps: Vec<MapDef>,
}

impl Namespace {
    /// Creates an empty namespace of the given kind.
    pub fn new(kind: NamespaceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            version: None,
            comments: Comments::new(),
            attributes: Vec::new(),
            methods: Vec::new(),
            broadcasts: Vec::new(),
            structs: Vec::new(),
            enumerations: Vec::new(),
            arrays: Vec::new(),
            maps: Vec::new(),
        }
    }
}

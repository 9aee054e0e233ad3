use std::collections::{HashMap, HashSet};

use super::{ArrayDef, EnumDef, MapDef, Model, Namespace, StructDef, TypeLink};

/// Borrowed view of a named type definition.
#[derive(Debug, Clone, Copy)]
pub enum TypeDef<'a> {
    /// A struct definition.
    Struct(&'a StructDef),
    /// An enumeration definition.
    Enumeration(&'a EnumDef),
    /// An array definition.
    Array(&'a ArrayDef),
    /// A map definition.
    Map(&'a MapDef),
}

impl TypeDef<'_> {
    /// Name of the definition.
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Struct(def) => &def.name,
            TypeDef::Enumeration(def) => &def.name,
            TypeDef::Array(def) => &def.name,
            TypeDef::Map(def) => &def.name,
        }
    }
}

/// Name lookup table for a single namespace, built once per run.
///
/// Weak links and "see also" tokens resolve through this table instead of
/// owning pointers into the model.
#[derive(Debug)]
pub struct NamespaceIndex<'a> {
    name: &'a str,
    types: HashMap<&'a str, TypeDef<'a>>,
    members: HashSet<&'a str>,
}

impl<'a> NamespaceIndex<'a> {
    fn new(namespace: &'a Namespace) -> Self {
        let mut types = HashMap::new();
        for def in &namespace.structs {
            types.insert(def.name.as_str(), TypeDef::Struct(def));
        }
        for def in &namespace.enumerations {
            types.insert(def.name.as_str(), TypeDef::Enumeration(def));
        }
        for def in &namespace.arrays {
            types.insert(def.name.as_str(), TypeDef::Array(def));
        }
        for def in &namespace.maps {
            types.insert(def.name.as_str(), TypeDef::Map(def));
        }

        let mut members: HashSet<&str> = types.keys().copied().collect();
        members.extend(namespace.attributes.iter().map(|a| a.name.as_str()));
        members.extend(namespace.methods.iter().map(|m| m.name.as_str()));
        members.extend(namespace.broadcasts.iter().map(|b| b.name.as_str()));

        Self {
            name: &namespace.name,
            types,
            members,
        }
    }

    /// Name of the indexed namespace.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Looks up a named type definition.
    pub fn type_def(&self, name: &str) -> Option<TypeDef<'a>> {
        self.types.get(name).copied()
    }

    /// Whether `name` is any documentable member of this namespace.
    ///
    /// Covers attributes, methods, broadcasts and type definitions; these
    /// are the valid targets of a "see also" cross-link.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }
}

/// Per-namespace lookup tables for a whole model.
#[derive(Debug)]
pub struct ModelIndex<'a> {
    namespaces: HashMap<&'a str, NamespaceIndex<'a>>,
}

impl<'a> ModelIndex<'a> {
    /// Builds lookup tables for every namespace in `model`.
    pub fn new(model: &'a Model) -> Self {
        let mut namespaces = HashMap::new();
        for package in &model.packages {
            for namespace in &package.namespaces {
                namespaces.insert(namespace.name.as_str(), NamespaceIndex::new(namespace));
            }
        }
        Self { namespaces }
    }

    /// Returns the lookup table for `name`, if the namespace exists.
    pub fn namespace(&self, name: &str) -> Option<&NamespaceIndex<'a>> {
        self.namespaces.get(name)
    }

    /// Resolves a weak link to the definition it points at.
    pub fn resolve(&self, link: &TypeLink) -> Option<TypeDef<'a>> {
        self.namespace(&link.namespace)?.type_def(&link.name)
    }
}

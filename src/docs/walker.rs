//! Shared model traversal driving both documentation passes.

use crate::docs::DocsError;
use crate::model::{
    ArrayDef, Attribute, Broadcast, EnumDef, MapDef, Method, Model, Namespace, NamespaceKind,
    Package, StructDef,
};

/// Member kinds a namespace can hold, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Interface attribute.
    Attribute,
    /// Interface method.
    Method,
    /// Interface broadcast.
    Broadcast,
    /// Struct definition.
    Struct,
    /// Enumeration definition.
    Enumeration,
    /// Array definition.
    Array,
    /// Map definition.
    Map,
}

impl MemberKind {
    /// Singular name used in section titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            MemberKind::Attribute => "Attribute",
            MemberKind::Method => "Method",
            MemberKind::Broadcast => "Broadcast",
            MemberKind::Struct => "Struct",
            MemberKind::Enumeration => "Enumeration",
            MemberKind::Array => "Array",
            MemberKind::Map => "Map",
        }
    }

    /// Pluralized name used in major-section banners.
    pub fn plural(&self) -> &'static str {
        match self {
            MemberKind::Attribute => "Attributes",
            MemberKind::Method => "Methods",
            MemberKind::Broadcast => "Broadcasts",
            MemberKind::Struct => "Structs",
            MemberKind::Enumeration => "Enumerations",
            MemberKind::Array => "Arrays",
            MemberKind::Map => "Maps",
        }
    }
}

/// Per-entity-kind handlers for one traversal of the model.
///
/// Every kind is a required method, so adding a kind to the model is a
/// compile-time exhaustiveness check for each visitor rather than a runtime
/// dispatch-table gap.
pub trait ModelVisitor {
    /// Called when an interface namespace opens.
    fn interface(&mut self, package: &Package, namespace: &Namespace) -> Result<(), DocsError>;

    /// Called when a type-collection namespace opens.
    fn type_collection(
        &mut self,
        package: &Package,
        namespace: &Namespace,
    ) -> Result<(), DocsError>;

    /// Called before the first member of a kind; never called for an empty
    /// collection.
    fn major_section(
        &mut self,
        namespace: &Namespace,
        kind: MemberKind,
    ) -> Result<(), DocsError>;

    /// Handles one attribute.
    fn attribute(
        &mut self,
        namespace: &Namespace,
        attribute: &Attribute,
    ) -> Result<(), DocsError>;

    /// Handles one method.
    fn method(&mut self, namespace: &Namespace, method: &Method) -> Result<(), DocsError>;

    /// Handles one broadcast.
    fn broadcast(
        &mut self,
        namespace: &Namespace,
        broadcast: &Broadcast,
    ) -> Result<(), DocsError>;

    /// Handles one struct definition.
    fn struct_def(&mut self, namespace: &Namespace, def: &StructDef) -> Result<(), DocsError>;

    /// Handles one enumeration definition.
    fn enumeration(&mut self, namespace: &Namespace, def: &EnumDef) -> Result<(), DocsError>;

    /// Handles one array definition.
    fn array(&mut self, namespace: &Namespace, def: &ArrayDef) -> Result<(), DocsError>;

    /// Handles one map definition.
    fn map(&mut self, namespace: &Namespace, def: &MapDef) -> Result<(), DocsError>;
}

/// Walks the whole model in documentation order.
///
/// Packages are visited in model order; within a package, type collections
/// come before interfaces, and members follow declaration order per kind.
/// Both passes run through this single traversal, so index order equals
/// render order.
pub fn walk<V: ModelVisitor>(model: &Model, visitor: &mut V) -> Result<(), DocsError> {
    for package in &model.packages {
        for namespace in &package.namespaces {
            if namespace.kind == NamespaceKind::TypeCollection {
                visitor.type_collection(package, namespace)?;
                walk_types(namespace, visitor)?;
            }
        }
        for namespace in &package.namespaces {
            if namespace.kind == NamespaceKind::Interface {
                visitor.interface(package, namespace)?;
                if !namespace.attributes.is_empty() {
                    visitor.major_section(namespace, MemberKind::Attribute)?;
                    for attribute in &namespace.attributes {
                        visitor.attribute(namespace, attribute)?;
                    }
                }
                if !namespace.methods.is_empty() {
                    visitor.major_section(namespace, MemberKind::Method)?;
                    for method in &namespace.methods {
                        visitor.method(namespace, method)?;
                    }
                }
                if !namespace.broadcasts.is_empty() {
                    visitor.major_section(namespace, MemberKind::Broadcast)?;
                    for broadcast in &namespace.broadcasts {
                        visitor.broadcast(namespace, broadcast)?;
                    }
                }
                walk_types(namespace, visitor)?;
            }
        }
    }
    Ok(())
}

fn walk_types<V: ModelVisitor>(namespace: &Namespace, visitor: &mut V) -> Result<(), DocsError> {
    if !namespace.structs.is_empty() {
        visitor.major_section(namespace, MemberKind::Struct)?;
        for def in &namespace.structs {
            visitor.struct_def(namespace, def)?;
        }
    }
    if !namespace.enumerations.is_empty() {
        visitor.major_section(namespace, MemberKind::Enumeration)?;
        for def in &namespace.enumerations {
            visitor.enumeration(namespace, def)?;
        }
    }
    if !namespace.arrays.is_empty() {
        visitor.major_section(namespace, MemberKind::Array)?;
        for def in &namespace.arrays {
            visitor.array(namespace, def)?;
        }
    }
    if !namespace.maps.is_empty() {
        visitor.major_section(namespace, MemberKind::Map)?;
        for def in &namespace.maps {
            visitor.map(namespace, def)?;
        }
    }
    Ok(())
}

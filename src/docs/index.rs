//! Pass 1: the reverse type-usage index.

use std::collections::HashMap;

use crate::docs::DocsError;
use crate::docs::walker::{MemberKind, ModelVisitor};
use crate::model::{
    ArrayDef, Attribute, Broadcast, EnumDef, MapDef, Method, Namespace, Package, StructDef,
    TypeRef,
};

/// Canonical identity of a named type: defining namespace plus name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeId {
    /// Name of the defining namespace.
    pub namespace: String,
    /// Type name within the namespace.
    pub name: String,
}

/// A documentable entity that references a type.
#[derive(Debug, Clone, PartialEq)]
pub struct Referrer {
    /// Owning namespace of the referencing entity.
    pub namespace: String,
    /// Name of the referencing entity.
    pub name: String,
}

impl Referrer {
    fn new(namespace: &Namespace, name: &str) -> Self {
        Self {
            namespace: namespace.name.clone(),
            name: name.to_string(),
        }
    }
}

/// Reverse mapping from a named type to the entities referencing it.
///
/// Registration order is traversal order and duplicates are preserved, so
/// "used in" lists mirror the document itself. Owned by a generator run and
/// rebuilt from scratch on every run.
#[derive(Debug, Default)]
pub struct RefIndex {
    entries: HashMap<TypeId, Vec<Referrer>>,
}

impl RefIndex {
    /// Records that `referrer` uses the type behind `ty`.
    ///
    /// Arrays collapse to their element type and references to their
    /// resolved target, so reporting always points at the concrete defined
    /// type. Primitives are never indexed.
    pub fn record(&mut self, ty: &TypeRef, referrer: Referrer) {
        if let Some(id) = collapse(ty) {
            self.entries.entry(id).or_default().push(referrer);
        }
    }

    /// Entities referencing the type `name` defined in `namespace`.
    pub fn referrers(&self, namespace: &str, name: &str) -> Option<&[Referrer]> {
        let id = TypeId {
            namespace: namespace.to_string(),
            name: name.to_string(),
        };
        self.entries.get(&id).map(Vec::as_slice)
    }
}

fn collapse(ty: &TypeRef) -> Option<TypeId> {
    match ty {
        TypeRef::Primitive(_) => None,
        TypeRef::Array { element } => collapse(element),
        TypeRef::Reference(link) => Some(TypeId {
            namespace: link.namespace.clone(),
            name: link.name.clone(),
        }),
    }
}

/// Pass-1 visitor populating a [`RefIndex`].
///
/// Produces no document output; interfaces, type collections and
/// enumerations contribute no outgoing references.
pub struct ReferenceIndexer<'a> {
    index: &'a mut RefIndex,
}

impl<'a> ReferenceIndexer<'a> {
    /// Creates an indexer writing into `index`.
    pub fn new(index: &'a mut RefIndex) -> Self {
        Self { index }
    }
}

impl ModelVisitor for ReferenceIndexer<'_> {
    fn interface(&mut self, _package: &Package, _namespace: &Namespace) -> Result<(), DocsError> {
        Ok(())
    }

    fn type_collection(
        &mut self,
        _package: &Package,
        _namespace: &Namespace,
    ) -> Result<(), DocsError> {
        Ok(())
    }

    fn major_section(
        &mut self,
        _namespace: &Namespace,
        _kind: MemberKind,
    ) -> Result<(), DocsError> {
        Ok(())
    }

    fn attribute(
        &mut self,
        namespace: &Namespace,
        attribute: &Attribute,
    ) -> Result<(), DocsError> {
        self.index
            .record(&attribute.ty, Referrer::new(namespace, &attribute.name));
        Ok(())
    }

    fn method(&mut self, namespace: &Namespace, method: &Method) -> Result<(), DocsError> {
        for argument in method.in_args.iter().chain(&method.out_args) {
            self.index
                .record(&argument.ty, Referrer::new(namespace, &method.name));
        }
        if let Some(error) = &method.error {
            self.index
                .record(error, Referrer::new(namespace, &method.name));
        }
        Ok(())
    }

    fn broadcast(
        &mut self,
        namespace: &Namespace,
        broadcast: &Broadcast,
    ) -> Result<(), DocsError> {
        for argument in &broadcast.out_args {
            self.index
                .record(&argument.ty, Referrer::new(namespace, &broadcast.name));
        }
        Ok(())
    }

    fn struct_def(&mut self, namespace: &Namespace, def: &StructDef) -> Result<(), DocsError> {
        for field in &def.fields {
            self.index
                .record(&field.ty, Referrer::new(namespace, &def.name));
        }
        Ok(())
    }

    fn enumeration(&mut self, _namespace: &Namespace, _def: &EnumDef) -> Result<(), DocsError> {
        Ok(())
    }

    fn array(&mut self, namespace: &Namespace, def: &ArrayDef) -> Result<(), DocsError> {
        self.index
            .record(&def.element, Referrer::new(namespace, &def.name));
        Ok(())
    }

    fn map(&mut self, namespace: &Namespace, def: &MapDef) -> Result<(), DocsError> {
        self.index.record(&def.key, Referrer::new(namespace, &def.name));
        self.index
            .record(&def.value, Referrer::new(namespace, &def.name));
        Ok(())
    }
}

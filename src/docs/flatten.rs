//! Flattening of `extends` chains into ordered member lists.

use std::collections::HashSet;

use crate::config::InheritedMembers;
use crate::docs::DocsError;
use crate::model::{EnumDef, Enumerator, Field, ModelIndex, StructDef, TypeDef, TypeLink};

/// Returns the full field list of `def`, inherited fields first.
///
/// Walks the `extends` chain up to the ultimate base and concatenates each
/// level's own fields base-first. A visited set guards against cyclic
/// chains.
///
/// # Errors
///
/// Returns [`DocsError::CyclicExtends`] when the chain revisits a type and
/// [`DocsError::UnresolvedBase`] when an `extends` link does not resolve to
/// a struct in the model.
pub fn flatten_struct<'a>(
    model: &ModelIndex<'a>,
    namespace: &str,
    def: &'a StructDef,
    policy: InheritedMembers,
) -> Result<Vec<&'a Field>, DocsError> {
    let mut chain = vec![def];
    let mut visited = visited_from(namespace, &def.name);
    let mut extends = def.extends.as_ref();

    while let Some(link) = extends {
        check_cycle(&mut visited, link)?;
        let base = match model.resolve(link) {
            Some(TypeDef::Struct(base)) => base,
            _ => return Err(unresolved(link)),
        };
        chain.push(base);
        extends = base.extends.as_ref();
    }

    let fields: Vec<&Field> = chain
        .iter()
        .rev()
        .flat_map(|level| level.fields.iter())
        .collect();
    Ok(apply_policy(fields, |field| field.name.as_str(), policy))
}

/// Returns the full enumerator list of `def`, inherited enumerators first.
///
/// Same chain walk and error behavior as [`flatten_struct`].
///
/// # Errors
///
/// Returns [`DocsError::CyclicExtends`] on a cyclic chain and
/// [`DocsError::UnresolvedBase`] when a base link does not resolve to an
/// enumeration.
pub fn flatten_enum<'a>(
    model: &ModelIndex<'a>,
    namespace: &str,
    def: &'a EnumDef,
    policy: InheritedMembers,
) -> Result<Vec<&'a Enumerator>, DocsError> {
    let mut chain = vec![def];
    let mut visited = visited_from(namespace, &def.name);
    let mut extends = def.extends.as_ref();

    while let Some(link) = extends {
        check_cycle(&mut visited, link)?;
        let base = match model.resolve(link) {
            Some(TypeDef::Enumeration(base)) => base,
            _ => return Err(unresolved(link)),
        };
        chain.push(base);
        extends = base.extends.as_ref();
    }

    let enumerators: Vec<&Enumerator> = chain
        .iter()
        .rev()
        .flat_map(|level| level.enumerators.iter())
        .collect();
    Ok(apply_policy(
        enumerators,
        |enumerator| enumerator.name.as_str(),
        policy,
    ))
}

fn visited_from(namespace: &str, name: &str) -> HashSet<(String, String)> {
    HashSet::from([(namespace.to_string(), name.to_string())])
}

fn check_cycle(
    visited: &mut HashSet<(String, String)>,
    link: &TypeLink,
) -> Result<(), DocsError> {
    if visited.insert((link.namespace.clone(), link.name.clone())) {
        Ok(())
    } else {
        Err(DocsError::CyclicExtends {
            namespace: link.namespace.clone(),
            name: link.name.clone(),
        })
    }
}

fn unresolved(link: &TypeLink) -> DocsError {
    DocsError::UnresolvedBase {
        namespace: link.namespace.clone(),
        name: link.name.clone(),
    }
}

/// With the `override` policy, a name declared at several levels keeps only
/// its most derived occurrence; `list-all` is pass-through.
fn apply_policy<'a, T>(
    members: Vec<&'a T>,
    name_of: impl Fn(&T) -> &str,
    policy: InheritedMembers,
) -> Vec<&'a T> {
    match policy {
        InheritedMembers::ListAll => members,
        InheritedMembers::Override => {
            let mut seen: HashSet<&str> = HashSet::new();
            let mut kept: Vec<bool> = vec![false; members.len()];
            for (position, member) in members.iter().enumerate().rev() {
                kept[position] = seen.insert(name_of(member));
            }
            members
                .into_iter()
                .zip(kept)
                .filter_map(|(member, keep)| keep.then_some(member))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Comments, Model, Namespace, NamespaceKind, Package, Primitive, TypeRef,
    };

    fn field(name: &str) -> Field {
        Field {
            name: name.into(),
            ty: TypeRef::Primitive(Primitive::Int32),
            comments: Comments::new(),
        }
    }

    fn struct_def(name: &str, extends: Option<&str>, fields: Vec<Field>) -> StructDef {
        StructDef {
            name: name.into(),
            comments: Comments::new(),
            extends: extends.map(|base| TypeLink::new("NS", base)),
            fields,
        }
    }

    fn model_of(structs: Vec<StructDef>) -> Model {
        let mut namespace = Namespace::new(NamespaceKind::TypeCollection, "NS");
        namespace.structs = structs;
        let mut package = Package::new("org.example");
        package.namespaces.push(namespace);
        let mut model = Model::new();
        model.packages.push(package);
        model
    }

    #[test]
    fn inherited_fields_come_first() {
        let model = model_of(vec![
            struct_def("Base", None, vec![field("x"), field("y")]),
            struct_def("Derived", Some("Base"), vec![field("z")]),
        ]);
        let index = ModelIndex::new(&model);
        let derived = &model.packages[0].namespaces[0].structs[1];

        let fields =
            flatten_struct(&index, "NS", derived, InheritedMembers::ListAll).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[test]
    fn list_all_keeps_duplicates() {
        let model = model_of(vec![
            struct_def("Base", None, vec![field("x")]),
            struct_def("Derived", Some("Base"), vec![field("x")]),
        ]);
        let index = ModelIndex::new(&model);
        let derived = &model.packages[0].namespaces[0].structs[1];

        let fields =
            flatten_struct(&index, "NS", derived, InheritedMembers::ListAll).unwrap();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn override_drops_base_duplicate() {
        let model = model_of(vec![
            struct_def("Base", None, vec![field("x"), field("y")]),
            struct_def("Derived", Some("Base"), vec![field("x")]),
        ]);
        let index = ModelIndex::new(&model);
        let derived = &model.packages[0].namespaces[0].structs[1];

        let fields =
            flatten_struct(&index, "NS", derived, InheritedMembers::Override).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["y", "x"]);
    }

    #[test]
    fn cycle_is_an_error() {
        let model = model_of(vec![
            struct_def("A", Some("B"), vec![field("a")]),
            struct_def("B", Some("A"), vec![field("b")]),
        ]);
        let index = ModelIndex::new(&model);
        let a = &model.packages[0].namespaces[0].structs[0];

        let result = flatten_struct(&index, "NS", a, InheritedMembers::ListAll);
        assert!(matches!(result, Err(DocsError::CyclicExtends { .. })));
    }

    #[test]
    fn missing_base_is_an_error() {
        let model = model_of(vec![struct_def("Orphan", Some("Gone"), vec![field("a")])]);
        let index = ModelIndex::new(&model);
        let orphan = &model.packages[0].namespaces[0].structs[0];

        let result = flatten_struct(&index, "NS", orphan, InheritedMembers::ListAll);
        assert!(matches!(result, Err(DocsError::UnresolvedBase { .. })));
    }

    #[test]
    fn enum_chain_flattens_base_first() {
        let base = EnumDef {
            name: "Base".into(),
            comments: Comments::new(),
            extends: None,
            enumerators: vec![Enumerator {
                name: "OK".into(),
                value: None,
                comments: Comments::new(),
            }],
        };
        let derived = EnumDef {
            name: "Derived".into(),
            comments: Comments::new(),
            extends: Some(TypeLink::new("NS", "Base")),
            enumerators: vec![Enumerator {
                name: "FAILED".into(),
                value: None,
                comments: Comments::new(),
            }],
        };
        let mut namespace = Namespace::new(NamespaceKind::TypeCollection, "NS");
        namespace.enumerations = vec![base, derived];
        let mut package = Package::new("org.example");
        package.namespaces.push(namespace);
        let mut model = Model::new();
        model.packages.push(package);

        let index = ModelIndex::new(&model);
        let derived = &model.packages[0].namespaces[0].enumerations[1];
        let enumerators =
            flatten_enum(&index, "NS", derived, InheritedMembers::ListAll).unwrap();
        let names: Vec<&str> = enumerators.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["OK", "FAILED"]);
    }
}

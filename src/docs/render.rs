//! Pass 2: rendering entities into document sections.

use crate::config::RenderConfig;
use crate::docs::DocsError;
use crate::docs::comment::{normalize_indent, resolve_see};
use crate::docs::flatten::{flatten_enum, flatten_struct};
use crate::docs::index::RefIndex;
use crate::docs::typename::{display_name, link_to};
use crate::docs::walker::{MemberKind, ModelVisitor};
use crate::model::{
    Argument, ArrayDef, Attribute, Broadcast, Comments, EnumDef, Enumerator, MapDef, Method,
    ModelIndex, Namespace, Package, StructDef, TypeLink,
};

const TABLE_ATTRS: &str = "[options=\"header\",cols=\"20%,20%,60%\"]";
const TABLE_FENCE: &str = "|===";
const PARAM_HEADER: &str = "|Type |Name |Description";
const ENUM_HEADER: &str = "|Enumerator |Value |Description";

/// Pass-2 visitor emitting document sections into a line buffer.
///
/// Consults the completed pass-1 index for "used in" lines; must only run
/// after pass 1 has finished.
pub struct SectionRenderer<'a, 'm> {
    model: &'a ModelIndex<'m>,
    refs: &'a RefIndex,
    options: &'a RenderConfig,
    lines: &'a mut Vec<String>,
}

impl<'a, 'm> SectionRenderer<'a, 'm> {
    /// Creates a renderer appending to `lines`.
    pub fn new(
        model: &'a ModelIndex<'m>,
        refs: &'a RefIndex,
        options: &'a RenderConfig,
        lines: &'a mut Vec<String>,
    ) -> Self {
        Self {
            model,
            refs,
            options,
            lines,
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn section_start(&mut self, namespace: &Namespace, name: &str) {
        self.push("");
        self.push(format!("[[{}-{}]]", namespace.name, name));
    }

    fn title(&mut self, kind: MemberKind, name: &str, extends: Option<&TypeLink>) {
        match extends {
            Some(base) => self.push(format!(
                "=== {} {} extends {}",
                kind.display_name(),
                name,
                link_to(base)
            )),
            None => self.push(format!("=== {} {}", kind.display_name(), name)),
        }
    }

    fn description(&mut self, comments: &Comments) {
        if let Some(raw) = comments.description() {
            self.push("");
            for line in normalize_indent(raw).split('\n') {
                self.push(line);
            }
        }
    }

    fn see_also(&mut self, namespace: &Namespace, comments: &Comments) {
        if let Some(raw) = comments.see() {
            let resolved = match self.model.namespace(&namespace.name) {
                Some(index) => resolve_see(index, raw),
                None => raw.trim().to_string(),
            };
            self.push("");
            self.push(format!("See also: {resolved}"));
        }
    }

    /// Emits one 3-column table; empty row sets emit nothing at all.
    fn table(&mut self, caption: &str, header: &str, rows: Vec<String>) {
        if rows.is_empty() {
            return;
        }
        self.push("");
        if !caption.is_empty() {
            self.push(caption);
        }
        self.push(TABLE_ATTRS);
        self.push(TABLE_FENCE);
        self.push(header);
        for row in rows {
            self.push(row);
        }
        self.push(TABLE_FENCE);
    }

    fn row(first: &str, second: &str, comments: &Comments) -> String {
        let description = comments
            .description()
            .map(normalize_indent)
            .unwrap_or_default();
        format!("|{first} |{second} |{description}")
    }

    fn argument_rows(arguments: &[Argument]) -> Vec<String> {
        arguments
            .iter()
            .map(|argument| Self::row(&display_name(&argument.ty), &argument.name, &argument.comments))
            .collect()
    }

    /// Enumerator values continue a running count from 0; an explicit value
    /// resets the count before the next increment.
    fn enumerator_rows(enumerators: &[&Enumerator]) -> Vec<String> {
        let mut value: i64 = 0;
        let mut rows = Vec::with_capacity(enumerators.len());
        for enumerator in enumerators {
            if let Some(explicit) = enumerator.value {
                value = explicit;
            }
            rows.push(Self::row(
                &enumerator.name,
                &value.to_string(),
                &enumerator.comments,
            ));
            value += 1;
        }
        rows
    }

    fn used_in(&mut self, namespace: &Namespace, name: &str) {
        if let Some(referrers) = self.refs.referrers(&namespace.name, name) {
            let links: Vec<String> = referrers
                .iter()
                .map(|referrer| format!("<<{}-{}>>", referrer.namespace, referrer.name))
                .collect();
            self.push("");
            self.push(format!("Used in: {}", links.join(", ")));
        }
    }

    fn namespace_section(&mut self, package: &Package, namespace: &Namespace) {
        self.push("");
        self.push(format!("[[{}]]", namespace.name));
        self.push(format!(
            "= {} {}.{}",
            namespace.kind.display_name(),
            package.name,
            namespace.name
        ));
        if let Some(version) = &namespace.version {
            self.push("");
            self.push(format!("Version: {version}"));
        }
        if self.options.generated_note {
            self.push("");
            self.push(format!(
                "This section is generated from the Franca IDL file for {} {} in package {}",
                namespace.kind.lower_name(),
                namespace.name,
                package.name
            ));
        }
        if let Some(description) = package.comments.description() {
            self.push("");
            self.push(format!("Package description: {description}"));
        }
        if let Some(description) = namespace.comments.description() {
            self.push("");
            self.push(format!(
                "{} description: {}",
                namespace.kind.display_name(),
                description
            ));
        }
    }
}

impl ModelVisitor for SectionRenderer<'_, '_> {
    fn interface(&mut self, package: &Package, namespace: &Namespace) -> Result<(), DocsError> {
        self.namespace_section(package, namespace);
        Ok(())
    }

    fn type_collection(
        &mut self,
        package: &Package,
        namespace: &Namespace,
    ) -> Result<(), DocsError> {
        self.namespace_section(package, namespace);
        Ok(())
    }

    fn major_section(
        &mut self,
        _namespace: &Namespace,
        kind: MemberKind,
    ) -> Result<(), DocsError> {
        self.push("");
        self.push(format!("== {}", kind.plural()));
        Ok(())
    }

    fn attribute(
        &mut self,
        namespace: &Namespace,
        attribute: &Attribute,
    ) -> Result<(), DocsError> {
        self.section_start(namespace, &attribute.name);
        self.title(MemberKind::Attribute, &attribute.name, None);
        self.description(&attribute.comments);
        self.see_also(namespace, &attribute.comments);
        self.push("");
        self.push(format!(
            "Attribute data type: {}",
            display_name(&attribute.ty)
        ));
        Ok(())
    }

    fn method(&mut self, namespace: &Namespace, method: &Method) -> Result<(), DocsError> {
        self.section_start(namespace, &method.name);
        self.title(MemberKind::Method, &method.name, None);
        self.description(&method.comments);
        self.see_also(namespace, &method.comments);
        self.table(
            "Input Parameters:",
            PARAM_HEADER,
            Self::argument_rows(&method.in_args),
        );
        self.table(
            "Output Parameters:",
            PARAM_HEADER,
            Self::argument_rows(&method.out_args),
        );
        if let Some(error) = &method.error {
            self.push("");
            self.push(format!("Errors: {}", display_name(error)));
        }
        Ok(())
    }

    fn broadcast(
        &mut self,
        namespace: &Namespace,
        broadcast: &Broadcast,
    ) -> Result<(), DocsError> {
        self.section_start(namespace, &broadcast.name);
        self.title(MemberKind::Broadcast, &broadcast.name, None);
        self.description(&broadcast.comments);
        self.see_also(namespace, &broadcast.comments);
        self.table(
            "Output Parameters:",
            PARAM_HEADER,
            Self::argument_rows(&broadcast.out_args),
        );
        Ok(())
    }

    fn struct_def(&mut self, namespace: &Namespace, def: &StructDef) -> Result<(), DocsError> {
        self.section_start(namespace, &def.name);
        self.title(MemberKind::Struct, &def.name, def.extends.as_ref());
        self.description(&def.comments);
        self.see_also(namespace, &def.comments);

        let fields = flatten_struct(
            self.model,
            &namespace.name,
            def,
            self.options.inherited_members,
        )?;
        let rows = fields
            .iter()
            .map(|field| Self::row(&display_name(&field.ty), &field.name, &field.comments))
            .collect();
        self.table("Struct fields:", PARAM_HEADER, rows);
        self.used_in(namespace, &def.name);
        Ok(())
    }

    fn enumeration(&mut self, namespace: &Namespace, def: &EnumDef) -> Result<(), DocsError> {
        self.section_start(namespace, &def.name);
        self.title(MemberKind::Enumeration, &def.name, def.extends.as_ref());
        self.description(&def.comments);
        self.see_also(namespace, &def.comments);

        let enumerators = flatten_enum(
            self.model,
            &namespace.name,
            def,
            self.options.inherited_members,
        )?;
        self.table("", ENUM_HEADER, Self::enumerator_rows(&enumerators));
        self.used_in(namespace, &def.name);
        Ok(())
    }

    fn array(&mut self, namespace: &Namespace, def: &ArrayDef) -> Result<(), DocsError> {
        self.section_start(namespace, &def.name);
        self.title(MemberKind::Array, &def.name, None);
        self.description(&def.comments);
        self.see_also(namespace, &def.comments);
        self.push("");
        self.push(format!(
            "Array element data type: {}",
            display_name(&def.element)
        ));
        self.used_in(namespace, &def.name);
        Ok(())
    }

    fn map(&mut self, namespace: &Namespace, def: &MapDef) -> Result<(), DocsError> {
        self.section_start(namespace, &def.name);
        self.title(MemberKind::Map, &def.name, None);
        self.description(&def.comments);
        self.see_also(namespace, &def.comments);
        self.push("");
        self.push(format!("Key type: {}", display_name(&def.key)));
        self.push(format!("Value type: {}", display_name(&def.value)));
        self.used_in(namespace, &def.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::index::{RefIndex, ReferenceIndexer};
    use crate::docs::walker::walk;
    use crate::model::{Comments, Model, NamespaceKind, Package, Primitive, TypeRef};

    fn render(model: &Model) -> Vec<String> {
        let index = ModelIndex::new(model);
        let mut refs = RefIndex::default();
        walk(model, &mut ReferenceIndexer::new(&mut refs)).unwrap();

        let options = RenderConfig::default();
        let mut lines = Vec::new();
        walk(
            model,
            &mut SectionRenderer::new(&index, &refs, &options, &mut lines),
        )
        .unwrap();
        lines
    }

    fn enumerator(name: &str, value: Option<i64>) -> Enumerator {
        Enumerator {
            name: name.into(),
            value,
            comments: Comments::new(),
        }
    }

    fn model_with_enum(enumerators: Vec<Enumerator>) -> Model {
        let mut namespace = Namespace::new(NamespaceKind::TypeCollection, "Types");
        namespace.enumerations.push(EnumDef {
            name: "State".into(),
            comments: Comments::new(),
            extends: None,
            enumerators,
        });
        let mut package = Package::new("org.example");
        package.namespaces.push(namespace);
        let mut model = Model::new();
        model.packages.push(package);
        model
    }

    #[test]
    fn enumerators_auto_number_from_zero() {
        let lines = render(&model_with_enum(vec![
            enumerator("A", None),
            enumerator("B", None),
            enumerator("C", None),
        ]));
        assert!(lines.contains(&"|A |0 |".to_string()));
        assert!(lines.contains(&"|B |1 |".to_string()));
        assert!(lines.contains(&"|C |2 |".to_string()));
    }

    #[test]
    fn explicit_value_resets_the_running_count() {
        let lines = render(&model_with_enum(vec![
            enumerator("A", None),
            enumerator("B", Some(5)),
            enumerator("C", None),
        ]));
        assert!(lines.contains(&"|A |0 |".to_string()));
        assert!(lines.contains(&"|B |5 |".to_string()));
        assert!(lines.contains(&"|C |6 |".to_string()));
    }

    #[test]
    fn unreferenced_type_has_no_used_in_line() {
        let lines = render(&model_with_enum(vec![enumerator("A", None)]));
        assert!(!lines.iter().any(|line| line.starts_with("Used in:")));
    }

    #[test]
    fn empty_collections_have_no_banner() {
        let mut namespace = Namespace::new(NamespaceKind::Interface, "Empty");
        namespace.attributes.push(Attribute {
            name: "only".into(),
            ty: TypeRef::Primitive(Primitive::Boolean),
            comments: Comments::new(),
        });
        let mut package = Package::new("org.example");
        package.namespaces.push(namespace);
        let mut model = Model::new();
        model.packages.push(package);

        let lines = render(&model);
        assert!(lines.contains(&"== Attributes".to_string()));
        assert!(!lines.contains(&"== Methods".to_string()));
        assert!(!lines.contains(&"== Structs".to_string()));
    }

    #[test]
    fn attribute_section_layout() {
        let mut namespace = Namespace::new(NamespaceKind::Interface, "Vehicle");
        namespace.attributes.push(Attribute {
            name: "speed".into(),
            ty: TypeRef::Primitive(Primitive::UInt32),
            comments: Comments::from_iter([("description", "  Current speed.")]),
        });
        let mut package = Package::new("org.example");
        package.namespaces.push(namespace);
        let mut model = Model::new();
        model.packages.push(package);

        let lines = render(&model);
        let anchor = lines.iter().position(|l| l == "[[Vehicle-speed]]").unwrap();
        assert_eq!(lines[anchor + 1], "=== Attribute speed");
        assert_eq!(lines[anchor + 3], "Current speed.");
        assert!(lines.contains(&"Attribute data type: uint32".to_string()));
    }
}

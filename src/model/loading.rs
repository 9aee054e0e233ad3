use std::{fs, path::Path};

use tracing::debug;

use super::Model;
use crate::core::{FidldocError, Result};

impl Model {
    /// Parses a model from its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns `FidldocError::ModelParse` when the content is not a valid
    /// interchange document.
    pub fn from_json(content: &str) -> Result<Model> {
        serde_json::from_str(content).map_err(|e| FidldocError::model_parse(e, None))
    }

    /// Loads a model from an interchange file.
    ///
    /// # Errors
    ///
    /// Returns `FidldocError::Io` when the file cannot be read and
    /// `FidldocError::ModelParse` when its content does not parse.
    pub fn load(path: &Path) -> Result<Model> {
        let content = fs::read_to_string(path).map_err(|e| FidldocError::io(e, path))?;
        let model: Model =
            serde_json::from_str(&content).map_err(|e| FidldocError::model_parse(e, Some(path)))?;
        debug!(path = %path.display(), packages = model.packages.len(), "loaded model");
        Ok(model)
    }

    /// Loads several interchange files into one model.
    ///
    /// Packages are appended in input order, so a multi-file run documents
    /// every package in a single document.
    ///
    /// # Errors
    ///
    /// Fails on the first file that cannot be read or parsed.
    pub fn load_merged<P: AsRef<Path>>(paths: &[P]) -> Result<Model> {
        let mut merged = Model::new();
        for path in paths {
            let model = Self::load(path.as_ref())?;
            merged.packages.extend(model.packages);
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Model, NamespaceKind, Primitive, TypeRef};

    #[test]
    fn parses_interchange_json() {
        let model = Model::from_json(
            r#"{
                "packages": [{
                    "name": "org.example",
                    "namespaces": [{
                        "kind": "interface",
                        "name": "Vehicle",
                        "version": {"major": 1, "minor": 2},
                        "attributes": [
                            {"name": "speed", "type": "uint32"}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let namespace = &model.packages[0].namespaces[0];
        assert_eq!(namespace.kind, NamespaceKind::Interface);
        assert_eq!(namespace.version.unwrap().to_string(), "1.2");
        assert_eq!(
            namespace.attributes[0].ty,
            TypeRef::Primitive(Primitive::UInt32)
        );
    }

    #[test]
    fn rejects_malformed_interchange() {
        assert!(Model::from_json("{\"packages\": 7}").is_err());
    }
}

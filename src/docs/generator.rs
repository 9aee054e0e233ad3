use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::docs::index::{RefIndex, ReferenceIndexer};
use crate::docs::render::SectionRenderer;
use crate::docs::walker::walk;
use crate::model::{Model, ModelIndex};

/// Generates cross-linked AsciiDoc documentation from an interface model.
///
/// A generator run owns its reference index and line buffer; both are
/// rebuilt from scratch on every call, so repeated runs over the same model
/// produce identical output.
#[derive(Debug, Default)]
pub struct DocsGenerator {
    config: Config,
}

impl DocsGenerator {
    /// Creates a generator with default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the render options.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Renders `model` into an ordered sequence of document lines.
    ///
    /// Runs the reference-indexing pass to completion before any rendering
    /// starts; the passes never interleave.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::CyclicExtends` or `DocsError::UnresolvedBase`
    /// when an `extends` chain is malformed.
    pub fn generate(&self, model: &Model) -> Result<Vec<String>, DocsError> {
        let lookup = ModelIndex::new(model);

        let mut refs = RefIndex::default();
        walk(model, &mut ReferenceIndexer::new(&mut refs))?;
        debug!("reference index populated");

        let mut lines = Vec::new();
        walk(
            model,
            &mut SectionRenderer::new(&lookup, &refs, &self.config.render, &mut lines),
        )?;

        let namespaces: usize = model
            .packages
            .iter()
            .map(|package| package.namespaces.len())
            .sum();
        info!(namespaces, lines = lines.len(), "rendered document");
        Ok(lines)
    }

    /// Renders `model` and writes the joined document to `path`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline errors of [`DocsGenerator::generate`] plus
    /// `DocsError::Write` when the output file cannot be written.
    pub fn generate_to_file(&self, model: &Model, path: &Path) -> Result<(), DocsError> {
        let lines = self.generate(model)?;
        fs::write(path, lines.join("\n")).map_err(|err| DocsError::Write {
            path: path.to_path_buf(),
            details: err.to_string(),
        })?;
        info!(path = %path.display(), "wrote document");
        Ok(())
    }
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// An `extends` chain revisits a type.
    #[error("cyclic extends chain through '{namespace}-{name}'")]
    CyclicExtends {
        /// Namespace of the revisited type.
        namespace: String,
        /// Name of the revisited type.
        name: String,
    },

    /// An `extends` link points at a type the model does not define.
    #[error("extends base '{namespace}-{name}' is not defined in the model")]
    UnresolvedBase {
        /// Namespace the link names.
        namespace: String,
        /// Type name the link names.
        name: String,
    },

    /// The output document could not be written.
    #[error("failed to write document to '{path}': {details}")]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error details.
        details: String,
    },
}

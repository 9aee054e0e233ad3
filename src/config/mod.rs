//! Render options for the documentation generator.
//!
//! Options are deserializable from TOML with defaults for every field, so a
//! partial or absent options file behaves the same as no options at all.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::{FidldocError, Result};

/// Top-level options structure loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Options applied while rendering sections.
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `FidldocError::Io` when the file cannot be read and
    /// `FidldocError::TomlParse` when its content does not parse.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| FidldocError::io(e, path))?;
        toml::from_str(&content).map_err(|e| FidldocError::toml_parse(e, Some(path)))
    }
}

/// Options applied while rendering sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// How members inherited through an `extends` chain are listed.
    pub inherited_members: InheritedMembers,
    /// Whether namespace sections carry the generated-from note line.
    pub generated_note: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            inherited_members: InheritedMembers::default(),
            generated_note: true,
        }
    }
}

/// Policy for a member name declared at several levels of an `extends`
/// chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InheritedMembers {
    /// Pass-through: every declaration appears, base-first.
    #[default]
    ListAll,
    /// The most derived declaration wins; base duplicates are dropped.
    Override,
}

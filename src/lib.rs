//! fidldoc - AsciiDoc documentation generator for Franca IDL models.
//!
//! fidldoc turns a fully resolved interface-description model (packages of
//! interfaces and type collections) into one cross-linked AsciiDoc
//! document. The main features include:
//!
//! - A two-pass pipeline: a reverse type-usage index, then section rendering
//! - Cross-links for type references, `extends` bases and "see also" notes
//! - Flattening of struct and enumeration inheritance chains
//! - A serde JSON interchange so external parsers can hand models over
//!
//! # Quick Start
//!
//! ```rust
//! use fidldoc::docs::DocsGenerator;
//! use fidldoc::model::Model;
//!
//! let model = Model::from_json(r#"{"packages": []}"#).unwrap();
//! let lines = DocsGenerator::new().generate(&model).unwrap();
//! assert!(lines.is_empty());
//! ```

/// Core error types and result aliases.
pub mod core;

/// Read-only interface-description model and its lookup tables.
pub mod model;

/// Render options loadable from TOML.
pub mod config;

/// The two-pass documentation pipeline.
pub mod docs;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{FidldocError, Result};

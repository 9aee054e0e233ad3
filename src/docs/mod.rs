//! The two-pass documentation pipeline.
//!
//! Pass 1 ([`index`]) walks the model and builds the reverse type-usage
//! index; pass 2 ([`render`]) walks it again and emits cross-linked
//! AsciiDoc sections. Both passes share one traversal ([`walker`]) and run
//! strictly in sequence, orchestrated by [`DocsGenerator`].

mod comment;
mod flatten;
mod generator;
mod index;
mod render;
mod typename;
mod walker;

pub use comment::{normalize_indent, resolve_see};
pub use flatten::{flatten_enum, flatten_struct};
pub use generator::{DocsError, DocsGenerator};
pub use index::{RefIndex, Referrer, ReferenceIndexer, TypeId};
pub use render::SectionRenderer;
pub use typename::{display_name, link_to};
pub use walker::{MemberKind, ModelVisitor, walk};

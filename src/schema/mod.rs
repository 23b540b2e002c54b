//! Schema inference from a sample document
//!
//! Classifies values into kinds, walks the document to find leaves and
//! derives identifiers from leaf paths.

pub mod kind;
pub mod naming;
pub mod walker;

pub use kind::classify;
pub use naming::{derive_identifier, sanitize_segment};
pub use walker::{walk, SchemaWalker};

//! Accessor synthesis and code emission
//!
//! Synthesis is pure: a sample document goes in, an ordered [`AccessorSet`]
//! comes out. Emission renders that set as Rust source for build scripts.

pub mod codegen;
pub mod synthesizer;

pub use codegen::{emit_rust, rust_ident};
pub use synthesizer::{synthesize, AccessorSet};

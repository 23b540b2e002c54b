//! Rust source emission
//!
//! Renders an [`AccessorSet`] as a module of plain functions, one per
//! accessor, each calling [`crate::runtime::get`] with its fixed path.

use crate::accessor::synthesizer::{check_unique, AccessorSet};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::types::{display_path, AccessorSpec, PathSegment};

const STRICT_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

// Cannot be written as raw identifiers
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Make an accessor identifier legal as a Rust function name.
///
/// Only ASCII letters, digits and `_` survive; everything else becomes `_`.
pub fn rust_ident(identifier: &str) -> String {
    let mut ident: String = identifier
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() {
        return "_empty".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    } else if STRICT_KEYWORDS.contains(&ident.as_str()) {
        ident.insert_str(0, "r#");
    }

    ident
}

fn segment_expr(segment: &PathSegment, krate: &str) -> String {
    match segment {
        PathSegment::Key(key) => format!("{}::PathSegment::Key(String::from({:?}))", krate, key),
        PathSegment::Index(i) => format!("{}::PathSegment::Index({})", krate, i),
        PathSegment::Each => format!("{}::PathSegment::Each", krate),
    }
}

fn render_accessor(spec: &AccessorSpec, ident: &str, krate: &str) -> String {
    let segments = spec
        .path
        .iter()
        .map(|s| segment_expr(s, krate))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "/// `{path}` ({value_type})\n\
         #[allow(non_snake_case)]\n\
         pub fn {ident}(ctx: &JsonCtx) -> Result<{ty}, AccessError> {{\n    \
         {krate}::runtime::get(ctx, &[{segments}])\n\
         }}\n",
        path = display_path(&spec.path).escape_debug(),
        value_type = spec.value_type,
        ident = ident,
        ty = spec.value_type.rust_type(),
        krate = krate,
        segments = segments,
    )
}

/// Emit Rust source declaring one function per accessor.
///
/// Fails if two identifiers only become equal once made legal Rust.
pub fn emit_rust(set: &AccessorSet, config: &GeneratorConfig) -> Result<String, GenerateError> {
    let krate = config.runtime_crate.as_str();
    let idents: Vec<String> = set.iter().map(|spec| rust_ident(&spec.identifier)).collect();

    check_unique(
        idents
            .iter()
            .zip(set.iter())
            .map(|(ident, spec)| (ident.as_str(), spec.path.as_slice())),
    )?;

    let mut out = String::new();
    out.push_str("// Generated by json-accessors. Do not edit.\n\n");
    out.push_str(&format!("use {}::{{AccessError, JsonCtx}};\n", krate));

    for (spec, ident) in set.iter().zip(&idents) {
        out.push('\n');
        out.push_str(&render_accessor(spec, ident, krate));
    }

    Ok(out)
}

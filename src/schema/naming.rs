//! Identifier derivation from paths

use crate::config::GeneratorConfig;
use crate::types::PathSegment;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Characters object keys may contain that never appear in identifiers
static SANITIZE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \-./]").unwrap());

/// Replace space, hyphen, period and slash with `_`
pub fn sanitize_segment(segment: &str) -> Cow<'_, str> {
    SANITIZE_REGEX.replace_all(segment, "_")
}

/// Derive the identifier for a path: sanitized segments joined by the
/// configured separator, or the root identifier for an empty path.
pub fn derive_identifier(path: &[PathSegment], config: &GeneratorConfig) -> String {
    if path.is_empty() {
        return config.root_identifier.clone();
    }

    path.iter()
        .map(|segment| match segment {
            PathSegment::Key(key) => sanitize_segment(key).into_owned(),
            PathSegment::Index(i) => i.to_string(),
            PathSegment::Each => config.collector_word.clone(),
        })
        .collect::<Vec<_>>()
        .join(&config.separator)
}

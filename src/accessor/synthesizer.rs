//! Accessor synthesis
//!
//! Turns walker leaves into named accessor specs and checks that no two
//! paths share an identifier.

use crate::config::GeneratorConfig;
use crate::error::{AccessError, GenerateError};
use crate::runtime::{self, JsonCtx};
use crate::schema::naming::derive_identifier;
use crate::schema::SchemaWalker;
use crate::types::{display_path, AccessedValue, AccessorSpec, Leaf, Path, PathSegment, ValueType};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path as FsPath;
use tracing::{info, warn};

/// Name a leaf path and bind it to its declared type
pub fn synthesize(path: Path, value_type: ValueType, config: &GeneratorConfig) -> AccessorSpec {
    AccessorSpec {
        identifier: derive_identifier(&path, config),
        path,
        value_type,
    }
}

impl AccessorSpec {
    /// Extract this accessor's path from `ctx` and convert it
    pub fn evaluate(&self, ctx: &JsonCtx) -> Result<AccessedValue, AccessError> {
        runtime::evaluate(ctx, self)
    }
}

/// The ordered accessors generated from one sample document
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorSet {
    specs: Vec<AccessorSpec>,
}

impl AccessorSet {
    /// Build accessors from leaves, in leaf order
    pub fn from_leaves(leaves: Vec<Leaf>, config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let specs: Vec<AccessorSpec> = leaves
            .into_iter()
            .map(|leaf| synthesize(leaf.path, leaf.value_type, config))
            .collect();

        check_unique(specs.iter().map(|s| (s.identifier.as_str(), s.path.as_slice())))?;

        Ok(AccessorSet { specs })
    }

    /// Walk a parsed sample document and synthesize its accessors
    pub fn from_value(sample: &Value, config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let leaves = SchemaWalker::new(config).walk(sample);
        let set = Self::from_leaves(leaves, config)?;
        info!(accessors = set.len(), "generated accessors");
        Ok(set)
    }

    /// Parse sample JSON text and synthesize its accessors
    pub fn from_json_str(text: &str, config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let sample: Value = serde_json::from_str(text)?;
        Self::from_value(&sample, config)
    }

    /// Parse sample JSON bytes and synthesize its accessors.
    ///
    /// Invalid UTF-8 is reported by the parser as a syntax error.
    pub fn from_json_slice(bytes: &[u8], config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let sample: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&sample, config)
    }

    /// Read a sample file and synthesize its accessors
    pub fn from_file<P: AsRef<FsPath>>(path: P, config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_slice(&bytes, config)
    }

    pub fn specs(&self) -> &[AccessorSpec] {
        &self.specs
    }

    pub fn into_specs(self) -> Vec<AccessorSpec> {
        self.specs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AccessorSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Look up an accessor by identifier
    pub fn get(&self, identifier: &str) -> Option<&AccessorSpec> {
        self.specs.iter().find(|s| s.identifier == identifier)
    }

    /// Evaluate every accessor against `ctx`. Each result stands alone.
    pub fn evaluate_all<'s>(
        &'s self,
        ctx: &JsonCtx,
    ) -> Vec<(&'s str, Result<AccessedValue, AccessError>)> {
        self.specs
            .iter()
            .map(|spec| (spec.identifier.as_str(), spec.evaluate(ctx)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a AccessorSet {
    type Item = &'a AccessorSpec;
    type IntoIter = std::slice::Iter<'a, AccessorSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

/// Fail on the first identifier claimed by two different paths
pub(crate) fn check_unique<'a, I>(entries: I) -> Result<(), GenerateError>
where
    I: IntoIterator<Item = (&'a str, &'a [PathSegment])>,
{
    let mut seen: HashMap<&str, &[PathSegment]> = HashMap::new();

    for (identifier, path) in entries {
        if let Some(first) = seen.insert(identifier, path) {
            let first = display_path(first);
            let second = display_path(path);
            warn!(identifier, %first, %second, "identifier collision");
            return Err(GenerateError::IdentifierCollision {
                identifier: identifier.to_string(),
                first,
                second,
            });
        }
    }

    Ok(())
}

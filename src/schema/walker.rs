//! Schema walking
//!
//! Traverses a sample document from the root and decides, node by node,
//! whether to recurse (objects, arrays of objects), emit a leaf (scalars,
//! arrays of scalars) or drop the node (null, empty or nested arrays).

use crate::config::GeneratorConfig;
use crate::schema::kind::classify;
use crate::types::{display_path, JsonKind, Leaf, Path, PathSegment, ScalarType, ValueType};
use serde_json::Value;
use tracing::debug;

/// Walks a sample document and collects its leaves in document order
pub struct SchemaWalker<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> SchemaWalker<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        SchemaWalker { config }
    }

    /// Walk the whole document from the root
    pub fn walk(&self, value: &Value) -> Vec<Leaf> {
        let mut leaves = Vec::new();
        self.walk_value(&Vec::new(), value, &mut leaves);
        leaves
    }

    /// Walk a value found at `prefix`, appending leaves to `leaves`
    fn walk_value(&self, prefix: &Path, value: &Value, leaves: &mut Vec<Leaf>) {
        match classify(value) {
            JsonKind::Object => {
                if let Value::Object(obj) = value {
                    for (key, child) in obj.iter() {
                        let path = child_path(prefix, PathSegment::key(key.as_str()));
                        self.walk_value(&path, child, leaves);
                    }
                }
            }
            JsonKind::ArrayOf(inner) => match *inner {
                JsonKind::Object => {
                    if let Value::Array(arr) = value {
                        self.walk_object_array(prefix, arr, leaves);
                    }
                }
                ref element => match ScalarType::from_kind(element) {
                    Some(scalar) => emit(prefix, ValueType::ListOf(scalar), leaves),
                    None => debug!(path = %display_path(prefix), "skipping array of non-scalar elements"),
                },
            },
            kind => match ScalarType::from_kind(&kind) {
                Some(scalar) => emit(prefix, ValueType::scalar(scalar), leaves),
                None => debug!(path = %display_path(prefix), "skipping null or empty value"),
            },
        }
    }

    /// Arrays of objects are exposed element by element, then optionally
    /// through collector leaves shared by every element.
    fn walk_object_array(&self, prefix: &Path, arr: &[Value], leaves: &mut Vec<Leaf>) {
        let mut per_element: Vec<Vec<Leaf>> = Vec::with_capacity(arr.len());

        for (idx, element) in arr.iter().enumerate() {
            let path = child_path(prefix, PathSegment::Index(idx));
            let mut element_leaves = Vec::new();
            self.walk_value(&path, element, &mut element_leaves);
            per_element.push(element_leaves);
        }

        let collectors = if self.config.collectors {
            collector_leaves(prefix, &per_element)
        } else {
            Vec::new()
        };

        leaves.extend(per_element.into_iter().flatten());

        for leaf in collectors {
            debug!(path = %display_path(&leaf.path), value_type = %leaf.value_type, "collector leaf");
            leaves.push(leaf);
        }
    }
}

/// Build collector leaves for an array of objects at `prefix`.
///
/// A suffix qualifies when every element produced a scalar leaf there with
/// the same type.
fn collector_leaves(prefix: &Path, per_element: &[Vec<Leaf>]) -> Vec<Leaf> {
    let Some((first, rest)) = per_element.split_first() else {
        return Vec::new();
    };

    // Each element leaf path is prefix + [index] + suffix
    let depth = prefix.len() + 1;
    let mut collectors = Vec::new();

    for leaf in first {
        let scalar = match leaf.value_type {
            ValueType::ListOf(_) => continue,
            ValueType::String => ScalarType::String,
            ValueType::Number => ScalarType::Number,
            ValueType::Boolean => ScalarType::Boolean,
        };
        let suffix = &leaf.path[depth..];

        let shared = rest.iter().all(|element| {
            element
                .iter()
                .any(|other| other.value_type == leaf.value_type && &other.path[depth..] == suffix)
        });

        if shared {
            let mut path = prefix.clone();
            path.push(PathSegment::Each);
            path.extend(suffix.iter().cloned());
            collectors.push(Leaf::new(path, ValueType::ListOf(scalar)));
        }
    }

    collectors
}

fn child_path(prefix: &Path, segment: PathSegment) -> Path {
    let mut path = Vec::with_capacity(prefix.len() + 1);
    path.extend(prefix.iter().cloned());
    path.push(segment);
    path
}

fn emit(path: &Path, value_type: ValueType, leaves: &mut Vec<Leaf>) {
    debug!(path = %display_path(path), %value_type, "leaf");
    leaves.push(Leaf::new(path.clone(), value_type));
}

/// Walk a document with the default configuration
pub fn walk(value: &Value) -> Vec<Leaf> {
    SchemaWalker::new(&GeneratorConfig::default()).walk(value)
}

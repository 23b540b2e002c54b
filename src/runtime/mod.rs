//! Runtime evaluation of accessors
//!
//! Replays an accessor's path against a document held in a [`JsonCtx`] and
//! converts the value found there. Both steps are pure; errors are returned
//! to the caller of the single accessor that hit them.

pub mod convert;
pub mod ctx;
pub mod extract;

pub use convert::{convert, FromJson};
pub use ctx::JsonCtx;
pub use extract::extract;

use crate::error::AccessError;
use crate::types::{AccessedValue, AccessorSpec, PathSegment};

/// Extract and convert the value at `path` into `T`.
///
/// This is what generated accessor functions call.
pub fn get<T: FromJson>(ctx: &JsonCtx, path: &[PathSegment]) -> Result<T, AccessError> {
    let value = extract(ctx.value(), path)?;
    T::from_json(&value)
}

/// Evaluate an accessor spec against a context
pub fn evaluate(ctx: &JsonCtx, spec: &AccessorSpec) -> Result<AccessedValue, AccessError> {
    let value = extract(ctx.value(), &spec.path)?;
    convert(&value, spec.value_type)
}

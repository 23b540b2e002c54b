//! # json-accessors - typed accessors inferred from sample JSON
//!
//! Walks a sample JSON document, finds every primitive-valued field (including
//! those nested in objects and arrays) and binds each one to a named accessor
//! with a fixed path and a declared type. At runtime the path is replayed
//! against another document and the value converted, with structural
//! mismatches reported as [`AccessError`]s.
//!
//! ## Modules
//!
//! - **schema**: kind classification, schema walking and identifier naming
//! - **accessor**: accessor synthesis and Rust source emission
//! - **runtime**: path extraction and type conversion
//!
//! ## Quick Start
//!
//! ```rust
//! use json_accessors::{AccessedValue, AccessorSet, GeneratorConfig, JsonCtx};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let sample = json!({
//!     "tradeDetails": {
//!         "leg1Details": {"priceCurrency": "EUR", "notional": 1000000}
//!     }
//! });
//!
//! let accessors = AccessorSet::from_value(&sample, &GeneratorConfig::default())?;
//! assert_eq!(accessors.len(), 2);
//!
//! let live = JsonCtx::new(json!({
//!     "tradeDetails": {
//!         "leg1Details": {"priceCurrency": "USD", "notional": 250}
//!     }
//! }));
//! let notional = accessors.get("tradeDetails_leg1Details_notional").unwrap();
//! assert_eq!(notional.evaluate(&live)?, AccessedValue::Number(250.0));
//! # Ok(())
//! # }
//! ```
//!
//! ### Build scripts
//!
//! ```rust,no_run
//! // build.rs
//! # fn main() -> anyhow::Result<()> {
//! let out_dir = std::env::var("OUT_DIR")?;
//! let source = json_accessors::generate_module("sample.json", &Default::default())?;
//! std::fs::write(std::path::Path::new(&out_dir).join("accessors.rs"), source)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub mod accessor;
pub mod config;
pub mod error;
pub mod runtime;
pub mod schema;
pub mod types;

// Re-export commonly used types for convenience
pub use accessor::{emit_rust, AccessorSet};
pub use config::GeneratorConfig;
pub use error::{AccessError, GenerateError};
pub use runtime::{FromJson, JsonCtx};
pub use types::{AccessedValue, AccessorSpec, JsonKind, PathSegment, ScalarType, ValueType};

/// Main entry point: generate the accessors for a sample JSON file
pub fn generate_accessors<P: AsRef<Path>>(path: P) -> Result<Vec<AccessorSpec>, GenerateError> {
    generate_accessors_with(path, &GeneratorConfig::default())
}

/// Generate accessors for a sample JSON file with an explicit configuration
pub fn generate_accessors_with<P: AsRef<Path>>(
    path: P,
    config: &GeneratorConfig,
) -> Result<Vec<AccessorSpec>, GenerateError> {
    AccessorSet::from_file(path, config).map(AccessorSet::into_specs)
}

/// Generate Rust source for the accessors of a sample JSON file
pub fn generate_module<P: AsRef<Path>>(path: P, config: &GeneratorConfig) -> Result<String, GenerateError> {
    let set = AccessorSet::from_file(path, config)?;
    emit_rust(&set, config)
}

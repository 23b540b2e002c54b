/// Configuration for accessor generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Joins sanitized path segments into an identifier
    pub separator: String,

    /// Identifier used for the empty (root) path
    pub root_identifier: String,

    /// Also emit collector accessors for arrays of objects
    pub collectors: bool,

    /// Word standing in for the wildcard segment in collector identifiers
    pub collector_word: String,

    /// Crate path the emitted Rust code imports the runtime from
    pub runtime_crate: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            separator: String::from("_"),
            root_identifier: String::from("root"),
            collectors: false,
            collector_word: String::from("each"),
            runtime_crate: String::from("json_accessors"),
        }
    }
}

impl GeneratorConfig {
    pub fn with_collectors(mut self, enabled: bool) -> Self {
        self.collectors = enabled;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }
}

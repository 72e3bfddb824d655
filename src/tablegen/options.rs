//! Converter configuration.

/// Options controlling batch conversion and definition naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Target name used in the header banner (`Builtins<target>.td`).
    pub target: String,

    /// Emit the license banner and the `BuiltinsBase.td` include.
    pub emit_header: bool,

    /// Substrings removed from builtin names, in order, before CamelCasing.
    pub strip_prefixes: Vec<String>,
}

impl ConvertOptions {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, emit_header: bool) -> Self {
        self.emit_header = emit_header;
        self
    }

    pub fn with_strip_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strip_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// File name of the generated TableGen file.
    pub fn output_file_name(&self) -> String {
        format!("Builtins{}.td", self.target)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            target: "SystemZ".to_string(),
            emit_header: true,
            strip_prefixes: vec!["__builtin_s390_".to_string(), "__builtin_".to_string()],
        }
    }
}

//! Record assembly: decode one builtin and shape it into a TableGen definition.
//!
//! Decode failures never escape as errors of the batch; [`assemble`] hands
//! back a [`Diagnostic`] that keeps the raw record for hand-fixing.

use std::fmt;

use log::debug;

use super::options::ConvertOptions;
use super::record::BuiltinRecord;
use crate::core::DecodeError;
use crate::encoding::{decode_attributes, decode_signature, Attribute, Signature};

/// A successfully decoded builtin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGenDef {
    /// CamelCase record name, e.g. `Tbegin`.
    pub def_name: String,
    /// Original builtin name, e.g. `__builtin_tbegin`.
    pub spelling: String,
    pub signature: Signature,
    pub attributes: Vec<Attribute>,
    pub feature: String,
}

impl TableGenDef {
    pub fn prototype(&self) -> String {
        self.signature.prototype()
    }
}

impl fmt::Display for TableGenDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "def {} : TargetBuiltin {{", self.def_name)?;
        writeln!(f, "  let Spellings = [\"{}\"];", self.spelling)?;
        writeln!(f, "  let Prototype = \"{}\";", self.signature)?;
        if !self.attributes.is_empty() {
            let attrs: Vec<String> = self.attributes.iter().map(ToString::to_string).collect();
            writeln!(f, "  let Attributes = [{}];", attrs.join(", "))?;
        }
        if !self.feature.is_empty() {
            writeln!(f, "  let Features = [\"{}\"];", self.feature)?;
        }
        f.write_str("}")
    }
}

/// Placeholder for a record whose encodings could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub record: BuiltinRecord,
    pub error: DecodeError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// ERROR converting {}: {}", self.record.name, self.error)?;
        write!(f, "// Original: {}", self.record)
    }
}

/// Decode `record` and build its definition.
pub fn assemble(record: &BuiltinRecord, options: &ConvertOptions) -> Result<TableGenDef, Diagnostic> {
    let decoded = decode_signature(&record.prototype)
        .and_then(|sig| decode_attributes(&record.attributes).map(|attrs| (sig, attrs)));

    match decoded {
        Ok((signature, attributes)) => {
            let def = TableGenDef {
                def_name: def_name(&record.name, &options.strip_prefixes),
                spelling: record.name.clone(),
                signature,
                attributes,
                feature: record.feature.clone(),
            };
            debug!("{} -> {} \"{}\"", record.name, def.def_name, def.prototype());
            Ok(def)
        }
        Err(error) => Err(Diagnostic {
            record: record.clone(),
            error,
        }),
    }
}

/// Turn a builtin name into a TableGen record name.
///
/// `__builtin_s390_vperm` becomes `Vperm`; names that would start with a
/// digit after stripping (`390...`) get an `S` in front.
pub fn def_name(name: &str, strip_prefixes: &[String]) -> String {
    let mut stripped = name.to_string();
    for prefix in strip_prefixes.iter().filter(|p| !p.is_empty()) {
        stripped = stripped.replace(prefix.as_str(), "");
    }

    let mut def: String = stripped.split('_').map(capitalize).collect();
    if def.starts_with("390") {
        def.insert(0, 'S');
    }
    def
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

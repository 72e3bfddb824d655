//! Attribute flag decoder.
//!
//! Attribute encodings are a flat run of single-character flags plus two
//! parameterized forms, `p:N:` (printf format argument) and `V:N:`
//! (required vector width). Unknown flags are skipped.

use std::fmt;

use log::trace;

use super::tables::attribute_flag;
use crate::core::{DecodeError, DecodeResult};

/// One decoded attribute token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    NoThrow,
    NoReturn,
    Pure,
    Const,
    CustomTypeChecking,
    TypeGeneric,
    LibBuiltin,
    LibFunction,
    RequiresHeader,
    RuntimeLibFunction,
    ConstWithoutErrnoAndExceptions,
    ConstWithoutExceptions,
    ReturnsTwice,
    NoSideEffects,
    CxxNamespaceStd,
    ConstantEvaluated,
    CxxConsteval,
    /// `p:N:`
    PrintfFormat(u32),
    /// `V:N:`
    RequiresVectorWidth(u32),
}

impl Attribute {
    /// TableGen record name, without parameters.
    pub const fn name(self) -> &'static str {
        use Attribute::*;
        match self {
            NoThrow => "NoThrow",
            NoReturn => "NoReturn",
            Pure => "Pure",
            Const => "Const",
            CustomTypeChecking => "CustomTypeChecking",
            TypeGeneric => "TypeGeneric",
            LibBuiltin => "LibBuiltin",
            LibFunction => "LibFunction",
            RequiresHeader => "RequiresHeader",
            RuntimeLibFunction => "RuntimeLibFunction",
            ConstWithoutErrnoAndExceptions => "ConstWithoutErrnoAndExceptions",
            ConstWithoutExceptions => "ConstWithoutExceptions",
            ReturnsTwice => "ReturnsTwice",
            NoSideEffects => "NoSideEffects",
            CxxNamespaceStd => "CXXNamespaceStd",
            ConstantEvaluated => "ConstantEvaluated",
            CxxConsteval => "CXXConsteval",
            PrintfFormat(_) => "PrintfFormat",
            RequiresVectorWidth(_) => "RequiresVectorWidth",
        }
    }

    pub const fn argument(self) -> Option<u32> {
        match self {
            Attribute::PrintfFormat(n) | Attribute::RequiresVectorWidth(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.argument() {
            Some(n) => write!(f, "{}<{}>", self.name(), n),
            None => f.write_str(self.name()),
        }
    }
}

/// Decode an attribute flag string into tokens, in order, duplicates kept.
pub fn decode_attributes(flags: &str) -> DecodeResult<Vec<Attribute>> {
    let mut attrs = Vec::new();
    let mut chars = flags.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if let Some(attr) = attribute_flag(ch) {
            attrs.push(attr);
            continue;
        }

        if !matches!(ch, 'p' | 'V') || chars.peek().map(|&(_, c)| c) != Some(':') {
            trace!("skipping unknown attribute flag {:?} at {}", ch, pos);
            continue;
        }

        // `pos + 2` is just past the opening ':'.
        let arg_start = pos + 2;
        let Some(len) = flags[arg_start..].find(':') else {
            trace!("unterminated '{}:' at {}", ch, pos);
            continue;
        };

        let argument = &flags[arg_start..arg_start + len];
        let n = argument
            .parse::<u32>()
            .map_err(|_| DecodeError::InvalidAttributeArgument {
                flag: ch,
                argument: argument.to_string(),
            })?;
        attrs.push(if ch == 'p' {
            Attribute::PrintfFormat(n)
        } else {
            Attribute::RequiresVectorWidth(n)
        });

        // Resume after the closing ':'.
        let close = arg_start + len;
        while chars.next_if(|&(i, _)| i <= close).is_some() {}
    }

    Ok(attrs)
}

// This module defines error types for the builtin converter using the thiserror crate
// for idiomatic Rust error handling. DecodeError covers the hard failures a single
// record can hit while its prototype or attribute encoding is decoded: cardinalities
// that overflow, runaway compound nesting, and malformed parameterized attribute
// arguments. Unknown codes are never errors; the decoders
// degrade to placeholder types for those. ConvertError is the I/O error surfaced by the
// file converter and the CLI. DecodeResult<T> and ConvertResult<T> are convenience
// aliases.

//! Error types for the builtin converter.
//!
//! Using thiserror for more idiomatic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Hard failure while decoding one record's encodings.
///
/// These never escape a batch: the converter turns them into a
/// [`Diagnostic`](crate::tablegen::Diagnostic) for the offending record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("vector count '{digits}' at offset {position} does not fit in 32 bits")]
    CountOverflow {
        digits: String,
        position: usize,
    },

    #[error("type nesting exceeds {limit} levels at offset {position}")]
    NestingTooDeep {
        position: usize,
        limit: usize,
    },

    #[error("invalid argument '{argument}' for attribute flag '{flag}'")]
    InvalidAttributeArgument {
        flag: char,
        argument: String,
    },
}

/// Batch-level error for file conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

// This module serves as the hub for the converter's shared infrastructure: the
// thiserror-based error types used by the decoders and the file converter, and the
// statistics collected while a batch of builtin records is converted.

//! Shared converter infrastructure.
//!
//! ## Errors (`error`)
//! - `DecodeError` for hard per-record decode failures
//! - `ConvertError` for batch I/O failures
//!
//! ## Statistics (`stats`)
//! - Converted and failed record counts

pub mod error;
pub mod stats;

pub use error::{ConvertError, ConvertResult, DecodeError, DecodeResult};
pub use stats::ConversionStats;

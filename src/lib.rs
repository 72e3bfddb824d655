//! builtins-td - clang builtin encodings to TableGen.
//!
//! Clang's `Builtins*.def` files describe each builtin with a compact
//! positional encoding of its prototype (`"V16UcV16UcV16Uc"`) and its
//! attributes (`"nc"`). This crate decodes those strings into a typed tree
//! and renders the `TargetBuiltin` records used by `Builtins*.td`.
//!
//! # Primary Usage
//!
//! ```
//! use builtins_td::tablegen::{assemble, BuiltinRecord, ConvertOptions};
//!
//! let record = BuiltinRecord::new("__builtin_tbegin", "iv*", "j", "transactional-execution");
//! let def = assemble(&record, &ConvertOptions::default()).unwrap();
//! assert_eq!(def.def_name, "Tbegin");
//! assert_eq!(def.prototype(), "int(void*)");
//! ```
//!
//! # Architecture
//!
//! - [`encoding`] - Prototype and attribute decoders, static tables
//! - [`tablegen`] - Record extraction, assembly and batch conversion
//! - [`core`] - Shared infrastructure (errors, statistics)

pub mod core;
pub mod encoding;
pub mod tablegen;

pub use crate::core::{ConversionStats, ConvertError, ConvertResult, DecodeError, DecodeResult};
pub use encoding::{decode_attributes, decode_one, decode_signature, Attribute, ParsedType, Signature};
pub use tablegen::{assemble, convert_source, BuiltinRecord, ConvertOptions, Diagnostic, TableGenDef};

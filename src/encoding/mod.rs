// This module holds the grammar side of the converter: the static base-code and
// attribute tables, the decoded type tree, the recursive-descent prototype decoder and
// the linear attribute flag decoder. Every decode call owns a private cursor over an
// immutable encoding string; the tables are plain constants shared by all calls.

//! Builtin encoding decoders.
//!
//! ```
//! use builtins_td::encoding::{decode_attributes, decode_signature, Attribute};
//!
//! let sig = decode_signature("iv*").unwrap();
//! assert_eq!(sig.prototype(), "int(void*)");
//!
//! let attrs = decode_attributes("j").unwrap();
//! assert_eq!(attrs, vec![Attribute::ReturnsTwice]);
//! ```

pub mod attributes;
pub mod decoder;
pub mod tables;
pub mod types;

pub use attributes::{decode_attributes, Attribute};
pub use decoder::{decode_one, decode_signature, MAX_NESTING};
pub use tables::Primitive;
pub use types::{BaseType, Indirection, ParsedType, Qualifier, Signature, SizeModifier, TargetType};

//! TableGen record generation.
//!
//! - [`record`] - extraction of `TARGET_BUILTIN(...)` lines
//! - [`assemble`] - decoding one record into a [`TableGenDef`] or a [`Diagnostic`]
//! - [`convert`] - whole-file conversion with statistics
//! - [`options`] - converter configuration

pub mod assemble;
pub mod convert;
pub mod options;
pub mod record;

pub use assemble::{assemble, def_name, Diagnostic, TableGenDef};
pub use convert::{convert_file, convert_record, convert_source, read_source, Conversion, DEMO_LINES};
pub use options::ConvertOptions;
pub use record::BuiltinRecord;

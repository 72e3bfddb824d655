//! Batch conversion of a `Builtins*.def` source into TableGen text.
//!
//! Lines are processed in input order. Every `TARGET_BUILTIN` line yields
//! either a definition or a diagnostic, so one bad record never stops the
//! rest of the file.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use super::assemble::assemble;
use super::options::ConvertOptions;
use super::record::BuiltinRecord;
use crate::core::{ConversionStats, ConvertError, ConvertResult};

/// Reference records exercised by `convert-builtins --demo`.
pub const DEMO_LINES: [(&str, &str); 4] = [
    (
        r#"TARGET_BUILTIN(__builtin_tbegin, "iv*", "j", "transactional-execution")"#,
        "Simple pointer type",
    ),
    (
        r#"TARGET_BUILTIN(__builtin_s390_lcbb, "UivC*Ii", "nc", "vector")"#,
        "Complex mixed types",
    ),
    (
        r#"TARGET_BUILTIN(__builtin_s390_vperm, "V16UcV16UcV16UcV16Uc", "nc", "vector")"#,
        "Vector types",
    ),
    (
        r#"TARGET_BUILTIN(__builtin_s390_vfidb, "V2dV2dIiIi", "nc", "vector")"#,
        "Multi-param vectors",
    ),
];

/// Output of a batch conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub output: String,
    pub stats: ConversionStats,
}

/// Header banner for the generated file.
pub fn header_lines(options: &ConvertOptions) -> Vec<String> {
    let file = options.output_file_name();
    vec![
        format!(
            "//===--- {} - {} Builtin function database -*- C++ -*-===//",
            file, options.target
        ),
        "//".to_string(),
        "// Part of the LLVM Project, under the Apache License v2.0 with LLVM Exceptions.".to_string(),
        "// See https://llvm.org/LICENSE.txt for license information.".to_string(),
        "// SPDX-License-Identifier: Apache-2.0 WITH LLVM-exception".to_string(),
        "//".to_string(),
        "//===----------------------------------------------------------------------===//".to_string(),
        String::new(),
        "include \"clang/Basic/BuiltinsBase.td\"".to_string(),
        String::new(),
    ]
}

/// Convert one extracted record to its rendered text.
///
/// Returns the text and whether decoding succeeded.
pub fn convert_record(record: &BuiltinRecord, options: &ConvertOptions) -> (String, bool) {
    match assemble(record, options) {
        Ok(def) => (def.to_string(), true),
        Err(diag) => {
            warn!("failed to convert {}: {}", record.name, diag.error);
            (diag.to_string(), false)
        }
    }
}

/// Convert the text of a `.def` file.
pub fn convert_source(source: &str, options: &ConvertOptions) -> Conversion {
    let mut lines = if options.emit_header {
        header_lines(options)
    } else {
        Vec::new()
    };
    let mut stats = ConversionStats::default();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if !line.starts_with("TARGET_BUILTIN") {
            continue;
        }

        match BuiltinRecord::parse_line(line) {
            Some(record) => {
                debug!("line {}: {}", idx + 1, record.name);
                let (text, ok) = convert_record(&record, options);
                if ok {
                    stats.record_converted();
                } else {
                    stats.record_error(Some(&record.name));
                }
                lines.push(text);
                lines.push(String::new());
            }
            None => {
                warn!("could not parse line {}: {}", idx + 1, line);
                lines.push(format!("// ERROR: Could not parse line {}: {}", idx + 1, line));
                stats.record_error(None);
            }
        }
    }

    info!(
        "converted {} of {} builtins ({} errors)",
        stats.converted,
        stats.total(),
        stats.errors
    );

    Conversion {
        output: lines.join("\n"),
        stats,
    }
}

/// Read a `.def` source file.
pub fn read_source(path: &Path) -> ConvertResult<String> {
    fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert `input` and write the result to `output`.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> ConvertResult<ConversionStats> {
    let source = read_source(input)?;
    let conversion = convert_source(&source, options);
    fs::write(output, &conversion.output).map_err(|source| ConvertError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    info!("wrote {}", output.display());
    Ok(conversion.stats)
}

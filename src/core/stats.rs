//! Conversion statistics.
//!
//! Tracks how many records of a batch made it through the decoders and how
//! many were replaced by diagnostics.

use std::fmt;

/// Statistics collected while converting a `.def` source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Records rendered as TableGen definitions.
    pub converted: usize,

    /// Records that failed to decode plus lines that could not be extracted.
    pub errors: usize,

    /// Name of the last record that failed to decode, if any.
    pub last_failure: Option<String>,
}

impl ConversionStats {
    /// Record a successfully rendered definition.
    pub fn record_converted(&mut self) {
        self.converted += 1;
    }

    /// Record a per-record failure.
    pub fn record_error(&mut self, name: Option<&str>) {
        self.errors += 1;
        if let Some(name) = name {
            self.last_failure = Some(name.to_string());
        }
    }

    /// Total number of `TARGET_BUILTIN` lines seen.
    pub fn total(&self) -> usize {
        self.converted + self.errors
    }

    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Successfully converted: {} functions", self.converted)?;
        if self.errors > 0 {
            writeln!(f, "Conversion errors: {}", self.errors)?;
        }
        if let Some(name) = &self.last_failure {
            writeln!(f, "Last failure: {}", name)?;
        }
        Ok(())
    }
}

//! `TARGET_BUILTIN(...)` record extraction.

use std::fmt;

/// One builtin as written in a `.def` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinRecord {
    pub name: String,
    /// Prototype encoding, e.g. `"iv*"`.
    pub prototype: String,
    /// Attribute flag encoding, e.g. `"nc"`.
    pub attributes: String,
    pub feature: String,
}

impl BuiltinRecord {
    pub fn new(
        name: impl Into<String>,
        prototype: impl Into<String>,
        attributes: impl Into<String>,
        feature: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prototype: prototype.into(),
            attributes: attributes.into(),
            feature: feature.into(),
        }
    }

    /// Extract a record from a `TARGET_BUILTIN(name, "proto", "attrs", "feature")`
    /// line. Surrounding whitespace and anything after the closing `)` are ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut scanner = LineScanner::new(line.trim());
        scanner.expect("TARGET_BUILTIN(")?;
        let name = scanner.read_until(',')?;
        if name.is_empty() {
            return None;
        }
        scanner.expect(",")?;
        let prototype = scanner.read_quoted()?;
        scanner.expect(",")?;
        let attributes = scanner.read_quoted()?;
        scanner.expect(",")?;
        let feature = scanner.read_quoted()?;
        scanner.expect(")")?;
        Some(Self::new(name, prototype, attributes, feature))
    }
}

impl fmt::Display for BuiltinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TARGET_BUILTIN({}, \"{}\", \"{}\", \"{}\")",
            self.name, self.prototype, self.attributes, self.feature
        )
    }
}

struct LineScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> LineScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn expect(&mut self, literal: &str) -> Option<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Some(())
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn read_until(&mut self, delim: char) -> Option<&'a str> {
        let len = self.rest().find(delim)?;
        let field = &self.rest()[..len];
        self.pos += len;
        Some(field)
    }

    fn read_quoted(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        self.expect("\"")?;
        let field = self.read_until('"')?;
        self.expect("\"")?;
        Some(field)
    }
}

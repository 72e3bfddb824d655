//! Decoded type tree.
//!
//! A [`ParsedType`] is a base type wrapped by size/sign modifiers,
//! qualifiers and indirection. Compound bases own their element type, so a
//! decoded prototype is a finite tree with no sharing. Text is produced only
//! by the `Display` impls:
//!
//! ```text
//! <modifiers> <qualifiers> <base><indirection>
//! unsigned    const        char  *
//! ```

use std::fmt;

use super::tables::Primitive;

/// Size or signedness prefix (`L`, `LL`, `LLL`, `U`, `S`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeModifier {
    Long,
    LongLong,
    Int128,
    Unsigned,
    Signed,
}

impl SizeModifier {
    pub const fn as_str(self) -> &'static str {
        match self {
            SizeModifier::Long => "long",
            SizeModifier::LongLong => "long long",
            SizeModifier::Int128 => "__int128",
            SizeModifier::Unsigned => "unsigned",
            SizeModifier::Signed => "signed",
        }
    }
}

/// Qualifier suffix (`C`, `D`, `R`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Const,
    Volatile,
    Restrict,
}

impl Qualifier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Qualifier::Const => "const",
            Qualifier::Volatile => "volatile",
            Qualifier::Restrict => "restrict",
        }
    }
}

/// Indirection suffix (`*`, `&`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indirection {
    Pointer,
    Reference,
}

impl Indirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Indirection::Pointer => "*",
            Indirection::Reference => "&",
        }
    }
}

/// Target-specific opaque type introduced by `Q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// `Qa`
    CountRegister,
    /// `Qb`
    BufferResource,
    /// Any other discriminator, kept for traceability.
    Other(char),
    /// `Q` at the very end of the encoding; renders as an empty name.
    Missing,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::CountRegister => f.write_str("svcount_t"),
            TargetType::BufferResource => f.write_str("__amdgpu_buffer_rsrc_t"),
            TargetType::Other(code) => write!(f, "TargetBuiltinType_{}", code),
            TargetType::Missing => Ok(()),
        }
    }
}

/// The core of a parsed type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseType {
    Primitive(Primitive),
    /// A base code missing from the table.
    Unknown(char),
    /// `V<n><elem>`
    FixedVector {
        count: Option<u32>,
        element: Box<ParsedType>,
    },
    /// `q<n><elem>`
    ScalableVector {
        count: Option<u32>,
        element: Box<ParsedType>,
    },
    /// `E<n><elem>`
    ExtVector {
        count: Option<u32>,
        element: Box<ParsedType>,
    },
    /// `X<elem>`
    Complex(Box<ParsedType>),
    Target(TargetType),
}

impl BaseType {
    /// Element type of a compound base.
    pub fn element(&self) -> Option<&ParsedType> {
        match self {
            BaseType::FixedVector { element, .. }
            | BaseType::ScalableVector { element, .. }
            | BaseType::ExtVector { element, .. }
            | BaseType::Complex(element) => Some(&**element),
            _ => None,
        }
    }

    /// Cardinality of a vector base. `None` for non-vectors and for vectors
    /// written without digits.
    pub fn count(&self) -> Option<u32> {
        match self {
            BaseType::FixedVector { count, .. }
            | BaseType::ScalableVector { count, .. }
            | BaseType::ExtVector { count, .. } => *count,
            _ => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        self.element().is_some()
    }
}

struct Count(Option<u32>);

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => Ok(()),
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseType::Primitive(prim) => f.write_str(prim.name()),
            BaseType::Unknown(code) => write!(f, "UnknownType_{}", code),
            BaseType::FixedVector { count, element } => {
                write!(f, "Vector<{}, {}>", Count(*count), element)
            }
            BaseType::ScalableVector { count, element } => {
                write!(f, "ScalableVector<{}, {}>", Count(*count), element)
            }
            BaseType::ExtVector { count, element } => {
                write!(f, "ExtVector<{}, {}>", Count(*count), element)
            }
            BaseType::Complex(element) => write!(f, "_Complex {}", element),
            BaseType::Target(target) => write!(f, "{}", target),
        }
    }
}

/// One decoded type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedType {
    /// Size/sign prefixes in encountered order.
    pub modifiers: Vec<SizeModifier>,
    /// Qualifiers in parse order; the first one parsed sits next to the base.
    pub qualifiers: Vec<Qualifier>,
    pub base: BaseType,
    /// Indirection in parse order; the first one parsed binds tightest.
    pub indirection: Vec<Indirection>,
}

impl ParsedType {
    pub fn new(base: BaseType) -> Self {
        Self {
            modifiers: Vec::new(),
            qualifiers: Vec::new(),
            base,
            indirection: Vec::new(),
        }
    }

    pub fn primitive(prim: Primitive) -> Self {
        Self::new(BaseType::Primitive(prim))
    }

    pub fn void() -> Self {
        Self::primitive(Primitive::Void)
    }

    pub fn with_modifier(mut self, modifier: SizeModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    pub fn with_indirection(mut self, indirection: Indirection) -> Self {
        self.indirection.push(indirection);
        self
    }

    pub fn is_void(&self) -> bool {
        self.base == BaseType::Primitive(Primitive::Void)
            && self.modifiers.is_empty()
            && self.qualifiers.is_empty()
            && self.indirection.is_empty()
    }
}

impl fmt::Display for ParsedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{} ", modifier.as_str())?;
        }
        for qualifier in self.qualifiers.iter().rev() {
            write!(f, "{} ", qualifier.as_str())?;
        }
        write!(f, "{}", self.base)?;
        for indirection in &self.indirection {
            f.write_str(indirection.as_str())?;
        }
        Ok(())
    }
}

/// A decoded prototype: return type, parameters and the variadic marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub ret: ParsedType,
    pub params: Vec<ParsedType>,
    pub variadic: bool,
}

impl Signature {
    /// Prototype text in `ret(a, b, ...)` form.
    pub fn prototype(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.ret)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        if self.variadic {
            if !self.params.is_empty() {
                f.write_str(", ")?;
            }
            f.write_str("...")?;
        }
        f.write_str(")")
    }
}

//! Static lookup tables for the prototype and attribute encodings.

use super::attributes::Attribute;

/// Primitive or named type selected by a single base code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Void,
    Bool,
    Char,
    Short,
    Int,
    Fp16,
    Float16,
    BFloat16,
    Float,
    Double,
    SizeT,
    WCharT,
    CFString,
    ObjcId,
    ObjcSel,
    ObjcSuper,
    VaList,
    VaListRef,
    PtrDiffT,
    File,
    JmpBuf,
    PidT,
}

impl Primitive {
    pub const ALL: [Primitive; 22] = [
        Primitive::Void,
        Primitive::Bool,
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Fp16,
        Primitive::Float16,
        Primitive::BFloat16,
        Primitive::Float,
        Primitive::Double,
        Primitive::SizeT,
        Primitive::WCharT,
        Primitive::CFString,
        Primitive::ObjcId,
        Primitive::ObjcSel,
        Primitive::ObjcSuper,
        Primitive::VaList,
        Primitive::VaListRef,
        Primitive::PtrDiffT,
        Primitive::File,
        Primitive::JmpBuf,
        Primitive::PidT,
    ];

    /// Look up a base code.
    pub const fn from_code(code: char) -> Option<Self> {
        use Primitive::*;
        Some(match code {
            'v' => Void,
            'b' => Bool,
            'c' => Char,
            's' => Short,
            'i' => Int,
            'h' => Fp16,
            'x' => Float16,
            'y' => BFloat16,
            'f' => Float,
            'd' => Double,
            'z' => SizeT,
            'w' => WCharT,
            'F' => CFString,
            'G' => ObjcId,
            'H' => ObjcSel,
            'M' => ObjcSuper,
            'a' => VaList,
            'A' => VaListRef,
            'Y' => PtrDiffT,
            'P' => File,
            'J' => JmpBuf,
            'p' => PidT,
            _ => return None,
        })
    }

    pub const fn code(self) -> char {
        use Primitive::*;
        match self {
            Void => 'v',
            Bool => 'b',
            Char => 'c',
            Short => 's',
            Int => 'i',
            Fp16 => 'h',
            Float16 => 'x',
            BFloat16 => 'y',
            Float => 'f',
            Double => 'd',
            SizeT => 'z',
            WCharT => 'w',
            CFString => 'F',
            ObjcId => 'G',
            ObjcSel => 'H',
            ObjcSuper => 'M',
            VaList => 'a',
            VaListRef => 'A',
            PtrDiffT => 'Y',
            File => 'P',
            JmpBuf => 'J',
            PidT => 'p',
        }
    }

    /// C spelling of the type as it appears in a prototype.
    pub const fn name(self) -> &'static str {
        use Primitive::*;
        match self {
            Void => "void",
            Bool => "bool",
            Char => "char",
            Short => "short",
            Int => "int",
            Fp16 => "__fp16",
            Float16 => "_Float16",
            BFloat16 => "__bf16",
            Float => "float",
            Double => "double",
            SizeT => "size_t",
            WCharT => "wchar_t",
            CFString => "CFString",
            ObjcId => "id",
            ObjcSel => "SEL",
            ObjcSuper => "struct objc_super",
            VaList => "__builtin_va_list",
            VaListRef => "__builtin_va_list&",
            PtrDiffT => "ptrdiff_t",
            File => "FILE*",
            JmpBuf => "jmp_buf",
            PidT => "pid_t",
        }
    }
}

/// Markers consumed in the prefix phase without any effect on the type.
pub const IGNORED_MARKERS: [char; 5] = ['Z', 'W', 'N', 'O', 'I'];

/// Look up a bare attribute flag.
///
/// The parameterized `p:N:` and `V:N:` forms are handled by the attribute
/// decoder itself.
pub const fn attribute_flag(flag: char) -> Option<Attribute> {
    use Attribute::*;
    Some(match flag {
        'n' => NoThrow,
        'r' => NoReturn,
        'U' => Pure,
        'c' => Const,
        't' => CustomTypeChecking,
        'T' => TypeGeneric,
        'F' => LibBuiltin,
        'f' => LibFunction,
        'h' => RequiresHeader,
        'i' => RuntimeLibFunction,
        'e' => ConstWithoutErrnoAndExceptions,
        'g' => ConstWithoutExceptions,
        'j' => ReturnsTwice,
        'u' => NoSideEffects,
        'z' => CxxNamespaceStd,
        'E' => ConstantEvaluated,
        'G' => CxxConsteval,
        _ => return None,
    })
}

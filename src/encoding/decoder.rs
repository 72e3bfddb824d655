//! Prototype encoding decoder.
//!
//! A prototype is a return type followed by zero or more parameter types,
//! optionally terminated by `.` for variadic functions. Each type is
//!
//! ```text
//! type     := prefix* core suffix*
//! prefix   := "LLL" | "LL" | "L" | "U" | "S" | "Z" | "W" | "N" | "O" | "I"
//! core     := "V" digits type | "q" digits type | "E" digits type
//!           | "X" type | "Q" char | base-code
//! suffix   := ("*" | "&") digit? | "C" | "D" | "R"
//! ```
//!
//! Unknown base codes decode to [`BaseType::Unknown`] instead of failing.

use log::trace;

use super::tables::{Primitive, IGNORED_MARKERS};
use super::types::{BaseType, Indirection, ParsedType, Qualifier, Signature, SizeModifier, TargetType};
use crate::core::{DecodeError, DecodeResult};

/// Deepest compound nesting accepted before decoding fails.
pub const MAX_NESTING: usize = 64;

/// Decode a whole prototype encoding.
///
/// An empty encoding yields a `void` return type and no parameters. The
/// first `.` after a complete type marks the prototype variadic; anything
/// after it is ignored.
pub fn decode_signature(encoding: &str) -> DecodeResult<Signature> {
    Decoder::new(encoding, 0).parse_signature()
}

/// Decode one type starting at byte offset `cursor`.
///
/// Returns the type and the offset just past it. The returned offset is
/// strictly greater than `cursor` whenever input remains. A cursor inside a
/// multi-byte character is moved forward to the next character boundary.
pub fn decode_one(encoding: &str, cursor: usize) -> DecodeResult<(ParsedType, usize)> {
    let mut cursor = cursor.min(encoding.len());
    while !encoding.is_char_boundary(cursor) {
        cursor += 1;
    }
    let mut decoder = Decoder::new(encoding, cursor);
    let ty = decoder.parse_type()?;
    Ok((ty, decoder.pos))
}

struct Decoder<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos, depth: 0 }
    }

    fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or("")
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn parse_signature(mut self) -> DecodeResult<Signature> {
        let ret = self.parse_type()?;
        let mut params = Vec::new();
        let mut variadic = false;

        while let Some(ch) = self.current_char() {
            if ch == '.' {
                variadic = true;
                if self.pos + 1 < self.text.len() {
                    trace!("ignoring '{}' after variadic marker", &self.text[self.pos + 1..]);
                }
                break;
            }
            params.push(self.parse_type()?);
        }

        Ok(Signature {
            ret,
            params,
            variadic,
        })
    }

    fn parse_type(&mut self) -> DecodeResult<ParsedType> {
        let start = self.pos;
        let modifiers = self.parse_modifiers();

        let Some(code) = self.current_char() else {
            // Running out of input before a core code reads as void.
            return Ok(ParsedType::void());
        };

        let mut ty = ParsedType::new(self.parse_core(code)?);
        ty.modifiers = modifiers;
        self.parse_suffixes(&mut ty);

        trace!("decoded '{}' at {}..{} as {}", &self.text[start..self.pos], start, self.pos, ty);
        Ok(ty)
    }

    fn parse_modifiers(&mut self) -> Vec<SizeModifier> {
        let mut modifiers = Vec::new();
        loop {
            let rest = self.rest();
            if rest.starts_with("LLL") {
                modifiers.push(SizeModifier::Int128);
                self.pos += 3;
            } else if rest.starts_with("LL") {
                modifiers.push(SizeModifier::LongLong);
                self.pos += 2;
            } else {
                match self.current_char() {
                    Some('L') => modifiers.push(SizeModifier::Long),
                    Some('U') => modifiers.push(SizeModifier::Unsigned),
                    Some('S') => modifiers.push(SizeModifier::Signed),
                    Some(ch) if IGNORED_MARKERS.contains(&ch) => {}
                    _ => break,
                }
                self.advance();
            }
        }
        modifiers
    }

    fn parse_core(&mut self, code: char) -> DecodeResult<BaseType> {
        self.advance();
        let base = match code {
            'V' => BaseType::FixedVector {
                count: self.read_count()?,
                element: self.parse_element()?,
            },
            'q' => BaseType::ScalableVector {
                count: self.read_count()?,
                element: self.parse_element()?,
            },
            'E' => BaseType::ExtVector {
                count: self.read_count()?,
                element: self.parse_element()?,
            },
            'X' => BaseType::Complex(self.parse_element()?),
            'Q' => BaseType::Target(self.parse_target()),
            other => match Primitive::from_code(other) {
                Some(prim) => BaseType::Primitive(prim),
                None => {
                    trace!("unknown base code {:?} at {}", other, self.pos - other.len_utf8());
                    BaseType::Unknown(other)
                }
            },
        };
        Ok(base)
    }

    fn read_count(&mut self) -> DecodeResult<Option<u32>> {
        let start = self.pos;
        while self.current_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
        let digits = &self.text[start..self.pos];
        if digits.is_empty() {
            return Ok(None);
        }
        digits
            .parse::<u32>()
            .map(Some)
            .map_err(|_| DecodeError::CountOverflow {
                digits: digits.to_string(),
                position: start,
            })
    }

    fn parse_element(&mut self) -> DecodeResult<Box<ParsedType>> {
        if self.depth >= MAX_NESTING {
            return Err(DecodeError::NestingTooDeep {
                position: self.pos,
                limit: MAX_NESTING,
            });
        }
        self.depth += 1;
        let element = self.parse_type();
        self.depth -= 1;
        element.map(Box::new)
    }

    fn parse_target(&mut self) -> TargetType {
        let Some(code) = self.current_char() else {
            trace!("'Q' without discriminator at end of input");
            return TargetType::Missing;
        };
        self.advance();
        match code {
            'a' => TargetType::CountRegister,
            'b' => TargetType::BufferResource,
            other => TargetType::Other(other),
        }
    }

    fn parse_suffixes(&mut self, ty: &mut ParsedType) {
        while let Some(ch) = self.current_char() {
            match ch {
                '*' | '&' => {
                    self.advance();
                    ty.indirection.push(if ch == '*' {
                        Indirection::Pointer
                    } else {
                        Indirection::Reference
                    });
                    // Address-space digit; carries no meaning here.
                    if self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                        self.advance();
                    }
                }
                'C' => {
                    self.advance();
                    ty.qualifiers.push(Qualifier::Const);
                }
                'D' => {
                    self.advance();
                    ty.qualifiers.push(Qualifier::Volatile);
                }
                'R' => {
                    self.advance();
                    ty.qualifiers.push(Qualifier::Restrict);
                }
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(encoding: &str) -> String {
        decode_signature(encoding).unwrap().prototype()
    }

    #[test]
    fn test_empty_encoding_is_void() {
        let sig = decode_signature("").unwrap();
        assert!(sig.ret.is_void());
        assert!(sig.params.is_empty());
        assert!(!sig.variadic);
    }

    #[test]
    fn test_single_base_codes() {
        for prim in Primitive::ALL {
            let sig = decode_signature(&prim.code().to_string()).unwrap();
            assert_eq!(sig.ret.base, BaseType::Primitive(prim));
            assert_eq!(sig.ret.to_string(), prim.name());
            assert!(sig.params.is_empty());
        }
    }

    #[test]
    fn test_size_prefixes() {
        assert_eq!(render("LLLi"), "__int128 int()");
        assert_eq!(render("LLi"), "long long int()");
        assert_eq!(render("ULi"), "unsigned long int()");
        assert_eq!(render("ULLi"), "unsigned long long int()");
        assert_eq!(render("Sc"), "signed char()");
        assert_eq!(render("LLLUi"), "__int128 unsigned int()");
    }

    #[test]
    fn test_ignored_markers() {
        let sig = decode_signature("ZiWiNiOiIi").unwrap();
        assert_eq!(sig.ret.to_string(), "int");
        assert_eq!(sig.params.len(), 4);
        assert!(sig.params.iter().all(|p| p.to_string() == "int"));
    }

    #[test]
    fn test_prefix_before_compound_stays_on_its_level() {
        let sig = decode_signature("V16Uc").unwrap();
        assert!(sig.ret.modifiers.is_empty());
        let elem = sig.ret.base.element().unwrap();
        assert_eq!(elem.modifiers, vec![SizeModifier::Unsigned]);
        assert_eq!(sig.ret.to_string(), "Vector<16, unsigned char>");

        let sig = decode_signature("UV16Uc").unwrap();
        assert_eq!(sig.ret.modifiers, vec![SizeModifier::Unsigned]);
        assert_eq!(
            sig.ret.base.element().unwrap().to_string(),
            "unsigned char"
        );
    }

    #[test]
    fn test_qualifier_and_indirection_order() {
        let (before, _) = decode_one("iC*", 0).unwrap();
        let (after, _) = decode_one("i*C", 0).unwrap();
        assert_eq!(before.to_string(), "const int*");
        assert_eq!(after.to_string(), "const int*");
        assert_eq!(before, after);

        assert_eq!(render("vCD*"), "volatile const void*()");
        assert_eq!(render("cR*&"), "restrict char*&()");
    }

    #[test]
    fn test_indirection_digit_is_discarded() {
        let (ty, cursor) = decode_one("v*1i", 0).unwrap();
        assert_eq!(ty.to_string(), "void*");
        assert_eq!(cursor, 3);
        assert_eq!(render("iv*3&1"), "int(void*&)");
    }

    #[test]
    fn test_variadic_stops_at_first_dot() {
        let sig = decode_signature("ii.xyz.f").unwrap();
        assert_eq!(sig.params.len(), 1);
        assert!(sig.variadic);
        assert_eq!(sig.prototype(), "int(int, ...)");

        let sig = decode_signature("i.").unwrap();
        assert!(sig.params.is_empty());
        assert_eq!(sig.prototype(), "int(...)");
    }

    #[test]
    fn test_unknown_code_degrades() {
        let sig = decode_signature("i@f").unwrap();
        assert_eq!(sig.params.len(), 2);
        assert_eq!(sig.params[0].base, BaseType::Unknown('@'));
        assert_eq!(sig.params[0].to_string(), "UnknownType_@");
        assert_eq!(sig.params[1].to_string(), "float");
    }

    #[test]
    fn test_compound_constructors() {
        assert_eq!(render("q8i"), "ScalableVector<8, int>()");
        assert_eq!(render("E4f"), "ExtVector<4, float>()");
        assert_eq!(render("Xd"), "_Complex double()");
        assert_eq!(render("XV2d"), "_Complex Vector<2, double>()");
        assert_eq!(render("V4V2Si"), "Vector<4, Vector<2, signed int>>()");
        assert_eq!(render("Vi"), "Vector<, int>()");
    }

    #[test]
    fn test_compound_element_with_suffixes() {
        // Suffixes after the element bind to the element.
        let sig = decode_signature("V2dC*").unwrap();
        assert!(sig.ret.indirection.is_empty());
        assert_eq!(sig.ret.to_string(), "Vector<2, const double*>");
    }

    #[test]
    fn test_target_types() {
        assert_eq!(render("vQa"), "void(svcount_t)");
        assert_eq!(render("Qb*"), "__amdgpu_buffer_rsrc_t*()");
        assert_eq!(render("Qz"), "TargetBuiltinType_z()");

        let sig = decode_signature("vQ").unwrap();
        assert_eq!(sig.params, vec![ParsedType::new(BaseType::Target(TargetType::Missing))]);
        assert_eq!(sig.prototype(), "void()");
    }

    #[test]
    fn test_count_overflow_is_an_error() {
        let err = decode_signature("V99999999999i").unwrap_err();
        assert_eq!(
            err,
            DecodeError::CountOverflow {
                digits: "99999999999".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}i", "X".repeat(MAX_NESTING));
        assert!(decode_signature(&deep).is_ok());

        let too_deep = format!("{}i", "X".repeat(MAX_NESTING + 1));
        assert!(matches!(
            decode_signature(&too_deep),
            Err(DecodeError::NestingTooDeep { limit: MAX_NESTING, .. })
        ));
    }

    #[test]
    fn test_truncated_inputs_default_to_void() {
        assert_eq!(render("U"), "void()");
        assert_eq!(render("V16"), "Vector<16, void>()");
    }

    #[test]
    fn test_cursor_always_advances() {
        let encodings = [
            "V16UcV16UcV16UcV16Uc",
            "UivC*Ii",
            "i@f",
            "LLLUi*1&2CDR",
            "q4Xd.E2Qa",
            "Zé9.*",
        ];
        for encoding in encodings {
            let mut cursor = 0;
            while cursor < encoding.len() {
                let (_, next) = decode_one(encoding, cursor).unwrap();
                assert!(next > cursor, "stalled at {cursor} in {encoding:?}");
                cursor = next;
            }
        }
    }

    #[test]
    fn test_cursor_inside_multibyte_char_moves_forward() {
        // 'é' spans bytes 0..2; offset 1 lands on the following 'i'.
        let (ty, next) = decode_one("éi", 1).unwrap();
        assert_eq!(ty.to_string(), "int");
        assert_eq!(next, 3);

        let (ty, next) = decode_one("é", 1).unwrap();
        assert!(ty.is_void());
        assert_eq!(next, 2);

        let (_, next) = decode_one("i", 7).unwrap();
        assert_eq!(next, 1);
    }

    #[test]
    fn test_reference_prototypes() {
        assert_eq!(render("iv*"), "int(void*)");
        assert_eq!(render("UivC*Ii"), "unsigned int(const void*, int)");
        assert_eq!(
            render("V2dV2dIiIi"),
            "Vector<2, double>(Vector<2, double>, int, int)"
        );
    }
}

//! Integration tests for the prototype and attribute decoders.

use builtins_td::encoding::{
    decode_attributes, decode_one, decode_signature, Attribute, BaseType, Indirection, ParsedType, Primitive,
    Qualifier, SizeModifier, TargetType,
};

fn unsigned_char_vector(count: u32) -> ParsedType {
    ParsedType::new(BaseType::FixedVector {
        count: Some(count),
        element: Box::new(ParsedType::primitive(Primitive::Char).with_modifier(SizeModifier::Unsigned)),
    })
}

#[test]
fn test_vperm_signature() {
    let sig = decode_signature("V16UcV16UcV16UcV16Uc").unwrap();
    assert_eq!(sig.ret, unsigned_char_vector(16));
    assert_eq!(sig.params.len(), 3);
    for param in &sig.params {
        assert_eq!(*param, unsigned_char_vector(16));
    }
    assert!(!sig.variadic);
    assert_eq!(
        sig.prototype(),
        "Vector<16, unsigned char>(Vector<16, unsigned char>, Vector<16, unsigned char>, Vector<16, unsigned char>)"
    );
}

#[test]
fn test_tbegin_signature() {
    let sig = decode_signature("iv*").unwrap();
    assert_eq!(sig.ret, ParsedType::primitive(Primitive::Int));
    assert_eq!(
        sig.params,
        vec![ParsedType::primitive(Primitive::Void).with_indirection(Indirection::Pointer)]
    );
    assert_eq!(decode_attributes("j").unwrap(), vec![Attribute::ReturnsTwice]);
}

#[test]
fn test_lcbb_signature() {
    let sig = decode_signature("UivC*Ii").unwrap();
    assert_eq!(sig.ret.modifiers, vec![SizeModifier::Unsigned]);
    assert_eq!(sig.params[0].qualifiers, vec![Qualifier::Const]);
    assert_eq!(sig.params[0].indirection, vec![Indirection::Pointer]);
    assert_eq!(sig.params[1], ParsedType::primitive(Primitive::Int));
    assert_eq!(sig.prototype(), "unsigned int(const void*, int)");
}

#[test]
fn test_long_and_wide_integer_prototypes() {
    let sig = decode_signature("ULLiULLiULLi").unwrap();
    assert_eq!(sig.prototype(), "unsigned long long int(unsigned long long int, unsigned long long int)");

    let sig = decode_signature("V1LLLUiV1LLLUi").unwrap();
    assert_eq!(sig.prototype(), "Vector<1, __int128 unsigned int>(Vector<1, __int128 unsigned int>)");
}

#[test]
fn test_nested_compounds_own_their_elements() {
    let sig = decode_signature("Xq4E2V8Sc").unwrap();
    let complex = sig.ret.base.element().unwrap();
    assert_eq!(complex.base.count(), Some(4));
    let ext = complex.base.element().unwrap();
    assert_eq!(ext.base.count(), Some(2));
    let vector = ext.base.element().unwrap();
    assert_eq!(vector.base.count(), Some(8));
    assert_eq!(vector.base.element().unwrap().to_string(), "signed char");
    assert_eq!(
        sig.ret.to_string(),
        "_Complex ScalableVector<4, ExtVector<2, Vector<8, signed char>>>"
    );
}

#[test]
fn test_target_and_unknown_codes_do_not_fail() {
    let sig = decode_signature("vQaQbQ7K").unwrap();
    let bases: Vec<&BaseType> = sig.params.iter().map(|p| &p.base).collect();
    assert_eq!(
        bases,
        vec![
            &BaseType::Target(TargetType::CountRegister),
            &BaseType::Target(TargetType::BufferResource),
            &BaseType::Target(TargetType::Other('7')),
            &BaseType::Unknown('K'),
        ]
    );
}

#[test]
fn test_variadic_printf_like() {
    let sig = decode_signature("icC*R.").unwrap();
    assert!(sig.variadic);
    assert_eq!(sig.prototype(), "int(restrict const char*, ...)");
    assert_eq!(
        decode_attributes("fp:0:").unwrap(),
        vec![Attribute::LibFunction, Attribute::PrintfFormat(0)]
    );
}

#[test]
fn test_decode_one_walks_parameters() {
    let encoding = "dV2dC*&";
    let (ret, cursor) = decode_one(encoding, 0).unwrap();
    assert_eq!(ret.to_string(), "double");
    assert_eq!(cursor, 1);

    let (param, cursor) = decode_one(encoding, cursor).unwrap();
    assert_eq!(param.to_string(), "Vector<2, const double*&>");
    assert_eq!(cursor, encoding.len());

    // Past the end reads as void without moving.
    let (tail, end) = decode_one(encoding, cursor).unwrap();
    assert!(tail.is_void());
    assert_eq!(end, cursor);
}

#[test]
fn test_every_known_attribute_flag() {
    let attrs = decode_attributes("nrUctTFfhiegjuzEG").unwrap();
    let names: Vec<&str> = attrs.iter().map(|a| a.name()).collect();
    assert_eq!(
        names,
        vec![
            "NoThrow",
            "NoReturn",
            "Pure",
            "Const",
            "CustomTypeChecking",
            "TypeGeneric",
            "LibBuiltin",
            "LibFunction",
            "RequiresHeader",
            "RuntimeLibFunction",
            "ConstWithoutErrnoAndExceptions",
            "ConstWithoutExceptions",
            "ReturnsTwice",
            "NoSideEffects",
            "CXXNamespaceStd",
            "ConstantEvaluated",
            "CXXConsteval",
        ]
    );
}

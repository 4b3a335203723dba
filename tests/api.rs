//! End-to-end checks of the public API.

#![cfg(all(feature = "global_gen", feature = "md5", feature = "sha1"))]

use rfc4122::format::Style;
use rfc4122::{
    digest, new_from_hex, new_random, parse, uuid3, uuid4, uuid5, Fields, Formatter, Uuid,
    UuidValue, Variant, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500,
};

const FIXTURE: [u8; 16] = [
    0xAA, 0xCF, 0xEE, 0x12, 0xD4, 0x00, 0x27, 0x23, 0x00, 0xD3, 0x23, 0x12, 0x4A, 0x11, 0x89, 0xFF,
];

const NAMESPACES: [Uuid; 4] = [NAMESPACE_DNS, NAMESPACE_URL, NAMESPACE_OID, NAMESPACE_X500];

/// Reads version from raw fixture
#[test]
fn reads_version_from_raw_fixture() {
    let e = new_random(Some(FIXTURE));
    assert_eq!(e.version(), 2);
    assert_eq!(e.variant(), Variant::Ncs);
    assert!(parse(&e.encode()).is_ok());

    let f = Fields::from(e);
    assert_eq!(f.version(), 2);
    assert_eq!(f.variant(), Variant::Ncs);
}

/// Reads version and variant from hex constructor
#[test]
fn reads_version_and_variant_from_hex_constructor() {
    let e = new_from_hex("f3593cffee9240df408687825b523f13").unwrap();
    assert_eq!(e.version(), 4);
    assert_eq!(e.variant(), Variant::Ncs);
}

/// Round-trips namespace constants through every style
#[test]
fn round_trips_namespace_constants_through_every_style() {
    let lenient = [
        Style::Hyphenated,
        Style::Simple,
        Style::Braced,
        Style::BracedSimple,
        Style::Parenthesized,
        Style::Urn,
    ];
    for ns in NAMESPACES {
        assert_eq!(parse(&ns.to_string()), Ok(ns));
        for style in lenient {
            let text = Formatter::new(style).format(&ns);
            assert_eq!(parse(&text), Ok(ns), "{}", text);
            assert_eq!(ns.to_string_with(style), &text as &str);
        }
    }
}

/// Unmarshals both forms from each other
#[test]
fn unmarshals_both_forms_from_each_other() {
    let mut u = Uuid::NIL;
    let mut f = Fields::default();
    for e in NAMESPACES.into_iter().chain([Uuid::from(FIXTURE), Uuid::MAX]) {
        u.unmarshal(&e.bytes()).unwrap();
        f.unmarshal(&u.bytes()).unwrap();
        assert_eq!(u, e);
        assert_eq!(Uuid::from(f), e);
    }

    let err = u.unmarshal(&FIXTURE[..8]).unwrap_err();
    assert_eq!(err.input_len(), 8);
    assert_eq!(err.to_string(), "invalid length: expected 16 bytes, found 8");
}

/// Derives deterministic name-based UUIDs
#[test]
fn derives_deterministic_name_based_uuids() {
    use rfc4122::generator::with_digest::{Md5Digest, Sha1Digest};

    let x = digest(&NAMESPACE_DNS, "golang.org", Md5Digest::default());
    assert_eq!(x, digest(&NAMESPACE_DNS, "golang.org", Md5Digest::default()));
    assert_eq!(x, uuid3(&NAMESPACE_DNS, "golang.org"));
    assert_eq!(x.version(), 3);
    assert_eq!(x.variant(), Variant::Rfc4122);

    let y = digest(&NAMESPACE_DNS, b"golang.org", Sha1Digest::default());
    assert_eq!(y, uuid5(&NAMESPACE_DNS, "golang.org".to_owned()));
    assert_eq!(y.version(), 5);
    assert_eq!(y.variant(), Variant::Rfc4122);
}

/// Generates distinct conforming random UUIDs
#[test]
fn generates_distinct_conforming_random_uuids() {
    let x = uuid4();
    let y = uuid4();
    assert_ne!(x, y);
    for e in [x, y] {
        assert_eq!(e.version(), 4);
        assert_eq!(e.variant(), Variant::Rfc4122);
    }
}

/// Reports parse failures as errors
#[test]
fn reports_parse_failures_as_errors() {
    for e in [
        "foo",
        "6ba7b814-9dad-11d1-80b4-",
        "6ba7b814--9dad-11d1-80b4--00c04fd430c8",
    ] {
        let err = parse(e).unwrap_err();
        assert!(err.to_string().starts_with("invalid string representation"));
        assert_eq!(e.parse::<Uuid>(), Err(err));
    }
}

#[cfg(not(feature = "std"))]
use core as std;

use fstr::FStr;
use std::{fmt, str};

use crate::format::{self, Formatter, Style};
use crate::{parser, ParseError, UuidValue};

/// Represents a Universally Unique IDentifier as a 16-byte big-endian array.
///
/// Version and variant accessors come from the [`UuidValue`] trait.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns true if every bit is zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// Unlike [`Display`](fmt::Display), this method ignores the process-wide default style.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        buffer.copy_from_slice(Formatter::new(Style::Hyphenated).format(self).as_bytes());
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl UuidValue for Uuid {
    fn bytes(&self) -> [u8; 16] {
        self.0
    }

    fn set_bytes(&mut self, bytes: [u8; 16]) {
        self.0 = bytes;
    }
}

impl fmt::Display for Uuid {
    /// Returns the string representation in the process-wide default style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format(self, None))
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from any representation accepted by [`parse()`](crate::parse).
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        parser::parse(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        parser::parse(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Name space ID for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_DNS: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Name space ID for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_URL: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Name space ID for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_OID: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Name space ID for X.500 DNs in DER or text format (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_X500: Uuid = Uuid([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(u128, &'static str)] {
        &[
            (0, "00000000-0000-0000-0000-000000000000"),
            (u128::MAX, "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            (
                0x6ba7b810_9dad_11d1_80b4_00c04fd430c8,
                "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            ),
            (
                0xaacfee12_d400_2723_00d3_23124a1189ff,
                "aacfee12-d400-2723-00d3-23124a1189ff",
            ),
            (
                0x017f22e2_79b0_7cc3_98c4_dc0c0c07398f,
                "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for &(n, text) in prepare_cases() {
            let e = Uuid::from(n);
            assert_eq!(Ok(e), text.parse());
            assert_eq!(Ok(e), text.to_uppercase().parse());
            assert_eq!(&e.encode() as &str, text);
            #[cfg(feature = "std")]
            assert_eq!(&e.to_string(), text);
            #[cfg(feature = "std")]
            assert_eq!(&e.encode().to_string(), text);
            #[cfg(all(feature = "std", feature = "uuid"))]
            assert_eq!(&uuid::Uuid::from(e).to_string(), text);
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
        assert!(Uuid::NIL.is_nil());
        assert!(!Uuid::MAX.is_nil());
        assert!(Uuid::default().is_nil());
    }

    /// Encodes namespace constants per RFC 4122
    #[test]
    fn encodes_namespace_constants_per_rfc_4122() {
        let cases = [
            (NAMESPACE_DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];
        for (ns, text) in cases {
            assert_eq!(&ns.encode() as &str, text);
            assert_eq!(text.parse(), Ok(ns));
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for &(n, _) in prepare_cases() {
            let e = Uuid::from(n);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_bytes(*e.as_bytes()), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            assert_eq!(Uuid::try_from(&*e.encode()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
        }
    }

    /// Unmarshals only 16-byte input
    #[test]
    fn unmarshals_only_16_byte_input() {
        use crate::UuidValue;

        let mut e = NAMESPACE_OID;
        assert!(e.unmarshal(&[0u8; 15]).is_err());
        assert!(e.unmarshal(&[0u8; 17]).is_err());
        assert_eq!(e, NAMESPACE_OID);

        e.unmarshal(NAMESPACE_X500.as_ref()).unwrap();
        assert_eq!(e, NAMESPACE_X500);

        let mut f = Uuid::NIL;
        f.unmarshal(&e.bytes()).unwrap();
        assert_eq!(f, e);
    }
}

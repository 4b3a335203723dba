//! The capability set shared by every UUID representation.

use crate::codec::{self, Variant};
use crate::format::{Formatted, Formatter, Style};
use crate::{LengthError, Uuid};

/// Represents any value that holds the 16 bytes of a UUID.
///
/// Implementors provide conversion to and from the canonical byte array; the version and variant
/// accessors are derived from it, so every representation enforces the same bit layout.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{Fields, UuidValue, Variant};
///
/// let mut f = Fields::default();
/// f.unmarshal(&[0xff; 16])?;
/// f.set_version(3);
/// f.set_variant(Variant::Rfc4122);
/// assert_eq!(f.time_hi_and_version, 0x3fff);
/// assert_eq!(f.clock_seq_hi_and_variant, 0xbf);
/// # Ok::<(), rfc4122::LengthError>(())
/// ```
pub trait UuidValue {
    /// Returns the 16 bytes in big-endian field order.
    fn bytes(&self) -> [u8; 16];

    /// Replaces the whole value with `bytes`.
    fn set_bytes(&mut self, bytes: [u8; 16]);

    /// Replaces the whole value with `data`, which must be exactly 16 bytes long.
    ///
    /// The value is left untouched on error.
    fn unmarshal(&mut self, data: &[u8]) -> Result<(), LengthError> {
        let bytes = <[u8; 16]>::try_from(data).map_err(|_| LengthError::new(data.len()))?;
        self.set_bytes(bytes);
        Ok(())
    }

    /// Returns the 4-bit version number.
    fn version(&self) -> u8 {
        codec::version(&self.bytes())
    }

    /// Stores the low four bits of `version` as the version number.
    fn set_version(&mut self, version: u8) {
        let mut bytes = self.bytes();
        codec::set_version(&mut bytes, version);
        self.set_bytes(bytes);
    }

    /// Returns the variant class.
    fn variant(&self) -> Variant {
        codec::variant(&self.bytes())
    }

    /// Overwrites the variant bits with the pattern of `variant`.
    fn set_variant(&mut self, variant: Variant) {
        let mut bytes = self.bytes();
        codec::set_variant(&mut bytes, variant);
        self.set_bytes(bytes);
    }

    /// Encodes the value in `style`.
    fn format(&self, style: Style) -> Formatted {
        Formatter::new(style).format(&Uuid::from(self.bytes()))
    }

    /// Returns the value as an owned string in `style`.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    fn to_string_with(&self, style: Style) -> String {
        String::from(&*self.format(style))
    }
}

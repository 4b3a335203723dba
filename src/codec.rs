//! Bit-level access to the version and variant fields of a 16-byte UUID buffer.
//!
//! ```text
//!  byte 6           byte 8
//! +-+-+-+-+-+-+-+-+ +-+-+-+-+-+-+-+-+
//! |  ver  |       | |var|           |
//! +-+-+-+-+-+-+-+-+ +-+-+-+-+-+-+-+-+
//! ```
//!
//! The functions here never validate: any 4-bit version may be stored and every byte value
//! classifies as exactly one [`Variant`].

/// Index of the `time_hi_and_version` byte that carries the version nibble.
pub const VERSION_INDEX: usize = 6;

/// Index of the `clock_seq_hi_and_variant` byte that carries the variant bits.
pub const VARIANT_INDEX: usize = 8;

/// The variant classes reserved by RFC 4122, keyed by the leading bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility.
    Ncs,

    /// `10xx`: the layout specified by RFC 4122.
    Rfc4122,

    /// `110x`: reserved for Microsoft backward compatibility.
    Microsoft,

    /// `111x`: reserved for future definition.
    Future,
}

/// Returns the 4-bit version stored in the high nibble of byte 6.
pub const fn version(bytes: &[u8; 16]) -> u8 {
    bytes[VERSION_INDEX] >> 4
}

/// Stores `version` in the high nibble of byte 6, keeping the low nibble.
///
/// Only the low four bits of `version` are used.
pub fn set_version(bytes: &mut [u8; 16], version: u8) {
    let b = &mut bytes[VERSION_INDEX];
    *b = (*b & 0x0f) | (version << 4);
}

/// Classifies the leading bits of byte 8.
pub const fn variant(bytes: &[u8; 16]) -> Variant {
    match bytes[VARIANT_INDEX] >> 4 {
        0x0..=0x7 => Variant::Ncs,
        0x8..=0xb => Variant::Rfc4122,
        0xc..=0xd => Variant::Microsoft,
        _ => Variant::Future,
    }
}

/// Overwrites the leading bits of byte 8 owned by `variant`, keeping the rest.
pub fn set_variant(bytes: &mut [u8; 16], variant: Variant) {
    let b = &mut bytes[VARIANT_INDEX];
    *b = match variant {
        Variant::Ncs => *b & 0x7f,
        Variant::Rfc4122 => (*b & 0x3f) | 0x80,
        Variant::Microsoft => (*b & 0x1f) | 0xc0,
        Variant::Future => (*b & 0x1f) | 0xe0,
    };
}

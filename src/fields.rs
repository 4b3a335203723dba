//! Structured representation with the named fields of RFC 4122.

use crate::{Uuid, UuidValue};

/// Represents a UUID as the six named fields of RFC 4122.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                          time_low                             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |       time_mid                |         time_hi_and_version   |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |clk_seq_hi_res |  clk_seq_low  |         node (0-1)            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         node (2-5)                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// All multi-byte fields are big-endian in the byte form. Conversions to and from [`Uuid`] are
/// lossless.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Fields {
    pub time_low: u32,
    pub time_mid: u16,
    pub time_hi_and_version: u16,
    pub clock_seq_hi_and_variant: u8,
    pub clock_seq_low: u8,
    pub node: [u8; 6],
}

impl Fields {
    /// Decomposes a 16-byte array into fields.
    pub const fn from_bytes(b: [u8; 16]) -> Self {
        Self {
            time_low: u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
            time_mid: u16::from_be_bytes([b[4], b[5]]),
            time_hi_and_version: u16::from_be_bytes([b[6], b[7]]),
            clock_seq_hi_and_variant: b[8],
            clock_seq_low: b[9],
            node: [b[10], b[11], b[12], b[13], b[14], b[15]],
        }
    }

    /// Recomposes the fields into a 16-byte array.
    pub const fn to_bytes(&self) -> [u8; 16] {
        let tl = self.time_low.to_be_bytes();
        let tm = self.time_mid.to_be_bytes();
        let th = self.time_hi_and_version.to_be_bytes();
        let n = self.node;
        [
            tl[0],
            tl[1],
            tl[2],
            tl[3],
            tm[0],
            tm[1],
            th[0],
            th[1],
            self.clock_seq_hi_and_variant,
            self.clock_seq_low,
            n[0],
            n[1],
            n[2],
            n[3],
            n[4],
            n[5],
        ]
    }
}

impl UuidValue for Fields {
    fn bytes(&self) -> [u8; 16] {
        self.to_bytes()
    }

    fn set_bytes(&mut self, bytes: [u8; 16]) {
        *self = Self::from_bytes(bytes);
    }
}

impl From<Uuid> for Fields {
    fn from(src: Uuid) -> Self {
        Self::from_bytes(src.into())
    }
}

impl From<Fields> for Uuid {
    fn from(src: Fields) -> Self {
        Self::from(src.to_bytes())
    }
}

impl From<[u8; 16]> for Fields {
    fn from(src: [u8; 16]) -> Self {
        Self::from_bytes(src)
    }
}

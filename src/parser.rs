//! Lenient decoding of textual UUID representations.
//!
//! [`parse()`] accepts the hexadecimal payload in five groups of 8, 4, 4, 4 and 12 digits, where
//! each of the four group boundaries may carry at most one hyphen, optionally wrapped in one of
//! the following delimiters:
//!
//! | Input                                           | Accepted |
//! | ----------------------------------------------- | -------- |
//! | `6ba7b810-9dad-11d1-80b4-00c04fd430c8`          | yes      |
//! | `6ba7b8109dad11d180b400c04fd430c8`              | yes      |
//! | `6ba7b810-9dad11d1-80b4-00c04fd430c8`           | yes      |
//! | `{6ba7b810-9dad-11d1-80b4-00c04fd430c8}`        | yes      |
//! | `{6ba7b810-9dad-11d1-80b4-00c04fd430c8`         | yes      |
//! | `6ba7b810-9dad-11d1-80b4-00c04fd430c8}`         | yes      |
//! | `(6ba7b810-9dad-11d1-80b4-00c04fd430c8)`        | yes      |
//! | `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8` | yes      |
//! | `{6ba7b810-9dad-11d1-80b4-00c04fd430c8)`        | no       |
//! | `6ba7b810--9dad-11d1-80b4-00c04fd430c8`         | no       |
//! | `6ba7b81-09dad-11d1-80b4-00c04fd430c8`          | no       |
//!
//! The version and variant bits are returned as found.

use crate::error::{ErrorKind, ParseError};
use crate::Uuid;

const URN_PREFIX: &[u8] = b"urn:uuid:";

/// Digit counts after which a hyphen may appear.
const GROUP_ENDS: [usize; 4] = [8, 12, 16, 20];

/// Parses any of the accepted textual representations into a [`Uuid`].
///
/// # Examples
///
/// ```rust
/// let x = rfc4122::parse("{6ba7b814-9dad-11d1-80b4-00c04fd430c8}")?;
/// let y = rfc4122::parse("urn:uuid:6ba7b8149dad11d180b400c04fd430c8")?;
/// assert_eq!(x, y);
/// assert!(rfc4122::parse("6ba7b814-9dad-11d1-80b4-").is_err());
/// # Ok::<(), rfc4122::ParseError>(())
/// ```
pub fn parse(src: &str) -> Result<Uuid, ParseError> {
    let (start, end) = strip_delimiters(src.as_bytes())?;
    decode(src, start, end, true)
}

/// Decodes exactly 32 hexadecimal digits without any delimiters or hyphens.
///
/// ```rust
/// use rfc4122::{UuidValue, Variant};
///
/// let x = rfc4122::new_from_hex("f3593cffee9240df408687825b523f13")?;
/// assert_eq!(x.version(), 4);
/// assert_eq!(x.variant(), Variant::Ncs);
/// assert!(rfc4122::new_from_hex("f3593cff-ee92-40df-4086-87825b523f13").is_err());
/// # Ok::<(), rfc4122::ParseError>(())
/// ```
pub fn new_from_hex(src: &str) -> Result<Uuid, ParseError> {
    decode(src, 0, src.len(), false)
}

/// Returns the byte range of `src` left after removing the enclosing delimiters or URN prefix.
fn strip_delimiters(src: &[u8]) -> Result<(usize, usize), ParseError> {
    const ERR: ParseError = ParseError::new(ErrorKind::Delimiter);

    if src.len() >= URN_PREFIX.len() && src[..URN_PREFIX.len()].eq_ignore_ascii_case(URN_PREFIX) {
        return Ok((URN_PREFIX.len(), src.len()));
    }

    let end = src.len();
    match (src.first(), src.last()) {
        (Some(b'('), Some(b')')) if end > 1 => Ok((1, end - 1)),
        (Some(b'('), _) | (_, Some(b')')) => Err(ERR),
        (Some(b'{'), Some(b'}')) if end > 1 => Ok((1, end - 1)),
        (Some(b'{'), _) => Ok((1, end)),
        (_, Some(b'}')) => Ok((0, end - 1)),
        _ => Ok((0, end)),
    }
}

/// Decodes the hexadecimal payload in `src[start..end]`.
fn decode(src: &str, start: usize, end: usize, allow_hyphens: bool) -> Result<Uuid, ParseError> {
    let mut dst = [0u8; 16];
    let mut digits = 0;
    let mut hyphen_ok = false;

    for (i, &c) in src.as_bytes()[start..end].iter().enumerate() {
        let index = start + i;
        if digits == 32 {
            return Err(ParseError::new(ErrorKind::Trailing { index }));
        }

        if c == b'-' {
            if !(allow_hyphens && hyphen_ok) {
                return Err(ParseError::new(ErrorKind::Hyphen { index }));
            }
            hyphen_ok = false;
            continue;
        }

        let Some(n) = (c as char).to_digit(16) else {
            // everything before `index` is ASCII, so it lies on a char boundary
            let found = src[index..].chars().next().unwrap_or_default();
            return Err(ParseError::new(ErrorKind::Character { found, index }));
        };
        let shift = if digits % 2 == 0 { 4 } else { 0 };
        dst[digits / 2] |= (n as u8) << shift;
        digits += 1;
        hyphen_ok = GROUP_ENDS.contains(&digits);
    }

    if digits == 32 {
        Ok(Uuid::from(dst))
    } else {
        Err(ParseError::new(ErrorKind::TooShort))
    }
}

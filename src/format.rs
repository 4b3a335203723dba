//! Textual encoding styles and the process-wide default style.
//!
//! A [`Formatter`] carries an explicit [`Style`]. Code that formats without naming a style, such
//! as [`Display`](fmt::Display) on [`Uuid`], falls back to the process-wide default, which is
//! [`Style::Hyphenated`] until changed by [`set_default_style()`].
//!
//! The process-wide default is held in atomics, so it may be read and switched from any thread
//! without tearing. It is initialized statically and needs no teardown.
//!
//! ```rust
//! use rfc4122::{format::Style, Formatter, NAMESPACE_URL};
//!
//! let f = Formatter::new(Style::Urn);
//! assert_eq!(
//!     &f.format(&NAMESPACE_URL) as &str,
//!     "urn:uuid:6ba7b811-9dad-11d1-80b4-00c04fd430c8"
//! );
//! ```

#[cfg(not(feature = "std"))]
use core as std;

use std::sync::atomic::{AtomicU8, Ordering};
use std::{fmt, ops, str};

use crate::Uuid;

/// Output styles understood by [`Formatter`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Style {
    /// `6ba7b810-9dad-11d1-80b4-00c04fd430c8`
    #[default]
    Hyphenated,

    /// `6ba7b8109dad11d180b400c04fd430c8`
    Simple,

    /// `{6ba7b810-9dad-11d1-80b4-00c04fd430c8}`
    Braced,

    /// `{6ba7b8109dad11d180b400c04fd430c8}`
    BracedSimple,

    /// `(6ba7b810-9dad-11d1-80b4-00c04fd430c8)`
    Parenthesized,

    /// `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8`
    Urn,

    /// `[6BA7B810-9DAD-11d1-80B4-00c04fd430c8]`
    ///
    /// Square-bracketed, with the `time_low`, `time_mid` and `clock_seq` groups in upper case.
    GoId,
}

impl Style {
    const ALL: [Self; 7] = [
        Self::Hyphenated,
        Self::Simple,
        Self::Braced,
        Self::BracedSimple,
        Self::Parenthesized,
        Self::Urn,
        Self::GoId,
    ];

    const fn from_tag(tag: u8) -> Option<Self> {
        if (tag as usize) < Self::ALL.len() {
            Some(Self::ALL[tag as usize])
        } else {
            None
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Hyphenated | Self::Simple => "",
            Self::Braced | Self::BracedSimple => "{",
            Self::Parenthesized => "(",
            Self::Urn => "urn:uuid:",
            Self::GoId => "[",
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Hyphenated | Self::Simple | Self::Urn => "",
            Self::Braced | Self::BracedSimple => "}",
            Self::Parenthesized => ")",
            Self::GoId => "]",
        }
    }

    const fn is_hyphenated(self) -> bool {
        !matches!(self, Self::Simple | Self::BracedSimple)
    }
}

/// Encodes UUIDs in one fixed [`Style`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Formatter {
    style: Style,
}

impl Formatter {
    /// Creates a formatter that encodes in `style`.
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    /// Returns the style of this formatter.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Encodes `uuid` into a stack-allocated string.
    pub fn format(&self, uuid: &Uuid) -> Formatted {
        const LOWER: &[u8; 16] = b"0123456789abcdef";
        const UPPER: &[u8; 16] = b"0123456789ABCDEF";

        let style = self.style;
        let mut out = Formatted {
            buffer: [0u8; MAX_LEN],
            len: 0,
        };
        out.push_str(style.prefix());
        for (i, e) in uuid.as_bytes().iter().enumerate() {
            // time_hi_and_version and node stay lower case in the GoId style
            let digits = match (style, i) {
                (Style::GoId, 0..=5 | 8..=9) => UPPER,
                _ => LOWER,
            };
            out.push(digits[(e >> 4) as usize]);
            out.push(digits[(e & 15) as usize]);
            if style.is_hyphenated() && (i == 3 || i == 5 || i == 7 || i == 9) {
                out.push(b'-');
            }
        }
        out.push_str(style.suffix());
        debug_assert!(out.buffer[..out.len].is_ascii());
        out
    }
}

impl From<Style> for Formatter {
    fn from(src: Style) -> Self {
        Self::new(src)
    }
}

/// Length of the longest style, `urn:uuid:` followed by 36 characters.
const MAX_LEN: usize = 45;

/// Stack-allocated string returned by [`Formatter::format()`], dereferenceable as `str`.
#[derive(Copy, Clone)]
pub struct Formatted {
    buffer: [u8; MAX_LEN],
    len: usize,
}

impl Formatted {
    fn push(&mut self, b: u8) {
        self.buffer[self.len] = b;
        self.len += 1;
    }

    fn push_str(&mut self, s: &str) {
        self.buffer[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
        self.len += s.len();
    }
}

impl ops::Deref for Formatted {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        debug_assert!(self.buffer[..self.len].is_ascii());
        unsafe { str::from_utf8_unchecked(&self.buffer[..self.len]) }
    }
}

impl AsRef<str> for Formatted {
    fn as_ref(&self) -> &str {
        self
    }
}

impl PartialEq<str> for Formatted {
    fn eq(&self, other: &str) -> bool {
        **self == *other
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl fmt::Debug for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

/// Marks the absence of a pending one-shot style.
const NO_STYLE: u8 = u8::MAX;

static DEFAULT_STYLE: AtomicU8 = AtomicU8::new(Style::Hyphenated as u8);
static NEXT_STYLE: AtomicU8 = AtomicU8::new(NO_STYLE);

/// Switches the process-wide default style.
///
/// With `permanent` set, `style` becomes the new default. Otherwise `style` applies only to the
/// next formatting call that relies on the default, after which the previous default is in
/// effect again.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{format::{self, Style}, NAMESPACE_DNS};
///
/// format::set_default_style(Style::Simple, false);
/// assert_eq!(NAMESPACE_DNS.to_string(), "6ba7b8109dad11d180b400c04fd430c8");
/// assert_eq!(NAMESPACE_DNS.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
/// ```
pub fn set_default_style(style: Style, permanent: bool) {
    if permanent {
        log::debug!("default uuid style set to {:?}", style);
        DEFAULT_STYLE.store(style as u8, Ordering::Relaxed);
        NEXT_STYLE.store(NO_STYLE, Ordering::Relaxed);
    } else {
        log::trace!("uuid style {:?} queued for next use", style);
        NEXT_STYLE.store(style as u8, Ordering::Relaxed);
    }
}

/// Returns the permanent process-wide default style.
pub fn default_style() -> Style {
    Style::from_tag(DEFAULT_STYLE.load(Ordering::Relaxed)).unwrap_or_default()
}

/// Returns the style for a formatting call without an explicit one, consuming any pending
/// one-shot style.
fn take_style() -> Style {
    Style::from_tag(NEXT_STYLE.swap(NO_STYLE, Ordering::Relaxed)).unwrap_or_else(default_style)
}

/// Encodes `uuid` in `style`, or in the process-wide default style if `None`.
pub fn format(uuid: &Uuid, style: Option<Style>) -> Formatted {
    Formatter::new(style.unwrap_or_else(take_style)).format(uuid)
}

/// Returns `uuid` as an owned string in `style`, or in the process-wide default style if `None`.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn to_string(uuid: &Uuid, style: Option<Style>) -> String {
    String::from(&*format(uuid, style))
}

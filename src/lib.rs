//! RFC 4122 UUIDs: random and name-based generation, lenient parsing, and configurable formatting
//!
//! ```rust
//! use rfc4122::{UuidValue, Variant, NAMESPACE_DNS};
//!
//! let uuid = rfc4122::uuid4();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = rfc4122::uuid5(&NAMESPACE_DNS, "python.org");
//! assert_eq!(&uuid.encode() as &str, "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//! assert_eq!(uuid.version(), 5);
//! assert_eq!(uuid.variant(), Variant::Rfc4122);
//!
//! let parsed = rfc4122::parse("{886313e1-3b8a-5372-9b90-0c9aee199e5d}")?;
//! assert_eq!(parsed, uuid);
//! # Ok::<(), rfc4122::ParseError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |  time_hi              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  clk_seq_hi   |  clk_seq_low  |         node (0-1)        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The 4-bit `ver` field identifies the generation scheme and the leading bits of byte 8 (`var`)
//! the [`Variant`]. This library reads and writes both without validation: a parsed or raw UUID
//! keeps whatever bits it came with, while [`uuid4()`], [`uuid3()`], [`uuid5()`] and [`digest()`]
//! stamp version 4, 3 and 5 respectively along with the RFC 4122 variant (`10`).
//!
//! Two representations share the [`UuidValue`] interface: [`Uuid`], a 16-byte array, and
//! [`Fields`], the six named fields of RFC 4122.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables `String` conversions and `std::error::Error`. Without `std`, this crate
//!   provides the codec, value types, parser, stack-allocated formatting and name-based
//!   generation under `no_std` environments.
//! - `global_gen` (implies `std`) enables the process-wide random generator behind [`uuid4()`]
//!   and [`new_random()`].
//! - `md5` and `sha1` enable [`uuid3()`] and [`uuid5()`] through the RustCrypto hashers.
//!
//! Optional features:
//!
//! - `digest` enables [`generator::with_digest::Adapter`] for any RustCrypto [`Digest`] type.
//! - `serde` enables serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables conversion from/into `uuid::Uuid`.
//!
//! [`Digest`]: https://docs.rs/digest/0.10/digest/trait.Digest.html

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;
pub use codec::Variant;

mod error;
pub use error::{LengthError, ParseError};

mod value;
pub use value::UuidValue;

mod id;
pub use id::{Uuid, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

mod fields;
pub use fields::Fields;

mod parser;
pub use parser::{new_from_hex, parse};

pub mod format;
pub use format::{set_default_style, Formatter, Style};

pub mod generator;
pub use generator::{digest, Generator};

#[cfg(feature = "md5")]
pub use generator::with_digest::uuid3;
#[cfg(feature = "sha1")]
pub use generator::with_digest::uuid5;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{new_random, uuid4};

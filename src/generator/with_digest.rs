//! Integration with the RustCrypto `digest` (v0.10) crate, and the name-based entry points built
//! on it.

#![cfg(feature = "digest")]
#![cfg_attr(docsrs, doc(cfg(feature = "digest")))]

use digest::Digest;

use super::DigestSource;
#[cfg(any(feature = "md5", feature = "sha1"))]
use crate::Uuid;

/// An adapter that implements [`DigestSource`] for [`Digest`] types.
///
/// Unless chosen explicitly, the version is 3 for algorithms with a 16-byte output (MD5) and 5
/// for longer outputs (SHA-1 and wider).
#[derive(Clone, Debug)]
pub struct Adapter<D> {
    inner: D,
    version: u8,
}

impl<D: Digest> Adapter<D> {
    /// Wraps `inner`, choosing the version from its output size.
    ///
    /// # Panics
    ///
    /// Panics if the output of `D` is shorter than 16 bytes.
    pub fn new(inner: D) -> Self {
        let version = if <D as Digest>::output_size() > 16 { 5 } else { 3 };
        Self::with_version(inner, version)
    }

    /// Wraps `inner`, stamping `version` on derived UUIDs.
    ///
    /// # Panics
    ///
    /// Panics if the output of `D` is shorter than 16 bytes.
    pub fn with_version(inner: D, version: u8) -> Self {
        assert!(
            <D as Digest>::output_size() >= 16,
            "digest output must be at least 16 bytes"
        );
        Self { inner, version }
    }
}

impl<D: Digest> Default for Adapter<D> {
    fn default() -> Self {
        Self::new(D::new())
    }
}

impl<D: Digest> DigestSource for Adapter<D> {
    fn version(&self) -> u8 {
        self.version
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn finalize_into(self, dest: &mut [u8; 16]) {
        dest.copy_from_slice(&Digest::finalize(self.inner)[..16]);
    }
}

/// MD5 hasher producing version 3 UUIDs.
#[cfg(feature = "md5")]
#[cfg_attr(docsrs, doc(cfg(feature = "md5")))]
pub type Md5Digest = Adapter<md5::Md5>;

/// SHA-1 hasher producing version 5 UUIDs.
#[cfg(feature = "sha1")]
#[cfg_attr(docsrs, doc(cfg(feature = "sha1")))]
pub type Sha1Digest = Adapter<sha1::Sha1>;

/// Generates a UUIDv3 object from `namespace` and `name`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid3, NAMESPACE_DNS};
///
/// let uuid = uuid3(&NAMESPACE_DNS, "python.org");
/// assert_eq!(&uuid.encode() as &str, "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
#[cfg(feature = "md5")]
#[cfg_attr(docsrs, doc(cfg(feature = "md5")))]
pub fn uuid3(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    super::digest(namespace, name, Md5Digest::default())
}

/// Generates a UUIDv5 object from `namespace` and `name`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid5, NAMESPACE_DNS};
///
/// let uuid = uuid5(&NAMESPACE_DNS, "python.org");
/// assert_eq!(&uuid.encode() as &str, "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
#[cfg(feature = "sha1")]
#[cfg_attr(docsrs, doc(cfg(feature = "sha1")))]
pub fn uuid5(namespace: &Uuid, name: impl AsRef<[u8]>) -> Uuid {
    super::digest(namespace, name, Sha1Digest::default())
}

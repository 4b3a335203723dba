//! Random and name-based UUID generation.

use crate::{Uuid, UuidValue, Variant};

pub mod with_digest;
pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a generator of random UUIDs backed by a caller-chosen random number generator.
///
/// [`generate_raw`](Generator::generate_raw) leaves every bit as drawn, while
/// [`generate_v4`](Generator::generate_v4) stamps the version 4 and RFC 4122 variant bits.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::{Generator, UuidValue, Variant};
///
/// let mut g = Generator::with_rand08(OsRng);
/// let uuid = g.generate_v4();
/// assert_eq!(uuid.version(), 4);
/// assert_eq!(uuid.variant(), Variant::Rfc4122);
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a UUID of 128 random bits without setting the version or variant.
    pub fn generate_raw(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Uuid::from(bytes)
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut uuid = self.generate_raw();
        uuid.set_version(4);
        uuid.set_variant(Variant::Rfc4122);
        uuid
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::Generator;
///
/// Generator::with_rand08(rand::thread_rng())
///     .take(4)
///     .for_each(|e| println!("{}", e));
/// ```
impl<R: RandSource> Iterator for Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v4())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> core::iter::FusedIterator for Generator<R> {}

/// A trait that defines the hash function interface consumed by [`digest()`].
///
/// Any algorithm that ingests bytes and produces at least 16 bytes of output qualifies. The
/// implementor decides which version number marks UUIDs derived from it: 3 for MD5-class and 5
/// for SHA-1-class algorithms.
pub trait DigestSource {
    /// The version number stamped on derived UUIDs.
    fn version(&self) -> u8;

    /// Feeds `data` into the hash state.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hash state and writes the first 16 bytes of the output to `dest`.
    fn finalize_into(self, dest: &mut [u8; 16]);
}

/// Derives a name-based UUID from `namespace` and `name` using `hasher`.
///
/// The namespace bytes followed by the name bytes are hashed, the first 16 bytes of the output
/// become the UUID, and the version and RFC 4122 variant bits are then stamped over them.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "md5")]
/// # {
/// use rfc4122::{generator::with_digest::Md5Digest, UuidValue, Variant, NAMESPACE_DNS};
///
/// let uuid = rfc4122::digest(&NAMESPACE_DNS, "python.org", Md5Digest::default());
/// assert_eq!(&uuid.encode() as &str, "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// assert_eq!(uuid.version(), 3);
/// assert_eq!(uuid.variant(), Variant::Rfc4122);
/// # }
/// ```
pub fn digest<V, N, H>(namespace: &V, name: N, mut hasher: H) -> Uuid
where
    V: UuidValue + ?Sized,
    N: AsRef<[u8]>,
    H: DigestSource,
{
    let version = hasher.version();
    hasher.update(&namespace.bytes());
    hasher.update(name.as_ref());

    let mut bytes = [0u8; 16];
    hasher.finalize_into(&mut bytes);

    let mut uuid = Uuid::from(bytes);
    uuid.set_version(version);
    uuid.set_variant(Variant::Rfc4122);
    uuid
}

//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Creates a UUID from `raw` bytes, or from fresh random bytes if `None`.
///
/// The version and variant bits are left exactly as supplied or drawn. Use [`uuid4()`] for a
/// conforming random UUID.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{new_random, UuidValue, Variant};
///
/// let raw = [
///     0xAA, 0xCF, 0xEE, 0x12, 0xD4, 0x00, 0x27, 0x23, 0x00, 0xD3, 0x23, 0x12, 0x4A, 0x11, 0x89,
///     0xFF,
/// ];
/// let uuid = new_random(Some(raw));
/// assert_eq!(uuid.version(), 2);
/// assert_eq!(uuid.variant(), Variant::Ncs);
///
/// let uuid = new_random(None); // 128 random bits
/// ```
pub fn new_random(raw: Option<[u8; 16]>) -> Uuid {
    match raw {
        Some(bytes) => Uuid::from(bytes),
        None => lock_global_gen().get_mut().generate_raw(),
    }
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate_v4()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{Generator, RandSource};

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest);
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            log::trace!("initializing global uuid generator");
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("rfc4122: could not initialize global generator");
            let rng = GlobalGenRng(ReseedingRng::new(core, 1024 * 64, OsRng));
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: Generator::new(rng),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                log::debug!("process id changed; reseeding global uuid generator");
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}

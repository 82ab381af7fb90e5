use rand::Rng;

/// A trait for random sources that return uniform indices into an alphabet.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Implementations must sample **uniformly and
/// independently**: the closed-form collision model assumes both, and a
/// biased source silently invalidates it.
///
/// # Example
///
/// ```
/// use idclash::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn next_index(&self, _bound: usize) -> usize {
///         3
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.next_index(64), 3);
/// ```
pub trait RandSource {
    /// Returns a uniformly distributed index in `0..bound`.
    ///
    /// `bound` is always non-zero for generators produced by this crate.
    fn next_index(&self, bound: usize) -> usize;
}

/// A [`RandSource`] backed by the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically, satisfying the uniformity and
/// independence assumptions of the probability model.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// are contention-free and safe. This type does **not** store the RNG itself;
/// it is a zero-sized handle that accesses the thread-local generator on each
/// call, and may be freely shared across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn next_index(&self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

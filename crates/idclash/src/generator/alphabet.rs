use crate::{Error, IdGenerator, RandSource, Result, ThreadRandom};

const BASE64_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE62_ALPHABET: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A fixed-alphabet random identifier generator.
///
/// Draws `length` symbols independently and uniformly at random from its
/// alphabet on every call to [`IdGenerator::generate`]. The random source is
/// a type parameter so tests can script the draws; production code uses the
/// cryptographically secure [`ThreadRandom`].
///
/// # Example
///
/// ```
/// use idclash::{AlphabetGenerator, IdGenerator};
///
/// let generator = AlphabetGenerator::base62(8).unwrap();
/// assert_eq!(generator.generate().len(), 8);
/// assert_eq!(generator.name(), "base62");
/// ```
pub struct AlphabetGenerator<R = ThreadRandom> {
    name: &'static str,
    alphabet: &'static [u8],
    length: usize,
    rng: R,
}

impl AlphabetGenerator<ThreadRandom> {
    /// Creates a generator over the 64-symbol alphabet `A-Z a-z 0-9 + /`.
    ///
    /// Fails with [`Error::GeneratorConstruction`] when `length <= 0`.
    pub fn base64(length: i64) -> Result<Self> {
        Self::with_rand("base64", BASE64_ALPHABET, length, ThreadRandom)
    }

    /// Creates a generator over the 62-symbol alphabet `0-9 A-Z a-z`.
    ///
    /// Fails with [`Error::GeneratorConstruction`] when `length <= 0`.
    pub fn base62(length: i64) -> Result<Self> {
        Self::with_rand("base62", BASE62_ALPHABET, length, ThreadRandom)
    }
}

impl<R: RandSource> AlphabetGenerator<R> {
    pub(crate) fn with_rand(
        name: &'static str,
        alphabet: &'static [u8],
        length: i64,
        rng: R,
    ) -> Result<Self> {
        if length <= 0 {
            return Err(Error::GeneratorConstruction {
                reason: format!("length must be positive, got {length}"),
            });
        }
        Ok(Self {
            name,
            alphabet,
            length: length as usize,
            rng,
        })
    }
}

impl<R: RandSource> IdGenerator for AlphabetGenerator<R> {
    fn generate(&self) -> String {
        let mut id = String::with_capacity(self.length);
        for _ in 0..self.length {
            id.push(self.alphabet[self.rng.next_index(self.alphabet.len())] as char);
        }
        id
    }

    /// `alphabet_size ^ length`, saturating at `u64::MAX` instead of
    /// wrapping.
    fn total_space(&self) -> u64 {
        let base = self.alphabet.len() as u64;
        let mut space: u64 = 1;
        for _ in 0..self.length {
            space = match space.checked_mul(base) {
                Some(next) => next,
                None => return u64::MAX,
            };
        }
        space
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

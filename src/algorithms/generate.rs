//! Generate the prime pair for the RSA private key

use num_bigint::{BigUint, RandPrime};
use num_integer::Roots;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};

/// Maximum number of times the pair search widens the bit-length split
/// before reporting failure instead of retrying forever.
pub(crate) const MAX_GENERATION_ATTEMPTS: usize = 64;

/// A freshly drawn prime pair and its modulus.
#[derive(Debug, Clone)]
pub struct PrimePair {
    /// First prime factor. Always the larger of the two.
    pub p: BigUint,
    /// Second prime factor.
    pub q: BigUint,
    /// Product of the two primes.
    pub n: BigUint,
}

/// Draws a pair of probable primes around `bit_size` bits each whose
/// product resists Fermat's factorization method.
///
/// Fermat's method factors `n` quickly when the two primes share their
/// high-order bits, which is almost always the case for two independent
/// draws of the same length. The search therefore splits the lengths as
/// `bit_size + k` / `bit_size - k`, widening `k` by one on every attempt,
/// until `p - q > ⌊√(n/2)⌋`.
pub fn generate_fermat_distant_primes<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<PrimePair> {
    if bit_size < 32 {
        let prime_limit = (1u64 << bit_size) as f64;

        // pi approximates the number of primes less than prime_limit

        // Calculate `log(prime_limit)` as `log(x) = log2(x) / log2(e) = log2(x) * log(2)`.
        let mut pi = prime_limit / (bit_size as f64 * core::f64::consts::LN_2 - 1.);

        // Generated primes start with 0b11, so we can only use a quarter of them.
        pi /= 4f64;
        // Use a factor of two to ensure that key generation terminates in a
        // reasonable amount of time.
        pi /= 2f64;

        if pi < 2f64 {
            return Err(Error::TooFewPrimes);
        }
    }

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        // `gen_prime` rejects anything under 2 bits; a split that thin
        // means the requested length cannot carry the widening retries.
        let q_bits = bit_size
            .checked_sub(attempt)
            .filter(|bits| *bits >= 2)
            .ok_or(Error::InvalidBitLength)?;

        let p = rng.gen_prime(bit_size + attempt);
        let q = rng.gen_prime(q_bits);

        // p carries the larger bit length, so the difference is positive.
        let diff = &p - &q;
        let n = &p * &q;
        let threshold = (&n >> 1).sqrt();

        if diff > threshold {
            return Ok(PrimePair { p, q, n });
        }
    }

    Err(Error::PrimeGenerationFailed)
}

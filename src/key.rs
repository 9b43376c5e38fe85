//! RSA key records and keypair assembly.

use num_bigint::prime::probably_prime;
use num_bigint::{BigUint, IntoBigUint, ModInverse};
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::algorithms::crt::{crt_constants, CrtConstants};
use crate::algorithms::generate::generate_fermat_distant_primes;
use crate::algorithms::reduction::{montgomery_constants, MontgomeryConstants};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Public exponent used for every generated key.
pub const EXP: u64 = 65537;

/// Miller-Rabin rounds used when re-checking the primes of a finished
/// key.
const PRIME_CONFIDENCE: usize = 20;

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
    montgomery: MontgomeryConstants,
    block_size: usize,
}

/// Represents a whole RSA key, public and private parts.
#[derive(Debug, Clone)]
pub struct RsaPrivateKey {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
    /// Private exponent
    d: BigUint,
    /// Larger prime factor of N
    p: BigUint,
    /// Smaller prime factor of N
    q: BigUint,
    /// Precomputed values to speed up private operations
    crt: CrtConstants,
}

impl RsaPublicKey {
    fn from_modulus(n: BigUint, e: BigUint) -> RsaPublicKey {
        let montgomery = montgomery_constants(&n);
        // One plaintext block per modulus-sized chunk. The target treats
        // every byte as one character, and the generated moduli are
        // byte-aligned in practice, so the remainder bits are dropped.
        let block_size = n.bits() / 8;

        RsaPublicKey {
            n,
            e,
            montgomery,
            block_size,
        }
    }

    /// Returns the Montgomery-domain constants of the modulus.
    pub fn montgomery(&self) -> &MontgomeryConstants {
        &self.montgomery
    }

    /// Returns the number of whole bytes a single block covers.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl From<&RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: &RsaPrivateKey) -> Self {
        RsaPublicKey::from_modulus(private_key.n.clone(), private_key.e.clone())
    }
}

impl RsaPrivateKey {
    /// Generates a keypair for a modulus of `bit_size` bits using the
    /// given random source.
    ///
    /// `bit_size` is split evenly between the two primes; an odd value
    /// loses its low bit to the integer division.
    pub fn new<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        bit_size: usize,
    ) -> Result<RsaPrivateKey> {
        let pair = generate_fermat_distant_primes(rng, bit_size / 2)?;

        RsaPrivateKey::from_primes(pair.p, pair.q)
    }

    /// Assembles a keypair from an existing pair of distinct primes.
    ///
    /// Derives the private exponent and every precomputed constant, then
    /// validates the finished key, so the result is either internally
    /// consistent or an error.
    pub fn from_primes(p: BigUint, q: BigUint) -> Result<RsaPrivateKey> {
        let n = &p * &q;
        let e = BigUint::from(EXP);

        let phi = (&p - BigUint::one()) * (&q - BigUint::one());
        let d = e
            .clone()
            .mod_inverse(&phi)
            .and_then(IntoBigUint::into_biguint)
            .ok_or(Error::InvalidExponent)?;

        let crt = crt_constants(&p, &q, &d)?;

        let key = RsaPrivateKey {
            n,
            e,
            d,
            p,
            q,
            crt,
        };
        key.validate()?;

        Ok(key)
    }

    /// Performs basic sanity checks on the key material.
    pub fn validate(&self) -> Result<()> {
        if !probably_prime(&self.p, PRIME_CONFIDENCE) || !probably_prime(&self.q, PRIME_CONFIDENCE)
        {
            return Err(Error::InvalidPrime);
        }

        if &self.p * &self.q != self.n {
            return Err(Error::InvalidModulus);
        }

        // Check that de ≡ 1 mod p-1 and de ≡ 1 mod q-1.
        let de = &self.d * &self.e;
        for prime in [&self.p, &self.q] {
            if !(&de % (prime - BigUint::one())).is_one() {
                return Err(Error::InvalidExponent);
            }
        }

        Ok(())
    }
}

impl PartialEq for RsaPrivateKey {
    #[inline]
    fn eq(&self, other: &RsaPrivateKey) -> bool {
        self.d == other.d && self.p == other.p && self.q == other.q
    }
}

impl Eq for RsaPrivateKey {}

impl Zeroize for RsaPrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.crt.zeroize();
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PublicKeyParts for RsaPublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PublicKeyParts for RsaPrivateKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PrivateKeyParts for RsaPrivateKey {
    fn d(&self) -> &BigUint {
        &self.d
    }

    fn p(&self) -> &BigUint {
        &self.p
    }

    fn q(&self) -> &BigUint {
        &self.q
    }

    fn crt(&self) -> &CrtConstants {
        &self.crt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn test_from_into() {
        let private_key = RsaPrivateKey::from_primes(
            BigUint::from_u64(11).unwrap(),
            BigUint::from_u64(7).unwrap(),
        )
        .unwrap();
        let public_key: RsaPublicKey = (&private_key).into();

        assert_eq!(public_key.n(), private_key.n());
        assert_eq!(public_key.e(), &BigUint::from_u64(65537).unwrap());
    }

    #[test]
    fn test_from_primes_derives_exponent() {
        // phi = 10 · 6 = 60, e ≡ 17 (mod 60), d = 53.
        let key = RsaPrivateKey::from_primes(
            BigUint::from_u64(11).unwrap(),
            BigUint::from_u64(7).unwrap(),
        )
        .unwrap();

        assert_eq!(key.d(), &BigUint::from_u64(53).unwrap());
        assert_eq!(key.n(), &BigUint::from_u64(77).unwrap());
        assert!(key.validate().is_ok());
    }

    #[test]
    fn test_composite_factor_is_rejected() {
        let result = RsaPrivateKey::from_primes(
            BigUint::from_u64(11).unwrap(),
            BigUint::from_u64(9).unwrap(),
        );

        assert_eq!(result.unwrap_err(), Error::InvalidPrime);
    }

    macro_rules! key_generation {
        ($name:ident, $size:expr) => {
            #[test]
            fn $name() {
                let mut rng = ChaCha8Rng::from_seed([42; 32]);
                for _ in 0..3 {
                    let key = RsaPrivateKey::new(&mut rng, $size).unwrap();
                    assert_eq!(key.n().bits(), $size);
                    assert!(key.validate().is_ok());
                }
            }
        };
    }

    key_generation!(key_generation_128, 128);
    key_generation!(key_generation_512, 512);
}

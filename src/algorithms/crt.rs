//! Chinese Remainder Theorem private-key constants.

use num_bigint::{BigUint, IntoBigUint, ModInverse};
use num_traits::One;
use zeroize::Zeroize;

use crate::algorithms::reduction::{barrett_constants, BarrettConstants};
use crate::errors::{Error, Result};

/// Precomputed values letting the private-key operation run modulo each
/// prime factor separately instead of modulo `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrtConstants {
    /// `d mod (p - 1)`
    pub dp: BigUint,
    /// `d mod (q - 1)`
    pub dq: BigUint,
    /// `q⁻¹ mod p`
    pub qinv: BigUint,
    /// Barrett constants for reductions modulo `p`.
    pub barrett_p: BarrettConstants,
    /// Barrett constants for reductions modulo `q`.
    pub barrett_q: BarrettConstants,
}

impl Zeroize for CrtConstants {
    fn zeroize(&mut self) {
        self.dp.zeroize();
        self.dq.zeroize();
        self.qinv.zeroize();
        self.barrett_p.zeroize();
        self.barrett_q.zeroize();
    }
}

impl Drop for CrtConstants {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Derives the CRT constants for the prime pair `(p, q)` and private
/// exponent `d`.
///
/// The inverse of `q` modulo `p` exists whenever the primes are distinct;
/// its absence is reported as [`Error::InvalidCoefficient`] rather than
/// assumed away.
pub fn crt_constants(p: &BigUint, q: &BigUint, d: &BigUint) -> Result<CrtConstants> {
    // `mod_inverse` rejects equal operands outright instead of returning
    // no inverse.
    if p == q {
        return Err(Error::InvalidCoefficient);
    }

    let dp = d % (p - BigUint::one());
    let dq = d % (q - BigUint::one());
    let qinv = q
        .clone()
        .mod_inverse(p)
        .and_then(IntoBigUint::into_biguint)
        .ok_or(Error::InvalidCoefficient)?;

    Ok(CrtConstants {
        dp,
        dq,
        qinv,
        barrett_p: barrett_constants(p),
        barrett_q: barrett_constants(q),
    })
}

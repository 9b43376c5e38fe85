//! Barrett and Montgomery reduction constants.
//!
//! The target environment cannot afford a wide division per reduction;
//! both schemes trade it for multiplications against a constant that
//! only depends on the modulus, so it is derived once here.

use num_bigint::BigUint;
use num_traits::One;
use zeroize::Zeroize;

/// Constants for Barrett reduction modulo a fixed modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrettConstants {
    /// Power of two the scaled quotient is shifted back down by;
    /// twice the modulus bit length.
    pub shift: usize,
    /// `⌊2^shift / modulus⌋`.
    pub factor: BigUint,
}

impl Zeroize for BarrettConstants {
    fn zeroize(&mut self) {
        self.shift.zeroize();
        self.factor.zeroize();
    }
}

/// Constants for mapping operands into the Montgomery domain of a fixed
/// modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MontgomeryConstants {
    /// Bit length of the modulus, determining `R = 2^bit_length`.
    pub bit_length: usize,
    /// `R² mod modulus`.
    pub rr: BigUint,
}

/// Derives the Barrett constants for `modulus`.
///
/// Pure function of the modulus; repeated calls yield bit-identical
/// results.
pub fn barrett_constants(modulus: &BigUint) -> BarrettConstants {
    let shift = modulus.bits() * 2;
    let factor = (BigUint::one() << shift) / modulus;

    BarrettConstants { shift, factor }
}

/// Derives the Montgomery constants for `modulus`.
///
/// Pure function of the modulus; repeated calls yield bit-identical
/// results.
pub fn montgomery_constants(modulus: &BigUint) -> MontgomeryConstants {
    let bit_length = modulus.bits();
    let rr = (BigUint::one() << (bit_length * 2)) % modulus;

    MontgomeryConstants { bit_length, rr }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn test_barrett_small_modulus() {
        // m = 5 has 3 bits: shift = 6, factor = ⌊64 / 5⌋ = 12.
        let constants = barrett_constants(&BigUint::from_u64(5).unwrap());
        assert_eq!(constants.shift, 6);
        assert_eq!(constants.factor, BigUint::from_u64(12).unwrap());
    }

    #[test]
    fn test_montgomery_small_modulus() {
        // m = 5: R = 2^3, rr = 64 mod 5 = 4.
        let constants = montgomery_constants(&BigUint::from_u64(5).unwrap());
        assert_eq!(constants.bit_length, 3);
        assert_eq!(constants.rr, BigUint::from_u64(4).unwrap());
    }

    #[test]
    fn test_quotient_bounds() {
        for m in 2u64..512 {
            let modulus = BigUint::from_u64(m).unwrap();
            let constants = barrett_constants(&modulus);
            let power = BigUint::one() << constants.shift;

            assert!(&constants.factor * &modulus <= power);
            assert!((&constants.factor + BigUint::one()) * &modulus > power);
        }
    }

    #[test]
    fn test_derivations_are_pure() {
        let modulus = BigUint::from_u64(65_537).unwrap();
        assert_eq!(barrett_constants(&modulus), barrett_constants(&modulus));
        assert_eq!(
            montgomery_constants(&modulus),
            montgomery_constants(&modulus)
        );
    }
}

//! Traits related to the key components

use num_bigint::BigUint;

use crate::algorithms::crt::CrtConstants;

/// Components of the public half of a keypair.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;
}

/// Components of the private half of a keypair.
pub trait PrivateKeyParts: PublicKeyParts {
    /// Returns the private exponent of the key.
    fn d(&self) -> &BigUint;

    /// Returns the larger prime factor of the modulus.
    fn p(&self) -> &BigUint;

    /// Returns the smaller prime factor of the modulus.
    fn q(&self) -> &BigUint;

    /// Returns the precomputed CRT constants.
    fn crt(&self) -> &CrtConstants;
}

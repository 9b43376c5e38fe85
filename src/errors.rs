//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-keygen` error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A prime of the requested bit length cannot be drawn, either because
    /// the length is below what the prime generator accepts or because the
    /// widening retry split consumed it.
    InvalidBitLength,

    /// Too few primes of the given length exist for the pair search to
    /// terminate.
    TooFewPrimes,

    /// No prime pair satisfying the Fermat distance requirement was found
    /// within the attempt bound.
    PrimeGenerationFailed,

    /// Invalid prime value.
    InvalidPrime,

    /// Invalid modulus.
    InvalidModulus,

    /// Invalid exponent.
    InvalidExponent,

    /// Invalid coefficient.
    InvalidCoefficient,
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidBitLength => write!(f, "prime bit length too small"),
            Error::TooFewPrimes => {
                write!(f, "too few primes of given length to generate an RSA key")
            }
            Error::PrimeGenerationFailed => {
                write!(f, "no Fermat-resistant prime pair found within the attempt bound")
            }
            Error::InvalidPrime => write!(f, "invalid prime value"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::InvalidCoefficient => write!(f, "invalid coefficient"),
        }
    }
}

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Overview
//!
//! The crate prepares everything a constrained modular-exponentiation
//! implementation needs to run RSA without native big-integer division:
//!
//! - a prime pair resistant to Fermat's factorization method,
//! - Barrett reduction constants for `p`, `q`,
//! - Montgomery reduction constants for `n`,
//! - the CRT private-key constants `dp`, `dq` and `q⁻¹ mod p`.
//!
//! Key generation is generic over the random source:
//!
//! ```
//! use rsa_keygen::{encoding, RsaPrivateKey, RsaPublicKey};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let private_key = RsaPrivateKey::new(&mut rng, 512).expect("failed to generate a key");
//! let public_key = RsaPublicKey::from(&private_key);
//!
//! println!("{}", encoding::public_key_line(&public_key));
//! println!("{}", encoding::private_key_line(&private_key));
//! ```
//!
//! The derivation functions are pure and individually accessible:
//!
//! ```
//! use rsa_keygen::{barrett_constants, BigUint};
//!
//! let constants = barrett_constants(&BigUint::from(65_537u64));
//! assert_eq!(constants.shift, 34);
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

pub mod algorithms;
pub mod encoding;
pub mod errors;
mod key;
pub mod traits;

pub use crate::{
    algorithms::crt::{crt_constants, CrtConstants},
    algorithms::generate::{generate_fermat_distant_primes, PrimePair},
    algorithms::reduction::{
        barrett_constants, montgomery_constants, BarrettConstants, MontgomeryConstants,
    },
    errors::{Error, Result},
    key::{RsaPrivateKey, RsaPublicKey, EXP},
};

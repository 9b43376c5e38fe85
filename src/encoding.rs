//! Textual rendering of generated keys.
//!
//! The target environment constructs its key objects from literal calls
//! embedded in a configuration file; both lines produced here are pasted
//! there verbatim. Every numeric field renders as lowercase hexadecimal
//! with a `0x` prefix and no padding beyond the natural width of the
//! value, while bit lengths, shift amounts and the block size stay
//! decimal and unquoted. Downstream tooling parses these lines, so field
//! order and quoting are part of the crate's contract.

use alloc::format;
use alloc::string::String;

use num_bigint::BigUint;

use crate::key::{RsaPrivateKey, RsaPublicKey};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Renders a value as `0x`-prefixed lowercase hexadecimal.
pub fn to_hex(value: &BigUint) -> String {
    format!("0x{}", value.to_str_radix(16))
}

/// Renders the `publicKey = ...` configuration line.
pub fn public_key_line(key: &RsaPublicKey) -> String {
    let montgomery = key.montgomery();

    format!(
        "publicKey = PublicKey.newKey(\"{}\", \"{}\", {}, \"{}\", {})",
        to_hex(key.e()),
        to_hex(key.n()),
        montgomery.bit_length,
        to_hex(&montgomery.rr),
        key.block_size(),
    )
}

/// Renders the `privateKey = ...` configuration line.
pub fn private_key_line(key: &RsaPrivateKey) -> String {
    let crt = key.crt();

    format!(
        "privateKey = PrivateKey.newKey(\"{}\", \"{}\", \"{}\", \"{}\", \"{}\", \"{}\", \"{}\", {}, \"{}\", {}, \"{}\")",
        to_hex(key.d()),
        to_hex(key.n()),
        to_hex(key.p()),
        to_hex(key.q()),
        to_hex(&crt.qinv),
        to_hex(&crt.dp),
        to_hex(&crt.dq),
        crt.barrett_p.shift,
        to_hex(&crt.barrett_p.factor),
        crt.barrett_q.shift,
        to_hex(&crt.barrett_q.factor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    fn small_key() -> RsaPrivateKey {
        RsaPrivateKey::from_primes(
            BigUint::from_u64(11).unwrap(),
            BigUint::from_u64(7).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_to_hex_has_no_padding() {
        assert_eq!(to_hex(&BigUint::from_u64(10).unwrap()), "0xa");
        assert_eq!(to_hex(&BigUint::from_u64(65_537).unwrap()), "0x10001");
        assert_eq!(
            to_hex(&BigUint::from_u64(0xdead_beef).unwrap()),
            "0xdeadbeef"
        );
    }

    #[test]
    fn test_public_key_line() {
        let key = small_key();

        // n = 77 (7 bits), rr = 2^14 mod 77 = 60, block size = ⌊7 / 8⌋.
        assert_eq!(
            public_key_line(&RsaPublicKey::from(&key)),
            "publicKey = PublicKey.newKey(\"0x10001\", \"0x4d\", 7, \"0x3c\", 0)"
        );
    }

    #[test]
    fn test_private_key_line() {
        assert_eq!(
            private_key_line(&small_key()),
            "privateKey = PrivateKey.newKey(\"0x35\", \"0x4d\", \"0xb\", \"0x7\", \"0x8\", \
             \"0x3\", \"0x5\", 8, \"0x17\", 6, \"0x9\")"
        );
    }
}

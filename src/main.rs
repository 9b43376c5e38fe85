//! Command-line keypair generator.
//!
//! Takes the desired total modulus bit length as its single argument and
//! prints the two configuration lines the target environment consumes.

use std::env;
use std::process::ExitCode;

use rand_core::OsRng;
use rsa_keygen::{encoding, RsaPrivateKey, RsaPublicKey};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <key length in bits>", args[0]);
        return ExitCode::FAILURE;
    }

    let bit_size: usize = match args[1].parse() {
        Ok(bits) => bits,
        Err(_) => {
            eprintln!("key length must be an integer, got {:?}", args[1]);
            return ExitCode::FAILURE;
        }
    };

    let private_key = match RsaPrivateKey::new(&mut OsRng, bit_size) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("key generation failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    let public_key = RsaPublicKey::from(&private_key);

    println!("{}", encoding::public_key_line(&public_key));
    println!();
    println!("{}", encoding::private_key_line(&private_key));

    ExitCode::SUCCESS
}

//! # Affine Cipher Library
//!
//! Toy affine ciphers over a 52-letter alphabet (`A`-`Z` then `a`-`z`).
//! This is teaching material, **not** a secure cipher.
//!
//! ## Supported Modes
//!
//! - **Caesar** - letter-by-letter `f(x) = (k*x + b) mod 52`
//! - **Block** - `width` letters packed into one decimal block, transformed
//!   modulo `5252...52`, and concatenated into one big integer
//!
//! ## Usage
//!
//! ```rust
//! use affine_cipher::{decrypt_block_cipher, decrypt_caesar_cipher, encrypt_block_cipher, encrypt_caesar_cipher};
//!
//! let secret = encrypt_caesar_cipher("AttackAtDawn", 17, 36)?;
//! assert_eq!(decrypt_caesar_cipher(&secret, 17, 36)?, "AttackAtDawn");
//!
//! // the block cipher needs the plaintext length to undo zero padding
//! let number = encrypt_block_cipher("AttackAtDawn", 74695, 11923, 3)?;
//! assert_eq!(decrypt_block_cipher(&number, 74695, 11923, 3, 12)?, "AttackAtDawn");
//! # Ok::<(), affine_cipher::AffineCipherError>(())
//! ```
//!
//! The number theory behind decryption lives in [`number_theory`], with two
//! independent modular inverse implementations that are cross-checked by the
//! test suite.

// Public modules
pub mod affine;
pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod modes;
pub mod number_theory;
pub mod utils;

// Re-exports for easy access
pub use affine::{AffineKey, decrypt_value, encrypt_value};
pub use alphabet::{ALPHABET_SIZE, index_to_letter, letter_to_index, stringify};
pub use cipher::TextCipher;
pub use error::{AffineCipherError, Result};
pub use modes::{
    BlockCipher, BlockCiphertext, CaesarCipher, decrypt_block_cipher, decrypt_caesar_cipher,
    encrypt_block_cipher, encrypt_caesar_cipher,
};
pub use number_theory::{
    extended_gcd, gcd, modular_inverse_bruteforce, modular_inverse_extended,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// List all supported cipher modes
pub fn supported_modes() -> Vec<&'static str> {
    vec!["Caesar", "Block"]
}

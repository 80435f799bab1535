//! Letter-by-letter affine cipher over the 52-letter alphabet
//!
//! Every letter is mapped to its index, transformed with
//! `f(x) = (k*x + b) mod 52` and mapped back. Because uppercase and lowercase
//! share one index space, a letter may change case.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::affine::{self, AffineKey};
use crate::alphabet::{self, ALPHABET_SIZE};
use crate::cipher::TextCipher;
use crate::error::Result;

/// Affine substitution cipher with modulus 52
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarCipher {
    key: AffineKey,
}

impl CaesarCipher {
    pub fn new(key: AffineKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &AffineKey {
        &self.key
    }

    /// Modulus of the stream cipher, the alphabet size
    pub fn modulus() -> BigInt {
        BigInt::from(ALPHABET_SIZE)
    }

    fn map_letters<F>(text: &str, mut transform: F) -> Result<String>
    where
        F: FnMut(BigInt) -> Result<BigInt>,
    {
        text.chars()
            .map(|letter| {
                let index = BigInt::from(alphabet::letter_to_index(letter)?);
                let mapped = transform(index)?;
                // mapped is reduced modulo 52, so it always fits
                let mapped = mapped.to_u8().unwrap_or(ALPHABET_SIZE);
                alphabet::index_to_letter(mapped)
            })
            .collect()
    }
}

impl TextCipher for CaesarCipher {
    type Ciphertext = String;

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let modulus = Self::modulus();
        debug!(letters = plaintext.chars().count(), "caesar encrypt");

        Self::map_letters(plaintext, |x| affine::encrypt_value(&x, &self.key, &modulus))
    }

    fn decrypt(&self, ciphertext: &String) -> Result<String> {
        let modulus = Self::modulus();
        let k_inverse = self.key.inverse_k(&modulus)?;
        debug!(letters = ciphertext.chars().count(), %k_inverse, "caesar decrypt");

        Self::map_letters(ciphertext, |y| {
            Ok(affine::apply_inverse(&y, &k_inverse, &self.key, &modulus))
        })
    }
}

/// Encrypt `text` letter by letter with `f(x) = (k*x + b) mod 52`.
pub fn encrypt_caesar_cipher(
    text: &str,
    k: impl Into<BigInt>,
    b: impl Into<BigInt>,
) -> Result<String> {
    CaesarCipher::new(AffineKey::new(k, b)).encrypt(text)
}

/// Decrypt a text produced by [`encrypt_caesar_cipher`] with the same key.
pub fn decrypt_caesar_cipher(
    text: &str,
    k: impl Into<BigInt>,
    b: impl Into<BigInt>,
) -> Result<String> {
    CaesarCipher::new(AffineKey::new(k, b)).decrypt(&text.to_string())
}

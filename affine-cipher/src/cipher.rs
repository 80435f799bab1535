//! Generic text cipher trait

use crate::error::Result;

/// Trait for a cipher that turns letter text into some ciphertext and back
pub trait TextCipher {
    /// Ciphertext representation produced by this cipher
    type Ciphertext;

    /// Encrypts a whole text
    fn encrypt(&self, plaintext: &str) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext produced by [`TextCipher::encrypt`]
    fn decrypt(&self, ciphertext: &Self::Ciphertext) -> Result<String>;
}

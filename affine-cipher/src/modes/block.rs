//! Decimal block cipher mode
//!
//! Letters are packed `width` at a time into one decimal number (two digits
//! per letter), each block is run through the affine transform modulo
//! `5252...52` (`width` copies of 52), and the encrypted blocks are written
//! back as fixed `2 * width` digit groups concatenated into one big integer.
//!
//! Blocks are cut from the end of the text, so only the leftmost block can be
//! partial. Leading zero letters (`A`) are indistinguishable from padding in
//! the integer, which is why decryption needs the plaintext length.

use num_bigint::{BigInt, BigUint};
use tracing::{debug, trace};

use crate::affine::{self, AffineKey};
use crate::alphabet;
use crate::cipher::TextCipher;
use crate::error::{AffineCipherError, Result};
use crate::utils;

/// Output of block encryption together with the plaintext letter count
/// needed to undo the zero padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCiphertext {
    pub value: BigUint,
    pub length: usize,
}

/// Affine cipher over fixed-width decimal blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCipher {
    key: AffineKey,
    width: usize,
    modulus: BigInt,
}

impl BlockCipher {
    /// Create a block cipher packing `width` letters per block.
    ///
    /// Fails with `InvalidBlockWidth` when `width == 0`.
    pub fn new(key: AffineKey, width: usize) -> Result<Self> {
        let modulus = BigInt::from(utils::block_modulus(width)?);
        Ok(Self { key, width, modulus })
    }

    pub fn key(&self) -> &AffineKey {
        &self.key
    }

    /// Letters per block
    pub fn width(&self) -> usize {
        self.width
    }

    /// Modulus used for every block
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Decimal digits per serialised block
    pub fn block_digits(&self) -> usize {
        2 * self.width
    }

    /// Encrypt `text` into a single decimal integer.
    ///
    /// The empty text encrypts to `0`.
    pub fn encrypt_to_integer(&self, text: &str) -> Result<BigUint> {
        let indices = alphabet::text_to_indices(text)?;
        let block_digits = self.block_digits();

        // rchunks cuts from the end; reverse to restore left-to-right order
        let mut blocks: Vec<&[u8]> = indices.rchunks(self.width).collect();
        blocks.reverse();
        debug!(
            letters = indices.len(),
            blocks = blocks.len(),
            width = self.width,
            modulus = %self.modulus,
            "block encrypt"
        );

        let mut serialised = String::with_capacity(blocks.len() * block_digits);
        for block in blocks {
            let packed = utils::concatenate_indices(block);
            let value = BigInt::from(utils::digits_to_biguint(packed.as_bytes()));
            let encrypted = affine::encrypt_value(&value, &self.key, &self.modulus)?;
            trace!(%value, %encrypted, "encrypted block");

            serialised.push_str(&utils::zero_pad(&encrypted.to_string(), block_digits));
        }

        Ok(utils::digits_to_biguint(serialised.as_bytes()))
    }

    /// Decrypt a ciphertext integer back into the last `length` letters.
    ///
    /// The decimal form is left-padded to whole blocks, every block is
    /// decrypted and split into two-digit letter indices, and only the
    /// trailing `length` letters are kept.
    ///
    /// When `length` needs more blocks than the integer holds, the missing
    /// leading blocks are taken to be encrypted zeros. This is how an
    /// encrypted first block equal to `0` is recovered, but it also means an
    /// overstated `length` yields extra letters instead of an error. A length
    /// that cannot be allocated is `InvalidLength`.
    pub fn decrypt_integer(&self, ciphertext: &BigUint, length: usize) -> Result<String> {
        let k_inverse = self.key.inverse_k(&self.modulus)?;
        if length == 0 {
            return Ok(String::new());
        }

        let block_digits = self.block_digits();
        let digits = utils::pad_to_blocks(&ciphertext.to_string(), block_digits);
        let blocks: Vec<&[u8]> = digits.as_bytes().chunks(block_digits).collect();

        let needed_blocks = length.div_ceil(self.width);
        let mut skip = needed_blocks
            .checked_mul(self.width)
            .ok_or(AffineCipherError::InvalidLength(length))?
            - length;
        let missing_blocks = needed_blocks.saturating_sub(blocks.len());
        let kept = &blocks[blocks.len().saturating_sub(needed_blocks)..];
        debug!(
            length,
            blocks = blocks.len(),
            missing_blocks,
            width = self.width,
            "block decrypt"
        );

        let mut letters = String::new();
        letters
            .try_reserve_exact(length)
            .map_err(|_| AffineCipherError::InvalidLength(length))?;

        if missing_blocks > 0 {
            let zero_block = self.decrypt_block(&vec![b'0'; block_digits], &k_inverse);
            for _ in 0..missing_blocks {
                push_letters(&zero_block, &mut skip, &mut letters)?;
            }
        }
        for chunk in kept {
            let indices = self.decrypt_block(chunk, &k_inverse);
            push_letters(&indices, &mut skip, &mut letters)?;
        }

        Ok(letters)
    }

    fn decrypt_block(&self, chunk: &[u8], k_inverse: &BigInt) -> Vec<u8> {
        let value = BigInt::from(utils::digits_to_biguint(chunk));
        let decrypted = affine::apply_inverse(&value, k_inverse, &self.key, &self.modulus);
        trace!(%value, %decrypted, "decrypted block");

        utils::split_indices(&utils::zero_pad(&decrypted.to_string(), self.block_digits()))
    }
}

/// Map index groups to letters after dropping the first `skip` of them.
fn push_letters(indices: &[u8], skip: &mut usize, letters: &mut String) -> Result<()> {
    for &index in indices {
        if *skip > 0 {
            *skip -= 1;
            continue;
        }
        letters.push(alphabet::index_to_letter(index)?);
    }
    Ok(())
}

impl TextCipher for BlockCipher {
    type Ciphertext = BlockCiphertext;

    fn encrypt(&self, plaintext: &str) -> Result<BlockCiphertext> {
        Ok(BlockCiphertext {
            value: self.encrypt_to_integer(plaintext)?,
            length: plaintext.chars().count(),
        })
    }

    fn decrypt(&self, ciphertext: &BlockCiphertext) -> Result<String> {
        self.decrypt_integer(&ciphertext.value, ciphertext.length)
    }
}

/// Encrypt `text` in blocks of `width` letters into one big integer.
pub fn encrypt_block_cipher(
    text: &str,
    k: impl Into<BigInt>,
    b: impl Into<BigInt>,
    width: usize,
) -> Result<BigUint> {
    BlockCipher::new(AffineKey::new(k, b), width)?.encrypt_to_integer(text)
}

/// Decrypt a block ciphertext; `original_length` is the plaintext letter count.
pub fn decrypt_block_cipher(
    ciphertext: &BigUint,
    k: impl Into<BigInt>,
    b: impl Into<BigInt>,
    width: usize,
    original_length: usize,
) -> Result<String> {
    BlockCipher::new(AffineKey::new(k, b), width)?.decrypt_integer(ciphertext, original_length)
}

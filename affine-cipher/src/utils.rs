//! Decimal digit helpers for the block codec

use num_bigint::BigUint;
use num_traits::Zero;

use crate::alphabet::ALPHABET_SIZE;
use crate::error::{AffineCipherError, Result};

/// Concatenate letter indices, each written as exactly two decimal digits.
///
/// `[8, 0, 38]` becomes `"080038"`.
pub fn concatenate_indices(indices: &[u8]) -> String {
    indices.iter().map(|index| format!("{:02}", index)).collect()
}

/// Split a digit string into two-digit groups and parse each as an index.
///
/// A trailing odd digit is ignored; callers always pass even-length strings
/// of ASCII digits.
pub fn split_indices(digits: &str) -> Vec<u8> {
    digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| (pair[0] - b'0') * 10 + (pair[1] - b'0'))
        .collect()
}

/// Parse a slice of ASCII decimal digits into a number.
pub fn digits_to_biguint(digits: &[u8]) -> BigUint {
    digits.iter().fold(BigUint::zero(), |acc, &digit| {
        acc * 10u32 + u32::from(digit - b'0')
    })
}

/// Left-pad a decimal string with zeros up to `width` characters.
pub fn zero_pad(digits: &str, width: usize) -> String {
    format!("{:0>width$}", digits, width = width)
}

/// Left-pad a decimal string so it splits into whole blocks of `block_width`
/// digits.
pub fn pad_to_blocks(digits: &str, block_width: usize) -> String {
    zero_pad(digits, digits.len().next_multiple_of(block_width))
}

/// Block-mode modulus: the alphabet size written `width` times in decimal.
///
/// `block_modulus(3)` is `525252`.
pub fn block_modulus(width: usize) -> Result<BigUint> {
    if width == 0 {
        return Err(AffineCipherError::InvalidBlockWidth);
    }

    let digits = ALPHABET_SIZE.to_string().repeat(width);
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(AffineCipherError::InvalidBlockWidth)
}

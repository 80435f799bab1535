//! The 52-letter alphabet: `A`..`Z` followed by `a`..`z`.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::error::{AffineCipherError, Result};

/// Number of symbols in the alphabet, and the stream cipher modulus.
pub const ALPHABET_SIZE: u8 = 52;

/// Uppercase letters first, then lowercase.
pub const LETTERS: &[u8; 52] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Map a letter to its zero-based index (`A` = 0, `Z` = 25, `a` = 26, `z` = 51).
pub fn letter_to_index(letter: char) -> Result<u8> {
    match letter {
        'A'..='Z' => Ok(letter as u8 - b'A'),
        'a'..='z' => Ok(letter as u8 - b'a' + 26),
        _ => Err(AffineCipherError::InvalidCharacter(letter)),
    }
}

/// Map an index in `0..52` back to its letter.
pub fn index_to_letter(index: u8) -> Result<char> {
    LETTERS
        .get(index as usize)
        .map(|&byte| byte as char)
        .ok_or(AffineCipherError::InvalidIndex(index as u32))
}

/// Convert a whole text into letter indices, failing on the first non-letter.
pub fn text_to_indices(text: &str) -> Result<Vec<u8>> {
    text.chars().map(letter_to_index).collect()
}

/// Render a number in base 52 using the alphabet as digit symbols.
///
/// The least significant digit comes first. Zero renders as the empty
/// string. The output is for display only and is never decoded.
pub fn stringify(value: &BigUint) -> String {
    let base = BigUint::from(ALPHABET_SIZE);
    let mut remaining = value.clone();
    let mut result = String::new();

    while !remaining.is_zero() {
        let (quotient, digit) = remaining.div_rem(&base);
        // digit < 52, so the conversion cannot fail
        let digit = digit.to_u8().unwrap_or_default();
        result.push(LETTERS[digit as usize] as char);
        remaining = quotient;
    }

    result
}

//! Error types for affine cipher operations

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AffineCipherError {
    #[error("Invalid character '{0}' (only A-Z and a-z are supported)")]
    InvalidCharacter(char),

    #[error("Letter index {0} is outside the alphabet (must be < 52)")]
    InvalidIndex(u32),

    #[error("Key coefficient {k} has no inverse modulo {modulus}")]
    NonInvertibleKey { k: BigInt, modulus: BigInt },

    #[error("Invalid modulus {0} (must be > 0)")]
    InvalidModulus(BigInt),

    #[error("Invalid block width (must be > 0)")]
    InvalidBlockWidth,

    #[error("Plaintext length {0} is too large to decode")]
    InvalidLength(usize),
}

pub type Result<T> = std::result::Result<T, AffineCipherError>;

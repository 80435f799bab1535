//! Affine transform `f(x) = (k*x + b) mod m` and its inverse.

use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::Rng;
use tracing::debug;

use crate::error::{AffineCipherError, Result};
use crate::number_theory::modular_inverse_extended;

/// Affine key: coefficient `k` and bias `b`.
///
/// A key is only meaningful relative to a modulus; see [`AffineKey::is_valid_for`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AffineKey {
    k: BigInt,
    b: BigInt,
}

impl AffineKey {
    pub fn new(k: impl Into<BigInt>, b: impl Into<BigInt>) -> Self {
        Self {
            k: k.into(),
            b: b.into(),
        }
    }

    /// Coefficient
    pub fn k(&self) -> &BigInt {
        &self.k
    }

    /// Bias
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// `true` if `k` is invertible modulo `modulus`, i.e. the key can decrypt.
    pub fn is_valid_for(&self, modulus: &BigInt) -> bool {
        modular_inverse_extended(&self.k, modulus).is_some()
    }

    /// Inverse of `k` modulo `modulus`.
    pub fn inverse_k(&self, modulus: &BigInt) -> Result<BigInt> {
        check_modulus(modulus)?;
        modular_inverse_extended(&self.k, modulus).ok_or_else(|| {
            AffineCipherError::NonInvertibleKey {
                k: self.k.clone(),
                modulus: modulus.clone(),
            }
        })
    }

    /// Draw a random key that is valid for `modulus`.
    ///
    /// `k` is sampled from `[1, modulus)` until it is coprime to the modulus,
    /// `b` is sampled from `[0, modulus)`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, modulus: &BigInt) -> Result<Self> {
        if *modulus <= BigInt::one() {
            return Err(AffineCipherError::InvalidModulus(modulus.clone()));
        }

        let mut attempts = 0u32;
        let k = loop {
            attempts += 1;
            let candidate = rng.gen_bigint_range(&BigInt::one(), modulus);
            if modular_inverse_extended(&candidate, modulus).is_some() {
                break candidate;
            }
        };
        let b = rng.gen_bigint_range(&BigInt::zero(), modulus);

        debug!(%modulus, attempts, "generated affine key");
        Ok(Self { k, b })
    }
}

fn check_modulus(modulus: &BigInt) -> Result<()> {
    if modulus.is_positive() {
        Ok(())
    } else {
        Err(AffineCipherError::InvalidModulus(modulus.clone()))
    }
}

/// Encrypt one value: `(k*x + b) mod m`, always in `[0, m)`.
///
/// Encryption never inverts `k`, so it succeeds even for keys that could not
/// decrypt. Fails only for `m <= 0`.
pub fn encrypt_value(x: &BigInt, key: &AffineKey, modulus: &BigInt) -> Result<BigInt> {
    check_modulus(modulus)?;
    Ok((&key.k * x + &key.b).mod_floor(modulus))
}

/// Decrypt one value: `k⁻¹ * (y - b) mod m`, always in `[0, m)`.
///
/// Fails with [`AffineCipherError::NonInvertibleKey`] when `gcd(k, m) != 1`.
pub fn decrypt_value(y: &BigInt, key: &AffineKey, modulus: &BigInt) -> Result<BigInt> {
    let k_inverse = key.inverse_k(modulus)?;
    Ok(apply_inverse(y, &k_inverse, key, modulus))
}

/// Decrypt with a precomputed inverse; the modes call this per letter or block.
pub(crate) fn apply_inverse(
    y: &BigInt,
    k_inverse: &BigInt,
    key: &AffineKey,
    modulus: &BigInt,
) -> BigInt {
    (k_inverse * (y - &key.b)).mod_floor(modulus)
}

//! Number theory primitives: gcd, extended Euclid and modular inverses.
//!
//! Everything here is generic over signed integer types implementing
//! [`num_integer::Integer`], so the same code runs on `i64` for the
//! 52-letter alphabet and on [`num_bigint::BigInt`] for block moduli.
//! Division and remainder always use floor semantics (`div_floor` /
//! `mod_floor`), never Rust's truncating `/` and `%`.

use num_integer::Integer;
use num_traits::Signed;

/// Greatest common divisor via the Euclidean algorithm.
///
/// Both arguments are normalised to their absolute value first, so the
/// result is never negative. `gcd(0, 0) == 0` and `gcd(x, 0) == |x|`.
pub fn gcd<T: Integer + Signed + Clone>(a: &T, b: &T) -> T {
    let mut a = a.abs();
    let mut b = b.abs();

    while !b.is_zero() {
        let remainder = a.mod_floor(&b);
        a = b;
        b = remainder;
    }

    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a * x + m * y == g`, where `g` is the gcd
/// of `a` and `m` (for non-negative inputs). The Bézout pair is deterministic:
/// the recursion bottoms out at `a == 0` with coefficients `(0, 1)` and each
/// level back-substitutes `x = y1 - (m div a) * x1`, `y = x1`.
///
/// ```text
/// extended_gcd(30, 20) == (10, 1, -1)
/// extended_gcd(35, 64) == (1, 11, -6)
/// ```
pub fn extended_gcd<T: Integer + Clone>(a: &T, m: &T) -> (T, T, T) {
    if a.is_zero() {
        return (m.clone(), T::zero(), T::one());
    }

    let (g, x1, y1) = extended_gcd(&m.mod_floor(a), a);
    let x = y1 - m.div_floor(a) * x1.clone();

    (g, x, x1)
}

/// Modular inverse by exhaustive search.
///
/// Scans `0..modulus` and returns the first `i` with
/// `(num mod modulus) * i mod modulus == 1`. Linear in `modulus`; kept as a
/// reference oracle for [`modular_inverse_extended`].
///
/// Returns `None` when `modulus <= 0` or no inverse exists.
pub fn modular_inverse_bruteforce<T: Integer + Clone>(num: &T, modulus: &T) -> Option<T> {
    if *modulus <= T::zero() {
        return None;
    }

    let residue = num.mod_floor(modulus);
    let mut candidate = T::zero();

    while candidate < *modulus {
        if (residue.clone() * candidate.clone()).mod_floor(modulus).is_one() {
            return Some(candidate);
        }
        candidate = candidate + T::one();
    }

    None
}

/// Modular inverse via the extended Euclidean algorithm.
///
/// `num` is reduced into `[0, modulus)` before running [`extended_gcd`], so
/// negative numbers get the same answer as [`modular_inverse_bruteforce`].
/// The result is always in `[0, modulus)`.
///
/// Returns `None` when `modulus <= 0`, when `gcd(num, modulus) != 1`, or when
/// `modulus == 1` (no residue is congruent to 1 there).
pub fn modular_inverse_extended<T: Integer + Clone>(num: &T, modulus: &T) -> Option<T> {
    if *modulus <= T::one() {
        return None;
    }

    let (g, x, _) = extended_gcd(&num.mod_floor(modulus), modulus);
    if !g.is_one() {
        return None;
    }

    Some((x.mod_floor(modulus) + modulus.clone()).mod_floor(modulus))
}

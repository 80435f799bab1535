//! Frozen known-answer scenarios for the public API.
//!
//! These are the sample runs the cipher was demonstrated with; any change in
//! output indicates a regression.
//!
//! Coverage:
//! - `number_theory` (gcd, extended Euclid, both inverses)
//! - Caesar mode (k = 17, b = 36)
//! - Block mode (k = 74695, b = 11923, width = 3)
//! - `stringify`

use affine_cipher::{
    AffineCipherError, decrypt_block_cipher, decrypt_caesar_cipher, encrypt_block_cipher,
    encrypt_caesar_cipher, extended_gcd, gcd, modular_inverse_bruteforce,
    modular_inverse_extended, stringify,
};
use num_bigint::BigUint;

const PLAINTEXT: &str = "IAmEatingSupperAndLearningDiscreteStructure";
const CAESAR_CIPHERTEXT: &str = "QkGAKVqXIemFFankXJPaKnXqXIjqEsnaVaeVnmsVmna";
const BLOCK_CIPHERTEXT: &str =
    "84231515623449317389097290910470627043568135232088628030445425108317161263072132558226461";

// ═══════════════════════════════════════════════════════════════════════
// Number theory
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn gcd_scenarios() {
    assert_eq!(gcd(&48i64, &18), 6);
    assert_eq!(gcd(&0i64, &5), 5);
    assert_eq!(gcd(&-48i64, &-18), 6);
    assert_eq!(gcd(&0i64, &0), 0);
}

#[test]
fn extended_gcd_scenarios() {
    assert_eq!(extended_gcd(&30i64, &20), (10, 1, -1));
    assert_eq!(extended_gcd(&35i64, &64), (1, 11, -6));
}

#[test]
fn inverse_scenarios() {
    let cases: [(i64, i64, Option<i64>); 5] = [
        (3, 11, Some(4)),
        (10, 17, Some(12)),
        (3, 6, None),
        (0, 5, None),
        (3, -11, None),
    ];

    for (num, modulus, expected) in cases {
        assert_eq!(
            modular_inverse_bruteforce(&num, &modulus),
            expected,
            "bruteforce({}, {})",
            num,
            modulus
        );
        assert_eq!(
            modular_inverse_extended(&num, &modulus),
            expected,
            "extended({}, {})",
            num,
            modulus
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Caesar mode
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_encrypt_scenario() {
    assert_eq!(
        encrypt_caesar_cipher(PLAINTEXT, 17, 36).unwrap(),
        CAESAR_CIPHERTEXT
    );
}

#[test]
fn caesar_decrypt_scenario() {
    assert_eq!(
        decrypt_caesar_cipher(CAESAR_CIPHERTEXT, 17, 36).unwrap(),
        PLAINTEXT
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Block mode
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn block_encrypt_scenario() {
    let expected: BigUint = BLOCK_CIPHERTEXT.parse().unwrap();
    assert_eq!(
        encrypt_block_cipher(PLAINTEXT, 74695, 11923, 3).unwrap(),
        expected
    );
}

#[test]
fn block_decrypt_scenario() {
    let ciphertext: BigUint = BLOCK_CIPHERTEXT.parse().unwrap();
    assert_eq!(
        decrypt_block_cipher(&ciphertext, 74695, 11923, 3, PLAINTEXT.len()).unwrap(),
        PLAINTEXT
    );
}

#[test]
fn block_decrypt_partial_leading_block() {
    // 43 letters do not divide into blocks of 3 or 4
    for width in [2usize, 3, 4, 5] {
        let ciphertext = encrypt_block_cipher(PLAINTEXT, 74695, 11923, width).unwrap();
        assert_eq!(
            decrypt_block_cipher(&ciphertext, 74695, 11923, width, PLAINTEXT.len()).unwrap(),
            PLAINTEXT,
            "width={}",
            width
        );
    }
}

#[test]
fn block_ciphertext_stringified() {
    let ciphertext: BigUint = BLOCK_CIPHERTEXT.parse().unwrap();
    assert_eq!(
        stringify(&ciphertext),
        "lKTlfGxMLWspelyMMFXPQByLmhEJRHqcCuNyqJMQMWGqouvULYiZ"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn non_letters_are_rejected() {
    assert_eq!(
        encrypt_caesar_cipher("I Am", 17, 36),
        Err(AffineCipherError::InvalidCharacter(' '))
    );
    assert_eq!(
        encrypt_block_cipher("Ünicode", 74695, 11923, 3),
        Err(AffineCipherError::InvalidCharacter('Ü'))
    );
}

#[test]
fn non_invertible_keys_fail_only_on_decrypt() {
    let caesar = encrypt_caesar_cipher(PLAINTEXT, 26, 1).unwrap();
    assert!(matches!(
        decrypt_caesar_cipher(&caesar, 26, 1),
        Err(AffineCipherError::NonInvertibleKey { .. })
    ));

    let block = encrypt_block_cipher(PLAINTEXT, 3, 1, 3).unwrap();
    assert!(matches!(
        decrypt_block_cipher(&block, 3, 1, 3, PLAINTEXT.len()),
        Err(AffineCipherError::NonInvertibleKey { .. })
    ));
}

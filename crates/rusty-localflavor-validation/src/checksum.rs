//! Weighted-digit checksums (the Dutch "elfproef")
//!
//! Both functions expect a string of ASCII digits of the exact length and
//! return `false` for anything else instead of panicking.

const MODULO: u32 = 11;

/// BSN weights, leftmost digit first. The check digit counts negatively.
const BSN_WEIGHTS: [i32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, -1];

/// Bank account weights, leftmost digit first.
const BANK_ACCOUNT_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

fn digits(value: &str) -> Option<Vec<u32>> {
    value.chars().map(|c| c.to_digit(10)).collect()
}

/// 9-digit BSN/SoFi check: `9*d0 + 8*d1 + ... + 2*d7 - d8` divisible by 11.
pub fn bsn_checksum_ok(value: &str) -> bool {
    let Some(digits) = digits(value) else {
        return false;
    };
    if digits.len() != BSN_WEIGHTS.len() {
        return false;
    }

    let sum: i32 = digits
        .iter()
        .zip(BSN_WEIGHTS)
        .map(|(&d, w)| d as i32 * w)
        .sum();

    sum.rem_euclid(MODULO as i32) == 0
}

/// 10-digit bank account check: `1*d0 + 2*d1 + ... + 10*d9` divisible by 11.
///
/// Reversing the weights (10 down to 1) negates every term modulo 11, so the
/// outcome does not depend on the direction the weights are assigned.
pub fn eleven_test_ok(value: &str) -> bool {
    let Some(digits) = digits(value) else {
        return false;
    };
    if digits.len() != BANK_ACCOUNT_WEIGHTS.len() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .zip(BANK_ACCOUNT_WEIGHTS)
        .map(|(&d, w)| d * w)
        .sum();

    sum % MODULO == 0
}

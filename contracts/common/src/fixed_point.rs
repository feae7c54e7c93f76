//! Checked fixed-point helpers for reward accounting.
//!
//! Every accumulator update multiplies before it divides so precision is only
//! lost once, at the final truncating division. Truncation always rounds
//! toward zero, which favours the contract over the claimant.
//!
//! Intermediate products are taken in 256 bits: with 1e18 scaling an `i128`
//! product overflows as soon as a large stake meets an accumulator grown by
//! a dust stake. Only the final quotient has to fit in `i128`.

use soroban_sdk::{Env, I256};

/// Fixed-point scale of per-share accumulators (10^18).
pub const ACC_PRECISION: i128 = 1_000_000_000_000_000_000;

/// Denominator of basis-point rates.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// `a * b / d` with a 256-bit intermediate product.
///
/// Returns `None` if `d` is zero or the quotient does not fit in `i128`.
pub fn mul_div(env: &Env, a: i128, b: i128, d: i128) -> Option<i128> {
    if d == 0 {
        return None;
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, d))
        .to_i128()
}

/// Scales `amount` by a per-share accumulator: `amount * acc / ACC_PRECISION`.
pub fn scale_down(env: &Env, amount: i128, acc: i128) -> Option<i128> {
    mul_div(env, amount, acc, ACC_PRECISION)
}

/// Per-share increment for distributing `reward` over `shares`:
/// `reward * ACC_PRECISION / shares`.
pub fn per_share(env: &Env, reward: i128, shares: i128) -> Option<i128> {
    mul_div(env, reward, ACC_PRECISION, shares)
}

/// Basis-point portion of `amount`, rounded down.
pub fn bps_of(env: &Env, amount: i128, bps: u32) -> Option<i128> {
    mul_div(env, amount, bps as i128, BPS_DENOMINATOR)
}

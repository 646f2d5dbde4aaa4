//! # Arith — Overflow-Safe Modular Arithmetic
//!
//! The two primitives every primality verdict rests on:
//!
//! 1. **Wide multiply-mod** (`mul_mod`): (a·b) mod m with the product formed
//!    in a u128 intermediate, exact for the full u64 operand range.
//! 2. **Modular exponentiation** (`pow_mod`): binary square-and-multiply on
//!    top of `mul_mod`, O(log₂ exp) multiplications.
//!
//! Both are pure functions of their inputs. Overflow is prevented
//! structurally by widening before multiplication rather than detected after
//! the fact, so neither function has an error path.

/// (a · b) mod m, exact even when a·b overflows u64.
///
/// Both operands are widened to u128 before the multiply, reduced mod m,
/// and narrowed back. Requires m > 0; callers guarantee this (the top-level
/// classifier never invokes modular arithmetic with a degenerate modulus).
#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "mul_mod requires a positive modulus");
    (a as u128 * b as u128 % m as u128) as u64
}

/// Modular exponentiation: base^exp mod modulus.
/// Uses u128 intermediates to avoid overflow for the full u64 modulus range.
pub fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result: u64 = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp >>= 1;
        base = mul_mod(base, base, modulus);
    }
    result
}

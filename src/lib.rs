//! # primecheck — Deterministic Primality Verdicts for 64-bit Integers
//!
//! One decision function: given a signed 64-bit candidate, return
//! [`Verdict::Prime`] or [`Verdict::Composite`] with no undetermined state.
//! The verdict is computed by the Miller–Rabin strong-pseudoprime test over
//! the fixed witness set {2, 3, 5, 7, 11, 13, 17}, with all intermediate
//! products widened to 128 bits so no input in the domain can overflow.
//!
//! The crate is layered bottom-up:
//!
//! 1. [`arith`] — wide multiply-mod and binary modular exponentiation.
//! 2. [`miller_rabin`] — decomposition, the single-base witness check, and
//!    the top-level classifier.
//!
//! Every operation is a pure function of its inputs with no shared state,
//! so concurrent callers need no coordination.
//!
//! ```
//! use primecheck::{classify, is_prime, Verdict};
//!
//! assert_eq!(classify(2_147_483_647), Verdict::Prime);
//! assert_eq!(classify(9409), Verdict::Composite); // 97²
//! assert!(!is_prime(-5));
//! ```

pub mod arith;
pub mod miller_rabin;

pub use miller_rabin::{classify, is_prime, Verdict};

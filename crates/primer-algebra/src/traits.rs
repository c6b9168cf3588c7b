//! Algebraic structure traits.
//!
//! These traits describe the operations shared by the number types in this
//! crate. Unlike the usual textbook hierarchy, multiplication is not assumed
//! to be commutative: quaternions are the motivating example.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition on both sides
/// - Every element has an additive inverse (`neg`)
///
/// Floating point implementations satisfy these laws only up to rounding.
pub trait Ring:
    Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times).
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n.
    ///
    /// Powers of a single element always commute, so square-and-multiply is
    /// valid even when the ring is not commutative.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A ring with an involution `*` (conjugation).
///
/// # Laws
///
/// - `conj(conj(x)) = x`
/// - `conj(x + y) = conj(x) + conj(y)`
/// - `conj(x * y) = conj(y) * conj(x)` (note the reversed order)
pub trait StarRing: Ring {
    /// Returns the conjugate of this element.
    #[must_use]
    fn conjugate(&self) -> Self;
}

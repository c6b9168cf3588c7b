//! Immutable quaternions over `f64`.
//!
//! A quaternion `a + bi + cj + dk` is stored as its four real coefficients.
//! Every operation returns a new value; nothing is ever mutated in place.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use thiserror::Error;

use crate::traits::{Ring, StarRing};

/// Errors raised when constructing a quaternion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum QuaternionError {
    /// One of the coefficients was NaN.
    #[error("coefficient `{component}` is not a number")]
    InvalidCoefficient {
        /// The offending coefficient: `a`, `b`, `c` or `d`.
        component: char,
    },
}

/// A quaternion with real coefficients.
///
/// No coefficient is ever NaN when built through [`Quaternion::new`].
/// Arithmetic on infinite coefficients can still produce NaN (for example
/// `inf + -inf`); use [`Quaternion::checked_plus`] and
/// [`Quaternion::checked_times`] when that matters.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    /// The additive identity, `0`.
    pub const ZERO: Self = Self::from_parts(0.0, 0.0, 0.0, 0.0);
    /// The multiplicative identity, `1`.
    pub const ONE: Self = Self::from_parts(1.0, 0.0, 0.0, 0.0);
    /// The unit `i`.
    pub const I: Self = Self::from_parts(0.0, 1.0, 0.0, 0.0);
    /// The unit `j`.
    pub const J: Self = Self::from_parts(0.0, 0.0, 1.0, 0.0);
    /// The unit `k`.
    pub const K: Self = Self::from_parts(0.0, 0.0, 0.0, 1.0);

    const fn from_parts(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Creates the quaternion `a + bi + cj + dk`.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::InvalidCoefficient`] naming the first
    /// coefficient that is NaN.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, QuaternionError> {
        for (component, value) in ['a', 'b', 'c', 'd'].into_iter().zip([a, b, c, d]) {
            if value.is_nan() {
                return Err(QuaternionError::InvalidCoefficient { component });
            }
        }
        Ok(Self::from_parts(a, b, c, d))
    }

    /// Creates a purely real quaternion.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::InvalidCoefficient`] if `a` is NaN.
    pub fn real(a: f64) -> Result<Self, QuaternionError> {
        Self::new(a, 0.0, 0.0, 0.0)
    }

    /// Returns the scalar part.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Returns the `i` coefficient.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Returns the `j` coefficient.
    #[must_use]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Returns the `k` coefficient.
    #[must_use]
    pub const fn d(&self) -> f64 {
        self.d
    }

    /// Returns the coefficients in the order `[a, b, c, d]`.
    #[must_use]
    pub const fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the component-wise sum.
    #[must_use]
    pub fn plus(&self, q: &Self) -> Self {
        Self::from_parts(self.a + q.a, self.b + q.b, self.c + q.c, self.d + q.d)
    }

    /// Returns the Hamilton product `self * q`.
    ///
    /// The product is not commutative: `i * j = k` but `j * i = -k`.
    #[must_use]
    pub fn times(&self, q: &Self) -> Self {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        Self::from_parts(
            a * q.a - b * q.b - c * q.c - d * q.d,
            a * q.b + b * q.a + c * q.d - d * q.c,
            a * q.c - b * q.d + c * q.a + d * q.b,
            a * q.d + b * q.c - c * q.b + d * q.a,
        )
    }

    /// Returns `a - bi - cj - dk`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(self.a, -self.b, -self.c, -self.d)
    }

    /// Like [`Quaternion::plus`], but rejects a NaN result.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::InvalidCoefficient`] if the sum has a NaN
    /// coefficient.
    pub fn checked_plus(&self, q: &Self) -> Result<Self, QuaternionError> {
        let [a, b, c, d] = self.plus(q).coefficients();
        Self::new(a, b, c, d)
    }

    /// Like [`Quaternion::times`], but rejects a NaN result.
    ///
    /// # Errors
    ///
    /// Returns [`QuaternionError::InvalidCoefficient`] if the product has a
    /// NaN coefficient.
    pub fn checked_times(&self, q: &Self) -> Result<Self, QuaternionError> {
        let [a, b, c, d] = self.times(q).coefficients();
        Self::new(a, b, c, d)
    }

    /// Returns `a² + b² + c² + d²`, the scalar part of `q * conj(q)`.
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.a * self.a + self.b * self.b + self.c * self.c + self.d * self.d
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }
}

/// Whole numbers keep exactly one decimal digit (`2.0`); anything else uses
/// the shortest representation that round-trips. Neither form switches to
/// exponent notation, and infinities print as `inf`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.1}")
    } else {
        format!("{n}")
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion({:?}, {:?}, {:?}, {:?})", self.a, self.b, self.c, self.d)
    }
}

impl fmt::Display for Quaternion {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut out = String::new();
        if self.a != 0.0 {
            out.push_str(&format_number(self.a));
        }
        for (value, unit) in [(self.b, 'i'), (self.c, 'j'), (self.d, 'k')] {
            if value == 0.0 {
                continue;
            }
            out.push(if value < 0.0 { '-' } else { '+' });
            let magnitude = value.abs();
            if magnitude != 1.0 {
                out.push_str(&format_number(magnitude));
            }
            out.push(unit);
        }

        f.write_str(out.strip_prefix('+').unwrap_or(&out))
    }
}

impl TryFrom<[f64; 4]> for Quaternion {
    type Error = QuaternionError;

    fn try_from([a, b, c, d]: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(a, b, c, d)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.coefficients()
    }
}

// Arithmetic operations
impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Add for &Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.plus(&-rhs)
    }
}

impl Sub for &Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Self) -> Self::Output {
        self.plus(&-rhs)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(&rhs)
    }
}

impl Mul for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.a, -self.b, -self.c, -self.d)
    }
}

impl Neg for &Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Ring for Quaternion {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn is_zero(&self) -> bool {
        self.coefficients() == [0.0; 4]
    }

    fn is_one(&self) -> bool {
        self.coefficients() == [1.0, 0.0, 0.0, 0.0]
    }
}

impl StarRing for Quaternion {
    fn conjugate(&self) -> Self {
        Quaternion::conjugate(self)
    }
}

impl num_traits::Zero for Quaternion {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Ring::is_zero(self)
    }
}

impl num_traits::One for Quaternion {
    fn one() -> Self {
        Self::ONE
    }
}

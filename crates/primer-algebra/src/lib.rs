//! # primer-algebra
//!
//! Algebraic structures for the Primer exercises.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `StarRing`
//! - An immutable quaternion type with the Hamilton product
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── StarRing (ring with conjugation)
//! ```
//!
//! ## Example
//!
//! ```
//! use primer_algebra::Quaternion;
//!
//! let product = Quaternion::I * Quaternion::J;
//! assert_eq!(product, Quaternion::K);
//! assert_eq!((Quaternion::J * Quaternion::I).to_string(), "-k");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod quaternion;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use quaternion::{Quaternion, QuaternionError};
pub use traits::{Ring, StarRing};

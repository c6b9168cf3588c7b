//! # primer-exercises
//!
//! Warm-up exercises that sit beside the core algebra and tree crates.
//!
//! - [`search`]: apply a function to the first element matching a predicate
//! - [`phrase`]: an immutable, chainable sentence builder
//! - [`lines`]: count the meaningful lines of a text source
//! - [`powers`]: sequences and sums of powers
//!
//! Only [`lines`] performs I/O, and it is the only module that logs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lines;
pub mod phrase;
pub mod powers;
pub mod search;

#[cfg(test)]
mod proptests;

pub use lines::{
    meaningful_line_count, meaningful_line_count_in, meaningful_line_count_with, LineCountError,
    LineFilter,
};
pub use phrase::{say, say_nothing, Phrase};
pub use powers::{powers_of, powers_up_to, sum_of_powers, Powers};
pub use search::{first_then_apply, first_then_lower_case};

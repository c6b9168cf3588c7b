//! # Primer
//!
//! Small, self-contained exercises in idiomatic Rust.
//!
//! ## Features
//!
//! - **Quaternions**: immutable values with the Hamilton product and a
//!   canonical text form
//! - **Persistent Search Tree**: copy-on-insert with structural sharing
//! - **Exercises**: predicate search, a phrase builder, line counting and
//!   power sequences
//!
//! ## Quick Start
//!
//! ```
//! use primer::prelude::*;
//!
//! let q = Quaternion::new(1.0, 2.0, 0.0, 0.0)?;
//! assert_eq!(q.to_string(), "1.0+2.0i");
//!
//! let tree: StringTree = ["b", "a", "c"].into_iter().map(String::from).collect();
//! assert_eq!(tree.to_string(), "((a)b(c))");
//!
//! assert_eq!(say("hello").and("world").phrase(), "hello world");
//! # Ok::<(), QuaternionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use primer_algebra as algebra;
pub use primer_exercises as exercises;
pub use primer_tree as tree;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use primer_algebra::{Quaternion, QuaternionError, Ring, StarRing};
    pub use primer_exercises::{
        first_then_apply, first_then_lower_case, meaningful_line_count, meaningful_line_count_in,
        powers_of, say, LineCountError, LineFilter, Phrase,
    };
    pub use primer_tree::{SearchTree, StringTree};
}

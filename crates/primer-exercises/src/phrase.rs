//! A chainable, immutable sentence builder.
//!
//! ```
//! use primer_exercises::phrase::say;
//!
//! assert_eq!(say("hi").and("there").and("friend").phrase(), "hi there friend");
//! ```

use std::fmt;

/// An ordered sequence of words.
///
/// [`Phrase::and`] returns a new phrase; the receiver is never changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Phrase {
    words: Vec<String>,
}

impl Phrase {
    /// Creates a phrase with no words.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Returns a new phrase with `word` appended.
    #[must_use]
    pub fn and(&self, word: impl Into<String>) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend(self.words.iter().cloned());
        words.push(word.into());
        Self { words }
    }

    /// Returns the words joined by single spaces.
    ///
    /// Empty words still contribute their separator, so
    /// `say("").and("").phrase()` is a single space.
    #[must_use]
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    /// Returns the words collected so far.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

/// Starts a phrase with one word.
#[must_use]
pub fn say(word: impl Into<String>) -> Phrase {
    Phrase::new().and(word)
}

/// Starts a phrase with no words.
#[must_use]
pub fn say_nothing() -> Phrase {
    Phrase::new()
}

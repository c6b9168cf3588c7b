//! Counting meaningful lines of text.
//!
//! A line is meaningful when, after trimming surrounding ASCII control
//! characters and spaces (everything up to `' '`), it is non-empty and does not start with the comment marker (`#` by default).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while counting lines.
#[derive(Debug, Error)]
pub enum LineCountError {
    /// The file could not be opened.
    #[error("failed to open {}", path.display())]
    Open {
        /// The path that was opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line could not be read (including invalid UTF-8).
    #[error("failed to read line {line}")]
    Read {
        /// One-based number of the line that failed.
        line: usize,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Configuration for deciding which lines count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineFilter {
    /// Lines whose trimmed content starts with this marker are comments.
    /// An empty marker disables comment detection.
    pub comment_marker: String,
}

impl Default for LineFilter {
    fn default() -> Self {
        Self {
            comment_marker: "#".to_string(),
        }
    }
}

impl LineFilter {
    /// Creates a filter with a custom comment marker.
    #[must_use]
    pub fn with_comment_marker(marker: impl Into<String>) -> Self {
        Self {
            comment_marker: marker.into(),
        }
    }

    /// Returns true if `line` should be counted.
    #[must_use]
    pub fn is_meaningful(&self, line: &str) -> bool {
        let trimmed = line.trim_matches(|c: char| c <= ' ');
        if trimmed.is_empty() {
            return false;
        }
        self.comment_marker.is_empty() || !trimmed.starts_with(self.comment_marker.as_str())
    }
}

/// Counts meaningful lines read from `reader`, using the default filter.
///
/// # Errors
///
/// Returns [`LineCountError::Read`] if a line cannot be read.
pub fn meaningful_line_count<R: BufRead>(reader: R) -> Result<usize, LineCountError> {
    meaningful_line_count_with(reader, &LineFilter::default())
}

/// Counts lines read from `reader` that `filter` considers meaningful.
///
/// # Errors
///
/// Returns [`LineCountError::Read`] if a line cannot be read.
pub fn meaningful_line_count_with<R: BufRead>(
    reader: R,
    filter: &LineFilter,
) -> Result<usize, LineCountError> {
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LineCountError::Read {
            line: index + 1,
            source,
        })?;
        if filter.is_meaningful(&line) {
            count += 1;
        }
    }
    Ok(count)
}

/// Opens the file at `path` and counts its meaningful lines.
///
/// The file is closed before this returns.
///
/// # Errors
///
/// Returns [`LineCountError::Open`] if the file cannot be opened and
/// [`LineCountError::Read`] if a line cannot be read.
pub fn meaningful_line_count_in(path: impl AsRef<Path>) -> Result<usize, LineCountError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "cannot open file for line counting");
        LineCountError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let count = meaningful_line_count(BufReader::new(file))?;
    debug!(path = %path.display(), count, "counted meaningful lines");
    Ok(count)
}

//! Source positions.

use std::fmt;

/// The 1-indexed line and column number of a character in the source code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextPoint(pub usize, pub usize);
impl TextPoint {
    /// Returns the 1-indexed line number of this text point.
    pub fn line(self) -> usize {
        self.0
    }
    /// Returns the 1-indexed column number of this text point.
    pub fn column(self) -> usize {
        self.1
    }
}
impl fmt::Display for TextPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line(), self.column())
    }
}

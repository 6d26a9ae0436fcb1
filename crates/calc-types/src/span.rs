use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location span.
///
/// Offsets are byte positions into the expression text, half-open
/// (`start..end`). Calculator input is a single line, so byte offsets are
/// all the later stages need to rewrite or underline a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a zero-width span at a single position.
    pub fn point(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    /// Merge two spans into one that covers both.
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    /// Returns `true` for a zero-width span.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The span as a `usize` range, for slicing the source text.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Display for Span {
    /// Renders the 1-based column of the span start.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col {}", self.start + 1)
    }
}

/// Holds the expression text for error reporting.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub source: String,
}

impl SourceText {
    /// Create a new source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Extract the text covered by `span`.
    ///
    /// Returns `None` if the span is out of range or does not fall on
    /// character boundaries.
    pub fn slice(&self, span: Span) -> Option<&str> {
        self.source.get(span.range())
    }

    /// Returns `true` if the text contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_point() {
        let s = Span::point(5);
        assert_eq!(s.start, 5);
        assert_eq!(s.end, 5);
        assert!(s.is_empty());
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(4, 9);
        let b = Span::new(2, 6);
        let merged = a.merge(b);
        assert_eq!(merged, Span::new(2, 9));
        assert_eq!(merged.len(), 7);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(format!("{}", Span::new(0, 3)), "col 1");
        assert_eq!(format!("{}", Span::new(6, 7)), "col 7");
    }

    #[test]
    fn test_source_slice() {
        let src = SourceText::new("sqrt(16)");
        assert_eq!(src.slice(Span::new(0, 4)), Some("sqrt"));
        assert_eq!(src.slice(Span::new(5, 7)), Some("16"));
        assert_eq!(src.slice(Span::new(5, 40)), None);
    }

    #[test]
    fn test_source_slice_multibyte() {
        // `π` is two bytes in UTF-8
        let src = SourceText::new("2*π");
        assert_eq!(src.slice(Span::new(2, 4)), Some("π"));
        assert_eq!(src.slice(Span::new(2, 3)), None);
    }

    #[test]
    fn test_source_blank() {
        assert!(SourceText::new("").is_blank());
        assert!(SourceText::new(" \t ").is_blank());
        assert!(!SourceText::new(" 1 ").is_blank());
    }

    #[test]
    fn test_span_determinism_100_iterations() {
        let a = Span::new(1, 5);
        let b = Span::new(3, 8);
        let first = a.merge(b);
        for i in 0..100 {
            assert_eq!(first, a.merge(b), "Determinism failure at iteration {i}");
        }
    }
}

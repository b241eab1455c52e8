use serde::Serialize;

use crate::text::newline::original_offset;

/// Half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn as_std(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// The covered text, or `""` when the range does not fit `src`.
    pub fn slice<'s>(&self, src: &'s str) -> &'s str {
        src.get(self.as_std()).unwrap_or_default()
    }

    /// Translate a range over `\n`-normalized text back onto the original input.
    pub fn to_original(&self, cr_offsets: &[usize]) -> Range {
        Range::new(
            original_offset(cr_offsets, self.start),
            original_offset(cr_offsets, self.end),
        )
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(range: Range) -> Self {
        range.as_std()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_empty_range() {
        let range = Range::at(4);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(!range.contains(4));
    }

    #[rstest::rstest]
    fn test_contains_is_half_open() {
        let range = Range::new(2, 5);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[rstest::rstest]
    fn test_slice() {
        let src = "key: value";
        assert_eq!(Range::new(5, 10).slice(src), "value");
        assert_eq!(Range::new(5, 99).slice(src), "");
    }

    #[rstest::rstest]
    fn test_to_original_shifts_past_crlf() {
        // normalized "a\nbc\nd" from "a\r\nbc\r\nd"
        let cr = [1, 4];
        assert_eq!(Range::new(2, 4).to_original(&cr), Range::new(3, 5));
        assert_eq!(Range::new(0, 6).to_original(&cr), Range::new(0, 8));
        assert_eq!(Range::new(0, 1).to_original(&[]), Range::new(0, 1));
    }
}

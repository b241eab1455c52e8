use std::borrow::Cow;

use memchr::{memchr, memchr_iter};

/// Source text with every `\r\n` and lone `\r` rewritten to `\n`.
///
/// `cr_offsets` holds, in ascending order, the offsets in `src` of each `\n` that replaced a
/// `\r\n` pair. Those are the only places where normalized and original offsets drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<'a> {
    pub src: Cow<'a, str>,
    pub cr_offsets: Vec<usize>,
}

impl Normalized<'_> {
    pub fn as_str(&self) -> &str {
        &self.src
    }

    /// Map an offset in the normalized text back to the original input.
    pub fn original_offset(&self, offset: usize) -> usize {
        original_offset(&self.cr_offsets, offset)
    }

    /// Map an offset in the original input into the normalized text.
    pub fn normalized_offset(&self, offset: usize) -> usize {
        normalized_offset(&self.cr_offsets, offset)
    }
}

pub fn normalize_line_endings(input: &str) -> Normalized<'_> {
    let bytes = input.as_bytes();
    if memchr(b'\r', bytes).is_none() {
        return Normalized {
            src: Cow::Borrowed(input),
            cr_offsets: Vec::new(),
        };
    }

    let mut out = String::with_capacity(input.len());
    let mut cr_offsets = Vec::new();
    let mut last = 0;
    for idx in memchr_iter(b'\r', bytes) {
        out.push_str(&input[last..idx]);
        if bytes.get(idx + 1) == Some(&b'\n') {
            cr_offsets.push(out.len());
        } else {
            out.push('\n');
        }
        last = idx + 1;
    }
    out.push_str(&input[last..]);

    Normalized {
        src: Cow::Owned(out),
        cr_offsets,
    }
}

pub fn original_offset(cr_offsets: &[usize], offset: usize) -> usize {
    offset + cr_offsets.partition_point(|&cr| cr < offset)
}

pub fn normalized_offset(cr_offsets: &[usize], offset: usize) -> usize {
    // the k-th removed '\r' sat at cr_offsets[k] + k in the original input
    let removed = cr_offsets
        .iter()
        .enumerate()
        .take_while(|&(k, &cr)| cr + k < offset)
        .count();
    offset - removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_no_carriage_returns_borrows() {
        let normalized = normalize_line_endings("a\nb");
        assert!(matches!(normalized.src, Cow::Borrowed("a\nb")));
        assert!(normalized.cr_offsets.is_empty());
    }

    #[rstest::rstest]
    fn test_crlf_pairs_are_recorded() {
        let normalized = normalize_line_endings("ab\r\ncd\r\ne");
        assert_eq!(normalized.as_str(), "ab\ncd\ne");
        assert_eq!(normalized.cr_offsets, vec![2, 5]);
    }

    #[rstest::rstest]
    fn test_lone_carriage_return_becomes_newline() {
        let normalized = normalize_line_endings("ab\rcd");
        assert_eq!(normalized.as_str(), "ab\ncd");
        assert!(normalized.cr_offsets.is_empty());
    }

    #[rstest::rstest]
    fn test_offsets_round_trip_through_crlf() {
        let input = "ab\r\ncd\r\ne";
        let normalized = normalize_line_endings(input);
        // 'c' and 'e'
        assert_eq!(normalized.original_offset(3), 4);
        assert_eq!(normalized.original_offset(6), 8);
        assert_eq!(normalized.normalized_offset(4), 3);
        assert_eq!(normalized.normalized_offset(8), 6);
        // a newline maps back onto the '\r' that preceded it
        assert_eq!(normalized.original_offset(2), 2);
        assert_eq!(normalized.normalized_offset(2), 2);
        assert_eq!(&input[normalized.original_offset(3)..], "cd\r\ne");
    }
}

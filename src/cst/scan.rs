//! Stateless scanning helpers shared by CST nodes.
//!
//! Every function takes the full source text and a byte offset into it. Offsets at or past the
//! end of the text behave as end-of-input; none of these functions panic on them.

use memchr::{memchr, memrchr};
use smol_str::SmolStr;

use crate::constants::{is_blank, DIRECTIVES_END, DOCUMENT_END};

#[inline]
fn byte_at(src: &str, offset: usize) -> Option<u8> {
    src.as_bytes().get(offset).copied()
}

/// True if `offset` holds a space, tab or newline (or is end-of-input when `end_as_blank`).
pub fn at_blank(src: &str, offset: usize, end_as_blank: bool) -> bool {
    match byte_at(src, offset) {
        Some(b'\n' | b'\t' | b' ') => true,
        Some(_) => false,
        None => end_as_blank,
    }
}

/// First offset at or after `offset` that is not a space.
pub fn end_of_indent(src: &str, offset: usize) -> usize {
    let mut offset = offset;
    while byte_at(src, offset) == Some(b' ') {
        offset += 1;
    }
    offset
}

/// First offset at or after `offset` that is not a space or tab.
pub fn end_of_white_space(src: &str, offset: usize) -> usize {
    let mut offset = offset;
    while byte_at(src, offset).is_some_and(is_blank) {
        offset += 1;
    }
    offset
}

/// Offset of the next newline at or after `offset`, or the end of the text.
pub fn end_of_line(src: &str, offset: usize) -> usize {
    let bytes = src.as_bytes();
    if offset >= bytes.len() {
        return offset;
    }
    memchr(b'\n', &bytes[offset..]).map_or(bytes.len(), |idx| offset + idx)
}

/// Offset of the first character on the line containing `offset`.
pub fn start_of_line(src: &str, offset: usize) -> usize {
    let bytes = src.as_bytes();
    let offset = offset.min(bytes.len());
    memrchr(b'\n', &bytes[..offset]).map_or(0, |idx| idx + 1)
}

/// True if `offset` starts a document marker line, or is end-of-input.
///
/// A marker is three `-` or three `.` at column 0 (three `sep` when given), followed by a blank
/// or the end of the text.
pub fn at_document_boundary(src: &str, offset: usize, sep: Option<u8>) -> bool {
    let Some(ch0) = byte_at(src, offset) else {
        return true;
    };
    if offset > 0 && byte_at(src, offset - 1) != Some(b'\n') {
        return false;
    }
    let is_marker = match sep {
        Some(sep) => ch0 == sep,
        None => ch0 == DIRECTIVES_END || ch0 == DOCUMENT_END,
    };
    if !is_marker || byte_at(src, offset + 1) != Some(ch0) || byte_at(src, offset + 2) != Some(ch0)
    {
        return false;
    }
    at_blank(src, offset + 3, true)
}

/// Where the content of a continuation line begins, if the line qualifies.
///
/// A line with at least `indent` leading spaces yields the offset past all of them. A blank line
/// yields the offset of its terminating newline (or end-of-input) whatever its indentation.
/// Anything else is `None`.
pub fn end_of_block_indent(src: &str, indent: usize, line_start: usize) -> Option<usize> {
    let in_end = end_of_indent(src, line_start);
    if in_end >= line_start + indent {
        return Some(in_end);
    }
    let ws_end = end_of_white_space(src, in_end);
    match byte_at(src, ws_end) {
        None | Some(b'\n') => Some(ws_end),
        Some(_) => None,
    }
}

/// Pull an offset back onto a preceding newline, or forward past blanks.
pub fn normalize_offset(src: &str, offset: usize) -> usize {
    match byte_at(src, offset) {
        None => offset,
        Some(b'\n') => end_of_white_space(src, offset),
        Some(_) if offset > 0 && byte_at(src, offset - 1) == Some(b'\n') => offset - 1,
        Some(_) => end_of_white_space(src, offset),
    }
}

/// Result of folding the line break at some offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// `" "` for a lone line break, otherwise one `\n` per extra blank line.
    pub fold: SmolStr,
    /// Last offset consumed by the fold.
    pub offset: usize,
    /// The following content line is not indented past the threshold.
    pub error: bool,
}

/// Fold the newline at `offset` together with any blank lines and indentation after it.
///
/// `indent` is the indentation the next content line must exceed; pass `-1` to skip that check.
/// Folding for a value passes `-1`; the threshold and [`Fold::error`] serve callers that also
/// validate continuation indentation.
pub fn fold_newline(src: &str, offset: usize, indent: isize) -> Fold {
    let mut offset = offset;
    let mut in_count: isize = 0;
    let mut newlines = 0;
    let mut error = false;
    let mut ch = byte_at(src, offset + 1);
    while let Some(byte @ (b' ' | b'\t' | b'\n')) = ch {
        match byte {
            b'\n' => {
                in_count = 0;
                newlines += 1;
                offset += 1;
            }
            b'\t' => {
                if in_count <= indent {
                    error = true;
                }
                offset = end_of_white_space(src, offset + 2) - 1;
            }
            _ => {
                in_count += 1;
                offset += 1;
            }
        }
        ch = byte_at(src, offset + 1);
    }
    if ch.is_some() && in_count <= indent {
        error = true;
    }
    let fold = match newlines {
        0 => SmolStr::new_inline(" "),
        n => SmolStr::from("\n".repeat(n)),
    };
    Fold {
        fold,
        offset,
        error,
    }
}

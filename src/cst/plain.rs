//! Plain (unquoted) scalars.
//!
//! Accepted forms, where continuation lines are blank or indented at least `indent` columns:
//!
//! ```text
//! #comment
//!
//! first line
//!
//! first line #comment
//!
//! first line
//! continuation
//! lines
//!
//! #comment
//! continuation
//! lines
//! ```

use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::constants::{is_blank, is_flow_indicator, is_reserved_leading, COMMENT, MAP_VALUE};
use crate::cst::scan::{
    at_document_boundary, end_of_block_indent, end_of_white_space, fold_newline,
};
use crate::cst::{Node, ParseContext, Range};
use crate::error::SemanticError;

/// Folded value of a plain scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrValue {
    Plain(String),
    /// The value folded fine but the scalar opens with a character it may not start with.
    WithErrors {
        value: String,
        errors: SmallVec<[SemanticError; 1]>,
    },
}

impl StrValue {
    pub fn as_str(&self) -> &str {
        match self {
            StrValue::Plain(value) | StrValue::WithErrors { value, .. } => value,
        }
    }

    pub fn errors(&self) -> &[SemanticError] {
        match self {
            StrValue::Plain(_) => &[],
            StrValue::WithErrors { errors, .. } => errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    pub fn into_string(self) -> String {
        match self {
            StrValue::Plain(value) | StrValue::WithErrors { value, .. } => value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainValue<'s> {
    context: Option<ParseContext<'s>>,
    range: Range,
    value_range: Range,
    comment: Option<Range>,
}

impl<'s> PlainValue<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one line of plain scalar text starting at `start`.
    ///
    /// Stops at a newline, at `": "`-style value indicators, before a blank that precedes `#`,
    /// and inside flow collections at flow indicators. Returns the first offset not consumed.
    pub fn end_of_line(src: &str, start: usize, in_flow: bool) -> usize {
        let bytes = src.as_bytes();
        let mut offset = start;
        while let Some(&ch) = bytes.get(offset) {
            if ch == b'\n' || (in_flow && is_flow_indicator(ch)) {
                break;
            }
            let next = bytes.get(offset + 1).copied();
            if ch == MAP_VALUE {
                match next {
                    None | Some(b'\n' | b'\t' | b' ') => break,
                    Some(b',') if in_flow => break,
                    _ => {}
                }
            }
            if is_blank(ch) && next == Some(COMMENT) {
                break;
            }
            offset += 1;
        }
        offset
    }

    /// Bind `context` and scan the scalar starting at `start`.
    ///
    /// Returns the offset just after the scalar, which may point at a newline.
    pub fn parse(&mut self, context: &ParseContext<'s>, start: usize) -> usize {
        self.context = Some(*context);
        trace!(start, indent = context.indent, in_flow = context.in_flow, "plain-start");
        let src = context.src;
        let mut offset = start;
        if matches!(context.byte_at(offset), Some(ch) if ch != COMMENT && ch != b'\n') {
            offset = Self::end_of_line(src, start, context.in_flow);
        }
        self.value_range = Range::new(start, offset);
        offset = end_of_white_space(src, offset);
        offset = self.parse_comment(offset);
        trace!(
            offset,
            value_start = self.value_range.start,
            value_end = self.value_range.end,
            has_comment = self.has_comment(),
            "first line"
        );
        if !self.has_comment() || self.value_range.is_empty() {
            offset = self.parse_block_value(offset);
        }
        self.range = Range::new(start, offset);
        trace!(
            offset,
            value_start = self.value_range.start,
            value_end = self.value_range.end,
            "plain-end"
        );
        offset
    }

    /// Absorb continuation lines after the newline at `start`.
    ///
    /// Blank lines are skipped but only count once content follows them. Returns the end of the
    /// last content line, which is also the new end of the value range.
    pub fn parse_block_value(&mut self, start: usize) -> usize {
        let Some(context) = self.context else {
            return start;
        };
        let src = context.src;
        let mut offset = start;
        let mut value_end = start;
        while context.byte_at(offset) == Some(b'\n') {
            if at_document_boundary(src, offset + 1, None) {
                break;
            }
            let Some(end) = end_of_block_indent(src, context.indent, offset + 1) else {
                break;
            };
            match context.byte_at(end) {
                Some(COMMENT) => break,
                Some(b'\n') => offset = end,
                _ => {
                    value_end = Self::end_of_line(src, end, context.in_flow);
                    offset = value_end;
                }
            }
        }
        if self.value_range.is_empty() {
            self.value_range.start = start;
        }
        self.value_range.end = value_end;
        trace!(value_end, "block value");
        value_end
    }

    /// Fold the raw text into the scalar's value.
    ///
    /// A single line break becomes a space, `n` consecutive breaks become `n - 1` newlines, and
    /// blanks at the end of a line are dropped. Returns `None` before [`PlainValue::parse`].
    pub fn str_value(&self) -> Option<StrValue> {
        let src = self.context?.src;
        let bytes = src.as_bytes();
        let Range { start, mut end } = self.value_range;
        while start < end && matches!(bytes[end - 1], b'\n' | b'\t' | b' ') {
            end -= 1;
        }

        let mut i = start;
        let mut value = String::with_capacity(end.saturating_sub(start));
        let mut run_start = i;
        while i < end {
            match bytes[i] {
                b'\n' => {
                    value.push_str(&src[run_start..i]);
                    let fold = fold_newline(src, i, -1);
                    value.push_str(&fold.fold);
                    i = fold.offset + 1;
                    run_start = i;
                }
                b' ' | b'\t' => {
                    let ws_start = i;
                    while i < end && matches!(bytes.get(i + 1), Some(b' ' | b'\t')) {
                        i += 1;
                    }
                    if bytes.get(i + 1) == Some(&b'\n') {
                        value.push_str(&src[run_start..ws_start]);
                        run_start = i + 1;
                    }
                    i += 1;
                }
                _ => i += 1,
            }
        }
        if run_start < end {
            value.push_str(&src[run_start..end]);
        }

        match bytes.get(start).copied() {
            Some(ch0) if is_reserved_leading(ch0) => {
                let error = SemanticError::illegal_leading_char(char::from(ch0), self.range);
                Some(StrValue::WithErrors {
                    value,
                    errors: smallvec![error],
                })
            }
            _ => Some(StrValue::Plain(value)),
        }
    }
}

impl<'s> Node<'s> for PlainValue<'s> {
    fn context(&self) -> Option<&ParseContext<'s>> {
        self.context.as_ref()
    }

    fn range(&self) -> Range {
        self.range
    }

    fn value_range(&self) -> Range {
        self.value_range
    }

    fn comment_range(&self) -> Option<Range> {
        self.comment
    }

    fn set_comment_range(&mut self, range: Range) {
        self.comment = Some(range);
    }
}

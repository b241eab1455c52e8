use crate::constants::COMMENT;
use crate::cst::scan;
use crate::cst::{ParseContext, Range};
use crate::error::Location;

/// Behavior every CST node shares once it has been bound to a [`ParseContext`].
pub trait Node<'s> {
    fn context(&self) -> Option<&ParseContext<'s>>;

    /// Full extent of the node, trailing comment included.
    fn range(&self) -> Range;

    /// Extent of the node's own value text.
    fn value_range(&self) -> Range;

    fn comment_range(&self) -> Option<Range>;

    fn set_comment_range(&mut self, range: Range);

    /// Consume a `#` comment starting exactly at `start`.
    ///
    /// Returns the offset of the line break (or end-of-input) that ends the comment, or `start`
    /// unchanged when there is no comment there.
    fn parse_comment(&mut self, start: usize) -> usize {
        let Some(src) = self.context().map(|context| context.src) else {
            return start;
        };
        if src.as_bytes().get(start) != Some(&COMMENT) {
            return start;
        }
        let end = scan::end_of_line(src, start + 1);
        self.set_comment_range(Range::new(start, end));
        end
    }

    fn has_comment(&self) -> bool {
        self.comment_range().is_some()
    }

    /// Comment text after the `#`, trimmed.
    fn comment(&self) -> Option<&'s str> {
        let src = self.context()?.src;
        let range = self.comment_range()?;
        Some(Range::new(range.start + 1, range.end).slice(src).trim())
    }

    /// Unfolded source text of the value.
    fn raw_value(&self) -> Option<&'s str> {
        let src = self.context()?.src;
        Some(self.value_range().slice(src))
    }

    fn value_range_contains_newline(&self) -> bool {
        self.raw_value().is_some_and(|raw| raw.contains('\n'))
    }

    fn range_as_line_pos(&self) -> Option<(Location, Location)> {
        let src = self.context()?.src;
        let range = self.range();
        Some((
            Location::from_offset(src, range.start),
            Location::from_offset(src, range.end),
        ))
    }
}

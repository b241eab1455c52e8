use serde::Serialize;

use crate::cst::{Node, PlainValue, Range};
use crate::error::{Location, SemanticError};
use crate::text::newline::original_offset;

/// Serializable summary of a scanned plain scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainScalarReport {
    pub range: Range,
    pub value_range: Range,
    pub start: Location,
    pub end: Location,
    pub raw: String,
    pub value: String,
    pub comment: Option<String>,
    pub errors: Vec<SemanticError>,
}

impl PlainScalarReport {
    /// `None` when the node has not been parsed yet.
    pub fn from_node(node: &PlainValue<'_>) -> Option<Self> {
        let (start, end) = node.range_as_line_pos()?;
        let str_value = node.str_value()?;
        Some(Self {
            range: node.range(),
            value_range: node.value_range(),
            start,
            end,
            raw: node.raw_value().unwrap_or_default().to_string(),
            value: str_value.as_str().to_string(),
            comment: node.comment().map(str::to_string),
            errors: str_value.errors().to_vec(),
        })
    }

    /// Rewrite the ranges to point into the input before line-ending normalization.
    pub fn with_original_ranges(mut self, cr_offsets: &[usize]) -> Self {
        self.range = self.range.to_original(cr_offsets);
        self.value_range = self.value_range.to_original(cr_offsets);
        self.start.offset = original_offset(cr_offsets, self.start.offset);
        self.end.offset = original_offset(cr_offsets, self.end.offset);
        for error in &mut self.errors {
            error.range = error.range.to_original(cr_offsets);
        }
        self
    }
}

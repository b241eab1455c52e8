//! Plain scalar scanning for a YAML concrete syntax tree.
//!
//! The entry points take a fully materialized source string and an offset pointing at the first
//! character of an unquoted scalar, and return a [`PlainValue`] node recording the raw extent of
//! the scalar, its trailing comment and, on demand, its folded string value.

pub mod constants;
pub mod cst;
pub mod error;
pub mod options;
pub mod report;
pub mod text;

pub use crate::cst::{Node, ParseContext, PlainValue, Range, StrValue};
pub use crate::error::{Error, ErrorKind, Location, SemanticError, SemanticErrorKind};
pub use crate::options::ParseOptions;
pub use crate::report::PlainScalarReport;

pub type Result<T> = std::result::Result<T, Error>;

/// Scan a plain scalar starting at `start` in a block context with no indentation requirement.
pub fn scan_plain(src: &str, start: usize) -> Result<PlainValue<'_>> {
    scan_plain_with_options(src, start, &ParseOptions::default())
}

/// Scan a plain scalar starting at `start`, validating the offset first.
pub fn scan_plain_with_options<'s>(
    src: &'s str,
    start: usize,
    options: &ParseOptions,
) -> Result<PlainValue<'s>> {
    if start > src.len() {
        return Err(Error::invalid_offset(format!(
            "offset {start} is past the end of input ({} bytes)",
            src.len()
        )));
    }
    if !src.is_char_boundary(start) {
        return Err(
            Error::invalid_offset(format!("offset {start} is not on a character boundary"))
                .with_location(Location::from_offset(src, start)),
        );
    }
    let context = ParseContext::with_options(src, options);
    let mut node = PlainValue::new();
    node.parse(&context, start);
    Ok(node)
}

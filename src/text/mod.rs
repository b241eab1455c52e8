pub mod newline;
pub mod position;

pub use newline::{normalize_line_endings, Normalized};
pub use position::line_col;

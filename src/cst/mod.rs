//! Concrete syntax tree pieces needed to recognize a plain scalar.

pub mod context;
pub mod node;
pub mod plain;
pub mod range;
pub mod scan;

pub use context::ParseContext;
pub use node::Node;
pub use plain::{PlainValue, StrValue};
pub use range::Range;

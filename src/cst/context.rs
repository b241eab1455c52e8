use crate::options::ParseOptions;

/// What the composer knows at the point a plain scalar starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext<'s> {
    pub src: &'s str,
    pub indent: usize,
    pub in_flow: bool,
}

impl<'s> ParseContext<'s> {
    pub fn new(src: &'s str) -> Self {
        Self::with_options(src, &ParseOptions::default())
    }

    pub fn with_options(src: &'s str, options: &ParseOptions) -> Self {
        Self {
            src,
            indent: options.indent,
            in_flow: options.in_flow,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_in_flow(mut self, in_flow: bool) -> Self {
        self.in_flow = in_flow;
        self
    }

    #[inline]
    pub(crate) fn byte_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(offset).copied()
    }
}

/// Scanner settings supplied by the composer for one plain scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Minimum indentation a continuation line needs.
    pub indent: usize,
    /// Whether the scalar sits inside a flow collection.
    pub in_flow: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_in_flow(mut self, in_flow: bool) -> Self {
        self.in_flow = in_flow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.indent, 0);
        assert!(!options.in_flow);
    }

    #[rstest::rstest]
    fn test_builder() {
        let options = ParseOptions::new().with_indent(4).with_in_flow(true);
        assert_eq!(
            options,
            ParseOptions {
                indent: 4,
                in_flow: true,
            }
        );
    }
}

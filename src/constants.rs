pub const COMMENT: u8 = b'#';

pub const DIRECTIVES_END: u8 = b'-';

pub const DOCUMENT_END: u8 = b'.';

pub const MAP_VALUE: u8 = b':';

/// Characters a plain scalar may not open with.
pub const RESERVED_LEADING: &[u8] = b"\t@`";

#[inline]
pub fn is_flow_indicator(byte: u8) -> bool {
    matches!(byte, b'[' | b']' | b'{' | b'}' | b',')
}

#[inline]
pub fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

#[inline]
pub fn is_reserved_leading(byte: u8) -> bool {
    RESERVED_LEADING.contains(&byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_is_flow_indicator() {
        assert!(is_flow_indicator(b'['));
        assert!(is_flow_indicator(b']'));
        assert!(is_flow_indicator(b'{'));
        assert!(is_flow_indicator(b'}'));
        assert!(is_flow_indicator(b','));
        assert!(!is_flow_indicator(b':'));
        assert!(!is_flow_indicator(b'a'));
    }

    #[rstest::rstest]
    fn test_is_blank() {
        assert!(is_blank(b' '));
        assert!(is_blank(b'\t'));
        assert!(!is_blank(b'\n'));
        assert!(!is_blank(b'x'));
    }

    #[rstest::rstest]
    fn test_is_reserved_leading() {
        assert!(is_reserved_leading(b'\t'));
        assert!(is_reserved_leading(b'@'));
        assert!(is_reserved_leading(b'`'));
        assert!(!is_reserved_leading(b'-'));
        assert!(!is_reserved_leading(b' '));
    }
}

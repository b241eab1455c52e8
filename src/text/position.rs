use memchr::{memchr_iter, memrchr};

/// 1-based line and column of a byte offset. Columns count characters, not bytes.
///
/// Offsets past the end of `src` are clamped to its length.
pub fn line_col(src: &str, offset: usize) -> (usize, usize) {
    let bytes = src.as_bytes();
    let offset = offset.min(bytes.len());
    let head = &bytes[..offset];
    let line = memchr_iter(b'\n', head).count() + 1;
    let line_start = memrchr(b'\n', head).map_or(0, |idx| idx + 1);
    // continuation bytes of a multi-byte character do not start a column
    let column = head[line_start..]
        .iter()
        .filter(|&&byte| byte & 0xC0 != 0x80)
        .count()
        + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case("abc", 0, (1, 1))]
    #[case("abc", 2, (1, 3))]
    #[case("abc\ndef", 4, (2, 1))]
    #[case("abc\ndef", 3, (1, 4))]
    #[case("a\n\nb", 3, (3, 1))]
    #[case("abc", 10, (1, 4))]
    fn test_line_col(#[case] src: &str, #[case] offset: usize, #[case] expected: (usize, usize)) {
        assert_eq!(line_col(src, offset), expected);
    }

    #[rstest::rstest]
    fn test_line_col_counts_characters() {
        let src = "k: \u{e9}t\u{e9}";
        assert_eq!(line_col(src, src.len()), (1, 7));
    }
}

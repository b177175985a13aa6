// src/core/text.rs

/// Strips every trailing line terminator of one kind from the end of `s`.
///
/// The suffix is checked as `\r\n` first, then `\n`; only the kind that
/// matched is stripped, repeatedly, until the string no longer ends with it.
/// A string composed entirely of the detected terminator becomes empty.
pub fn trim_trailing_newlines(mut s: String) -> String {
    if s.ends_with("\r\n") {
        while s.ends_with("\r\n") {
            s.truncate(s.len() - 2);
        }
    } else {
        while s.ends_with('\n') {
            s.truncate(s.len() - 1);
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trim(s: &str) -> String {
        trim_trailing_newlines(s.to_string())
    }

    #[test]
    fn test_strips_single_lf() {
        assert_eq!(trim("abc\n"), "abc");
    }

    #[test]
    fn test_strips_single_crlf() {
        assert_eq!(trim("abc\r\n"), "abc");
    }

    #[test]
    fn test_strips_repeated_terminators() {
        assert_eq!(trim("abc\r\n\r\n"), "abc");
        assert_eq!(trim("abc\n\n\n"), "abc");
    }

    #[test]
    fn test_untouched_without_trailing_terminator() {
        assert_eq!(trim("abc"), "abc");
        assert_eq!(trim(""), "");
        assert_eq!(trim("a\nb"), "a\nb");
    }

    #[test]
    fn test_terminator_only_string_becomes_empty() {
        assert_eq!(trim("\n"), "");
        assert_eq!(trim("\r\n\r\n"), "");
    }

    #[test]
    fn test_only_first_matched_kind_is_stripped() {
        // Ends with CRLF, so only CRLF runs are removed; the inner LF stays.
        assert_eq!(trim("abc\n\r\n"), "abc\n");
        // Ends with LF (the `\r` belongs to the line), so only LFs are removed.
        assert_eq!(trim("abc\r\n\n"), "abc\r");
    }

    #[test]
    fn test_lone_carriage_return_is_kept() {
        assert_eq!(trim("abc\r"), "abc\r");
    }
}

//! Char-slice matching helpers shared by the scanners.
//!
//! The parser, normalizer, and validator all walk `Vec<char>` views of the
//! input so that multi-byte passthrough characters can never split a match.

/// Does `chars` start with the token `pat`?
pub(crate) fn starts_with(chars: &[char], pat: &str) -> bool {
    let mut rest = chars.iter();
    for expected in pat.chars() {
        match rest.next() {
            Some(&c) if c == expected => {}
            _ => return false,
        }
    }
    true
}

/// ASCII-case-insensitive variant of [`starts_with`].
pub(crate) fn starts_with_ci(chars: &[char], pat: &str) -> bool {
    let mut rest = chars.iter();
    for expected in pat.chars() {
        match rest.next() {
            Some(&c) if c.eq_ignore_ascii_case(&expected) => {}
            _ => return false,
        }
    }
    true
}

/// Does the ASCII-lowercased text start with `pat`, compared exactly?
///
/// Unlike [`starts_with_ci`], only the text folds: a pattern holding a
/// capital (a Sanskrit spelling like `Ta`) can never match here.
pub(crate) fn starts_with_folded(chars: &[char], pat: &str) -> bool {
    let mut rest = chars.iter();
    for expected in pat.chars() {
        match rest.next() {
            Some(&c) if c.to_ascii_lowercase() == expected => {}
            _ => return false,
        }
    }
    true
}

/// Number of chars in an ASCII token (token length in scan positions).
pub(crate) fn token_len(token: &str) -> usize {
    token.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with(&chars("tsha"), "tsh"));
        assert!(!starts_with(&chars("tsa"), "tsh"));
        assert!(!starts_with(&chars("ts"), "tsh"));
        assert!(starts_with(&chars("anything"), ""));
    }

    #[test]
    fn test_starts_with_ci() {
        assert!(starts_with_ci(&chars("KHA"), "kh"));
        assert!(starts_with_ci(&chars("Kha"), "kh"));
        assert!(!starts_with_ci(&chars("ga"), "kh"));
    }

    #[test]
    fn test_starts_with_folded() {
        assert!(starts_with_folded(&chars("NGA"), "ng"));
        assert!(!starts_with_folded(&chars("ta"), "Ta"));
    }

    #[test]
    fn test_token_len() {
        assert_eq!(token_len("ng"), 2);
        assert_eq!(token_len("'"), 1);
    }
}

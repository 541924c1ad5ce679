//! Bidirectional transliteration between the Extended Wylie Transliteration
//! Scheme (EWTS) and Tibetan Unicode, with an EWTS validator and an ACIP
//! conversion pipeline.
//!
//! The core surface is three pure functions:
//!
//! ```
//! use ewts_engine::{unicode_to_wylie, validate, wylie_to_unicode};
//!
//! assert_eq!(wylie_to_unicode("bla ma", true), "བླ་མ");
//! assert_eq!(unicode_to_wylie("བླ་མ"), "bla ma");
//! assert!(validate("bla ma").is_valid);
//! ```
//!
//! Transliteration never fails: anything outside the grammar passes through
//! unchanged. Structural problems are reported only by [`validate`], as data.
//! All mapping tables are immutable and built once, so every function here
//! is safe to call from any number of threads.

pub mod acip;
pub mod alphabet;
mod builder;
pub mod files;
mod forward;
mod normalize;
mod parser;
mod reverse;
mod scan;
mod syllable;
pub mod trace_init;
pub mod unicode;
pub mod validate;

pub use normalize::normalize_case;
pub use syllable::{Subscript, Syllable, SyllableComponents};
pub use validate::{validate, ErrorKind, ValidationError, ValidationResult};

/// Transliterate EWTS text to Tibetan Unicode. Spaces become the tsheg
/// syllable separator unless `spaces_as_tsheg` is false.
pub fn wylie_to_unicode(text: &str, spaces_as_tsheg: bool) -> String {
    forward::wylie_to_unicode(text, spaces_as_tsheg)
}

/// Transliterate Tibetan Unicode text to EWTS.
pub fn unicode_to_wylie(text: &str) -> String {
    reverse::unicode_to_wylie(text)
}

/// Transliterate many EWTS texts; output order matches input order.
pub fn wylie_to_unicode_batch(texts: &[&str], spaces_as_tsheg: bool) -> Vec<String> {
    texts
        .iter()
        .map(|text| wylie_to_unicode(text, spaces_as_tsheg))
        .collect()
}

/// Transliterate many Unicode texts; output order matches input order.
pub fn unicode_to_wylie_batch(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|text| unicode_to_wylie(text)).collect()
}

/// Validate many EWTS texts; output order matches input order.
pub fn validate_batch(texts: &[&str]) -> Vec<ValidationResult> {
    texts.iter().map(|text| validate(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface() {
        assert_eq!(wylie_to_unicode("bsgrubs", true), "བསྒྲུབས");
        assert_eq!(unicode_to_wylie("བསྒྲུབས"), "bsgrubs");
        assert!(validate("bsgrubs").is_valid);
        assert!(!validate("gka").is_valid);
    }

    #[test]
    fn test_batch_preserves_order() {
        let out = wylie_to_unicode_batch(&["bla ma", "chos"], true);
        assert_eq!(out, ["བླ་མ", "ཆོས"]);
        let back = unicode_to_wylie_batch(&["བླ་མ", "ཆོས"]);
        assert_eq!(back, ["bla ma", "chos"]);
        let results = validate_batch(&["bla ma", "xyz"]);
        assert!(results[0].is_valid);
        assert!(!results[1].is_valid);
    }
}

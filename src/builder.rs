//! Syllable builder: slot set → Unicode codepoint sequence.

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::syllable::{Syllable, SyllableComponents};

/// Render a parsed slot set in the fixed EWTS ordering: prescript,
/// superscript, root (subjoined when a superscript is present), subscripts,
/// vowel sign, postscripts. Does not fail: a token with no mapping renders
/// as an empty segment and is logged.
pub fn build_syllable(components: &SyllableComponents, wylie_text: &str) -> Syllable {
    let alphabet = Alphabet::global();
    let mut unicode = String::new();

    if let Some(prescript) = &components.prescript {
        push_segment(&mut unicode, alphabet.consonant(prescript), prescript);
    }
    if let Some(superscript) = &components.superscript {
        push_segment(&mut unicode, alphabet.consonant(superscript), superscript);
    }

    if components.superscript.is_some() {
        push_segment(&mut unicode, alphabet.subjoined(&components.root), &components.root);
    } else {
        push_segment(&mut unicode, alphabet.consonant(&components.root), &components.root);
    }

    if let Some(subscript) = &components.subscript {
        for part in subscript.parts() {
            // Explicit Sanskrit tokens live in the subjoined table only.
            let mapped = alphabet.subscript(part).or_else(|| alphabet.subjoined(part));
            push_segment(&mut unicode, mapped, part);
        }
    }

    if !components.has_inherent_vowel() {
        push_segment(&mut unicode, alphabet.vowel(&components.vowel), &components.vowel);
    }

    if let Some(postscript) = &components.postscript1 {
        push_segment(&mut unicode, alphabet.consonant(postscript), postscript);
    }
    if let Some(postscript) = &components.postscript2 {
        push_segment(&mut unicode, alphabet.consonant(postscript), postscript);
    }

    Syllable {
        components: components.clone(),
        unicode_text: unicode,
        wylie_text: wylie_text.to_string(),
    }
}

fn push_segment(out: &mut String, mapped: Option<&str>, token: &str) {
    match mapped {
        Some(unicode) => out.push_str(unicode),
        None => debug!(token, "token has no unicode mapping, rendering empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::Subscript;

    #[test]
    fn test_simple_syllable() {
        let components = SyllableComponents::new("k");
        let syllable = build_syllable(&components, "ka");
        assert_eq!(syllable.unicode_text, "\u{0F40}");
        assert_eq!(syllable.wylie_text, "ka");
    }

    #[test]
    fn test_inherent_vowel_unwritten() {
        let mut with_mark = SyllableComponents::new("k");
        with_mark.vowel = "i".to_string();
        assert_eq!(build_syllable(&with_mark, "ki").unicode_text, "\u{0F40}\u{0F72}");

        let inherent = SyllableComponents::new("k");
        assert_eq!(build_syllable(&inherent, "ka").unicode_text, "\u{0F40}");
    }

    #[test]
    fn test_root_subjoined_under_superscript() {
        let mut components = SyllableComponents::new("k");
        components.superscript = Some("r".to_string());
        let syllable = build_syllable(&components, "rka");
        assert_eq!(syllable.unicode_text, "\u{0F62}\u{0F90}");
    }

    #[test]
    fn test_full_stack_order() {
        let mut components = SyllableComponents::new("g");
        components.prescript = Some("b".to_string());
        components.superscript = Some("s".to_string());
        components.subscript = Some(Subscript::Single("r".to_string()));
        components.vowel = "u".to_string();
        components.postscript1 = Some("b".to_string());
        components.postscript2 = Some("s".to_string());
        let syllable = build_syllable(&components, "bsgrubs");
        assert_eq!(
            syllable.unicode_text,
            "\u{0F56}\u{0F66}\u{0F92}\u{0FB2}\u{0F74}\u{0F56}\u{0F66}"
        );
    }

    #[test]
    fn test_double_subscript_rendered_in_order() {
        let mut components = SyllableComponents::new("g");
        components.subscript = Some(Subscript::Double("r".to_string(), "w".to_string()));
        let syllable = build_syllable(&components, "grwa");
        assert_eq!(syllable.unicode_text, "\u{0F42}\u{0FB2}\u{0FAD}");
    }

    #[test]
    fn test_explicit_sanskrit_subscript_uses_subjoined_table() {
        let mut components = SyllableComponents::new("n");
        components.subscript = Some(Subscript::Single("Da".to_string()));
        let syllable = build_syllable(&components, "n+Da");
        assert_eq!(syllable.unicode_text, "\u{0F53}\u{0F9C}");
    }

    #[test]
    fn test_unmapped_token_renders_empty() {
        let mut components = SyllableComponents::new("k");
        components.postscript1 = Some("q".to_string());
        let syllable = build_syllable(&components, "kaq");
        assert_eq!(syllable.unicode_text, "\u{0F40}");
    }
}

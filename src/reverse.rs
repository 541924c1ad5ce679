//! Reverse transliteration: Tibetan Unicode → EWTS.
//!
//! The scan mirrors the forward priority order, but structural decisions come
//! from Unicode codepoint ranges (the subjoined block) instead of EWTS
//! lexical rules. Unrecognized codepoints pass through unchanged.

use tracing::{debug, debug_span};

use crate::alphabet::ReverseIndex;
use crate::unicode::{is_sanskrit_mark, is_subjoined, is_tibetan_digit, TSHEG};

/// Transliterate Tibetan Unicode to EWTS.
pub fn unicode_to_wylie(text: &str) -> String {
    let _span = debug_span!("unicode_to_wylie", chars = text.chars().count()).entered();
    let index = ReverseIndex::global();
    let chars: Vec<char> = text.chars().collect();

    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if c == TSHEG {
            out.push(' ');
            i += 1;
            continue;
        }

        if is_tibetan_digit(c) {
            match index.wylie_char(c) {
                Some(digit) => out.push_str(digit),
                None => out.push(c),
            }
            i += 1;
            continue;
        }

        if index.is_punctuation(c) {
            // The nyis shad reads back as the two-character spelling.
            if c == '\u{0F0E}' {
                out.push_str("//");
            } else {
                match index.wylie_char(c) {
                    Some(punct) => out.push_str(punct),
                    None => out.push(c),
                }
            }
            i += 1;
            continue;
        }

        if is_sanskrit_mark(c) {
            match index.wylie_char(c) {
                Some(mark) => out.push_str(mark),
                None => out.push(c),
            }
            i += 1;
            continue;
        }

        // Two-codepoint compounds (the ka + subjoined ssa ligature) before
        // single-codepoint decomposition.
        if i + 1 < chars.len() {
            let compound: String = chars[i..i + 2].iter().collect();
            if let Some(wylie) = index.wylie(&compound) {
                out.push_str(wylie);
                i += 2;
                continue;
            }
        }

        if let Some((wylie, len)) = decompose_syllable(&chars[i..], index) {
            out.push_str(&wylie);
            i += len;
            continue;
        }

        debug!(%c, "unrecognized codepoint, passing through");
        out.push(c);
        i += 1;
    }

    out
}

/// Base-consonant spelling with the inherent `a` stripped (`Ta` → `T`).
fn base_spelling(index: &ReverseIndex, c: char) -> Option<String> {
    let wylie = index.wylie_char(c)?;
    if wylie.len() > 1 && wylie.ends_with('a') {
        Some(wylie[..wylie.len() - 1].to_string())
    } else {
        Some(wylie.to_string())
    }
}

const PRESCRIPTS: &[&str] = &["g", "d", "b", "m", "'"];
const SUPERSCRIPTS: &[&str] = &["r", "l", "s"];

/// Walk one syllable's codepoints back into the slot model and render EWTS.
fn decompose_syllable(text: &[char], index: &ReverseIndex) -> Option<(String, usize)> {
    let mut pos = 0;

    // Prescript: a base consonant from the prescript set, only when followed
    // by another base (not subjoined) consonant. This separates
    // "prescript + root" from "root + inherent a + next root".
    let mut prescript = None;
    if let Some(&c) = text.first() {
        if index.is_consonant(c) {
            if let Some(base) = base_spelling(index, c) {
                if PRESCRIPTS.contains(&base.as_str()) {
                    if let Some(&next) = text.get(1) {
                        if index.is_consonant(next) && !is_subjoined(next) {
                            prescript = Some(base);
                            pos = 1;
                        }
                    }
                }
            }
        }
    }

    // Superscript: a base consonant from the superscript set, only when the
    // next codepoint lies in the subjoined block.
    let mut superscript = None;
    if let Some(&c) = text.get(pos) {
        if index.is_consonant(c) {
            if let Some(base) = base_spelling(index, c) {
                if SUPERSCRIPTS.contains(&base.as_str()) {
                    if let Some(&next) = text.get(pos + 1) {
                        if is_subjoined(next) {
                            superscript = Some(base);
                            pos += 1;
                        }
                    }
                }
            }
        }
    }

    // Root: subjoined iff a superscript was found.
    let root = match text.get(pos) {
        Some(&c) if superscript.is_some() && is_subjoined(c) => {
            let wylie = index.wylie_char(c)?.to_string();
            pos += 1;
            wylie
        }
        Some(&c) if index.is_consonant(c) => {
            let base = base_spelling(index, c)?;
            pos += 1;
            base
        }
        _ => return None,
    };

    // Subscripts: any further subjoined codepoints.
    let mut subscripts = Vec::new();
    while let Some(&c) = text.get(pos) {
        if !is_subjoined(c) {
            break;
        }
        match index.wylie_char(c) {
            Some(wylie) => {
                subscripts.push(wylie.to_string());
                pos += 1;
            }
            None => break,
        }
    }

    // Vowel: the two-codepoint long-U compound before single signs.
    let mut vowel = None;
    let mut has_explicit_vowel = false;
    if pos + 1 < text.len() {
        let compound: String = text[pos..pos + 2].iter().collect();
        if let Some(wylie) = index.vowel_compound(&compound) {
            vowel = Some(wylie.to_string());
            has_explicit_vowel = true;
            pos += 2;
        }
    }
    if vowel.is_none() {
        if let Some(&c) = text.get(pos) {
            if index.is_vowel_sign(c) {
                if let Some(wylie) = index.wylie_char(c) {
                    if wylie != "a" {
                        vowel = Some(wylie.to_string());
                        has_explicit_vowel = true;
                    }
                }
                pos += 1;
            }
        }
    }

    // Postscripts: trailing base consonants.
    let mut postscripts = Vec::new();
    while let Some(&c) = text.get(pos) {
        if !index.is_consonant(c) {
            break;
        }
        match base_spelling(index, c) {
            Some(base) => {
                postscripts.push(base);
                pos += 1;
            }
            None => break,
        }
    }

    // Trailing Sanskrit marks.
    let mut marks = Vec::new();
    while let Some(&c) = text.get(pos) {
        if !is_sanskrit_mark(c) {
            break;
        }
        match index.wylie_char(c) {
            Some(wylie) => {
                marks.push(wylie.to_string());
                pos += 1;
            }
            None => break,
        }
    }

    let mut result = String::new();
    if let Some(prescript) = &prescript {
        result.push_str(prescript);
    }
    if let Some(superscript) = &superscript {
        result.push_str(superscript);
    }

    // Vowel-initial collapse: the bare placeholder with an explicit vowel
    // reads back as the vowel alone (`om`, not `aom`).
    let vowel_initial = root == "a"
        && has_explicit_vowel
        && subscripts.is_empty()
        && prescript.is_none()
        && superscript.is_none();

    if vowel_initial {
        if let Some(vowel) = &vowel {
            result.push_str(vowel);
        }
    } else {
        result.push_str(&root);
        for subscript in &subscripts {
            result.push_str(subscript);
        }
        if !has_explicit_vowel && root != "a" {
            result.push('a');
        }
        if let Some(vowel) = &vowel {
            result.push_str(vowel);
        }
    }

    for postscript in &postscripts {
        result.push_str(postscript);
    }
    for mark in &marks {
        result.push_str(mark);
    }

    Some((result, pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_consonants() {
        assert_eq!(unicode_to_wylie("ཀ"), "ka");
        assert_eq!(unicode_to_wylie("ཁ"), "kha");
        assert_eq!(unicode_to_wylie("ཚ"), "tsha");
        assert_eq!(unicode_to_wylie("འ"), "'a");
        assert_eq!(unicode_to_wylie("ཨ"), "a");
    }

    #[test]
    fn test_vowels() {
        assert_eq!(unicode_to_wylie("ཀི"), "ki");
        assert_eq!(unicode_to_wylie("ཀུ"), "ku");
        assert_eq!(unicode_to_wylie("ཀེ"), "ke");
        assert_eq!(unicode_to_wylie("ཀོ"), "ko");
        assert_eq!(unicode_to_wylie("ཀཱ"), "kA");
    }

    #[test]
    fn test_subscripts() {
        assert_eq!(unicode_to_wylie("བླ"), "bla");
        assert_eq!(unicode_to_wylie("ཀྱ"), "kya");
        assert_eq!(unicode_to_wylie("ཀྲ"), "kra");
        assert_eq!(unicode_to_wylie("དྭ"), "dwa");
    }

    #[test]
    fn test_superscripts() {
        assert_eq!(unicode_to_wylie("རྐ"), "rka");
        assert_eq!(unicode_to_wylie("ལྔ"), "lnga");
        assert_eq!(unicode_to_wylie("སྒ"), "sga");
    }

    #[test]
    fn test_full_stack() {
        assert_eq!(unicode_to_wylie("བསྒྲུབས"), "bsgrubs");
        assert_eq!(unicode_to_wylie("བསྐྱེད"), "bskyed");
    }

    #[test]
    fn test_words_with_tsheg() {
        assert_eq!(unicode_to_wylie("བླ་མ"), "bla ma");
        assert_eq!(unicode_to_wylie("སངས་རྒྱས"), "sangs rgyas");
    }

    #[test]
    fn test_digits() {
        assert_eq!(unicode_to_wylie("༡༩༥༩"), "1959");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(unicode_to_wylie("།"), "/");
        assert_eq!(unicode_to_wylie("༎"), "//");
        assert_eq!(unicode_to_wylie("ཆོས།"), "chos/");
    }

    #[test]
    fn test_vowel_initial_collapse() {
        assert_eq!(unicode_to_wylie("ཨོམ"), "om");
        assert_eq!(unicode_to_wylie("ཨོཾ"), "oM");
    }

    #[test]
    fn test_sanskrit_marks() {
        assert_eq!(unicode_to_wylie("ཧཱུྃ"), "hUM");
        assert_eq!(unicode_to_wylie("ཀཿ"), "kaH");
    }

    #[test]
    fn test_kssa_ligature() {
        assert_eq!(unicode_to_wylie("ཀྵ"), "kss");
    }

    #[test]
    fn test_retroflex_capitals() {
        assert_eq!(unicode_to_wylie("ཎི"), "Ni");
        assert_eq!(unicode_to_wylie("ཊ"), "Ta");
    }

    #[test]
    fn test_prescript_requires_following_base() {
        // A lone consonant before tsheg is a root, not a prescript.
        assert_eq!(unicode_to_wylie("ད་ག"), "da ga");
        // Subjoined follower means stack, not prescript.
        assert_eq!(unicode_to_wylie("བླ"), "bla");
    }

    #[test]
    fn test_passthrough_unknown() {
        assert_eq!(unicode_to_wylie("abc"), "abc");
        assert_eq!(unicode_to_wylie(""), "");
    }

    #[test]
    fn test_mantra_reverse() {
        assert_eq!(
            unicode_to_wylie("ཨོཾ་མ་ཎི་པ་དྨེ་ཧཱུྃ།"),
            "oM ma Ni pa dme hUM/"
        );
    }
}

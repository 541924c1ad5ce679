//! Forward transliteration: EWTS text → Tibetan Unicode.
//!
//! One decision per scan position, in priority order: digit, space,
//! punctuation, Sanskrit mark, standalone vowel, syllable, passthrough.
//! Transliteration never fails; anything the grammar does not recognize is
//! copied through unchanged.

use tracing::{debug, debug_span};

use crate::alphabet::Alphabet;
use crate::builder::build_syllable;
use crate::normalize::normalize_case;
use crate::parser::parse_syllable;
use crate::scan::{starts_with, token_len};
use crate::unicode::TSHEG;

/// Characters that close a standalone vowel.
const TERMINATORS: &[char] = &[' ', '/', '|', '\n', '\t'];

/// Transliterate EWTS to Tibetan Unicode. Spaces render as tsheg unless the
/// caller asks for literal spaces.
pub fn wylie_to_unicode(text: &str, spaces_as_tsheg: bool) -> String {
    let _span = debug_span!("wylie_to_unicode", chars = text.chars().count()).entered();
    let alphabet = Alphabet::global();
    let normalized: Vec<char> = normalize_case(text).chars().collect();

    let mut out = String::new();
    // The most recently rendered unit, for the anusvara context rule.
    let mut last_segment = String::new();
    let mut last_was_syllable = false;
    let mut i = 0;

    while i < normalized.len() {
        let c = normalized[i];

        if c.is_ascii_digit() {
            let digit = c.encode_utf8(&mut [0; 4]).to_string();
            let segment = alphabet.numeral(&digit).unwrap_or(&digit).to_string();
            out.push_str(&segment);
            last_segment = segment;
            last_was_syllable = false;
            i += 1;
            continue;
        }

        if c == ' ' {
            let mark = if spaces_as_tsheg { TSHEG } else { ' ' };
            out.push(mark);
            last_segment = mark.to_string();
            last_was_syllable = false;
            i += 1;
            continue;
        }

        if let Some((token, len)) = match_token(&normalized[i..], alphabet.punctuation_keys()) {
            // Spaces were handled above; every other punctuation spelling
            // maps directly.
            if token != " " {
                let segment = alphabet.punctuation(token).unwrap_or_default().to_string();
                out.push_str(&segment);
                last_segment = segment;
                last_was_syllable = false;
                i += len;
                continue;
            }
        }

        if let Some((token, len)) = match_token(&normalized[i..], alphabet.mark_keys()) {
            let segment = render_mark(token, &last_segment);
            out.push_str(&segment);
            last_segment = segment;
            last_was_syllable = false;
            i += len;
            continue;
        }

        if !last_was_syllable {
            if let Some((vowel, len)) = match_standalone_vowel(&normalized[i..]) {
                let mut segment = String::from("\u{0F68}");
                segment.push_str(alphabet.vowel(vowel).unwrap_or_default());
                out.push_str(&segment);
                last_segment = segment;
                last_was_syllable = true;
                i += len;
                continue;
            }
        }

        if let Some(parsed) = parse_syllable(&normalized[i..]) {
            let wylie: String = normalized[i..i + parsed.consumed].iter().collect();
            let syllable = build_syllable(&parsed.components, &wylie);
            out.push_str(&syllable.unicode_text);
            last_segment = syllable.unicode_text;
            last_was_syllable = true;
            i += parsed.consumed;
            continue;
        }

        debug!(%c, "no match, passing character through");
        out.push(c);
        last_segment = c.to_string();
        last_was_syllable = false;
        i += 1;
    }

    out
}

/// Longest token from a longest-first key list.
fn match_token<'a>(text: &[char], keys: &[&'a str]) -> Option<(&'a str, usize)> {
    keys.iter()
        .find(|&&key| starts_with(text, key))
        .map(|&key| (key, token_len(key)))
}

/// The anusvara takes its alternate codepoint after a rendered `u` vowel.
fn render_mark(token: &str, last_segment: &str) -> String {
    let alphabet = Alphabet::global();
    if matches!(token, "M" | "~M") && last_segment.contains('\u{0F74}') {
        return crate::alphabet::table::ANUSVARA_AFTER_U.to_string();
    }
    alphabet.sanskrit_mark(token).unwrap_or_default().to_string()
}

/// A standalone vowel is consumed only before a terminator or an uppercase
/// letter; anything else defers to the syllable parser.
fn match_standalone_vowel(text: &[char]) -> Option<(&'static str, usize)> {
    let alphabet = Alphabet::global();
    for &key in alphabet.vowel_keys() {
        if key == "a" || !starts_with(text, key) {
            continue;
        }
        let len = token_len(key);
        let consumable = match text.get(len) {
            None => true,
            Some(&next) => next.is_uppercase() || TERMINATORS.contains(&next),
        };
        if consumable {
            return Some((key, len));
        }
    }
    None
}

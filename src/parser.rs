//! Multi-strategy syllable parser.
//!
//! Each strategy commits to a structural shape up front (bare root, with a
//! superscript, with a prescript, or both) and then runs the common
//! root/subscript/vowel/postscript tail. The longest successful parse wins;
//! on a tie the earliest strategy keeps the match. Attachment matching uses
//! lookahead so a letter is never claimed as prescript or superscript when
//! the following text cannot carry a root, or when it opens a long
//! multi-letter consonant.

use crate::alphabet::{rules, Alphabet};
use crate::scan::{starts_with, starts_with_ci, token_len};
use crate::syllable::{Subscript, SyllableComponents};

/// A successful parse: the slot set plus exactly how many input characters it
/// consumed (explicit `+` markers included, unwritten inherent vowels not).
#[derive(Clone, Debug)]
pub struct ParsedSyllable {
    pub components: SyllableComponents,
    pub consumed: usize,
}

#[derive(Clone, Copy, Debug)]
enum Strategy {
    Simple,
    WithSuperscript,
    WithPrescript,
    Full,
}

const STRATEGIES: [Strategy; 4] = [
    Strategy::Simple,
    Strategy::WithSuperscript,
    Strategy::WithPrescript,
    Strategy::Full,
];

/// Vowel letters that turn a following apostrophe into the start of a new
/// syllable (`ba'i` is `ba` + `'i`).
const VOWEL_LETTERS: &[char] = &['a', 'i', 'u', 'e', 'o', 'A', 'U'];

/// Parse the longest syllable at the start of `text`, or report that no
/// syllable starts here.
pub fn parse_syllable(text: &[char]) -> Option<ParsedSyllable> {
    if text.is_empty() {
        return None;
    }
    let mut best: Option<ParsedSyllable> = None;
    for strategy in STRATEGIES {
        if let Some(parsed) = try_strategy(text, strategy) {
            if best.as_ref().map_or(true, |b| parsed.consumed > b.consumed) {
                best = Some(parsed);
            }
        }
    }
    best
}

fn try_strategy(text: &[char], strategy: Strategy) -> Option<ParsedSyllable> {
    let mut pos = 0;
    let mut prescript = None;
    let mut superscript = None;

    if matches!(strategy, Strategy::WithPrescript | Strategy::Full) {
        if let Some((token, len)) = match_attachment(&text[pos..], rules::PRESCRIPTS) {
            prescript = Some(token);
            pos += len;
        }
    }
    if matches!(strategy, Strategy::WithSuperscript | Strategy::Full) {
        if let Some((token, len)) = match_attachment(&text[pos..], rules::SUPERSCRIPTS) {
            superscript = Some(token);
            pos += len;
        }
    }

    let Some((root, root_len)) = match_root(&text[pos..]) else {
        // A vowel-initial syllable: the pure-vowel letter is the implicit
        // root and consumes nothing; a vowel cannot carry a stack.
        if prescript.is_some() || superscript.is_some() {
            return None;
        }
        let (vowel, vowel_len) = match_vowel(&text[pos..])?;
        if vowel == "a" {
            return None;
        }
        pos += vowel_len;
        let mut components = SyllableComponents::new("a");
        components.vowel = vowel;
        pos += match_postscripts(&text[pos..], &mut components);
        return Some(ParsedSyllable {
            components,
            consumed: pos,
        });
    };
    pos += root_len;

    // An impossible superscript+root pairing kills the whole attempt.
    if let Some(sup) = superscript.as_deref() {
        match rules::allowed_roots(rules::SUPERSCRIPT_COMBINATIONS, sup) {
            Some(allowed) if allowed.contains(&root.as_str()) => {}
            _ => return None,
        }
    }

    let mut components = SyllableComponents::new(root);
    components.prescript = prescript;
    components.superscript = superscript;

    if let Some((subscript, len)) = match_subscript(&text[pos..]) {
        components.subscript = Some(subscript);
        pos += len;
    }

    if let Some((vowel, len)) = match_vowel(&text[pos..]) {
        components.vowel = vowel;
        pos += len;
    }

    pos += match_postscripts(&text[pos..], &mut components);

    Some(ParsedSyllable {
        components,
        consumed: pos,
    })
}

/// Match a prescript or superscript candidate, with lookahead.
fn match_attachment(text: &[char], tokens: &[&str]) -> Option<(String, usize)> {
    for &token in tokens {
        if !starts_with_ci(text, token) {
            continue;
        }
        let remainder = &text[token_len(token)..];
        // Reject when the remainder opens a 3+ letter consonant (the letter
        // belongs to that spelling) or when no root can follow.
        if opens_long_consonant(remainder) {
            continue;
        }
        if !has_root_ahead(remainder) {
            continue;
        }
        return Some((token.to_string(), token_len(token)));
    }
    None
}

fn opens_long_consonant(text: &[char]) -> bool {
    Alphabet::global()
        .consonant_keys()
        .iter()
        .any(|&key| token_len(key) > 2 && starts_with_ci(text, key))
}

fn has_root_ahead(text: &[char]) -> bool {
    Alphabet::global()
        .consonant_keys()
        .iter()
        .any(|&key| key != "a" && starts_with_ci(text, key))
}

/// Longest consonant at the front: exact case first (Sanskrit capitals are
/// matched literally), then case-insensitive folding to the lowercase key.
fn match_root(text: &[char]) -> Option<(String, usize)> {
    let alphabet = Alphabet::global();
    for &key in alphabet.consonant_keys() {
        if starts_with(text, key) {
            return Some((key.to_string(), token_len(key)));
        }
    }
    for &key in alphabet.consonant_keys() {
        if starts_with_ci(text, key) {
            return Some((key.to_ascii_lowercase(), token_len(key)));
        }
    }
    None
}

/// One or two subscripts: implicit bare letters, or the explicit `+` form
/// resolved case-sensitively against the subjoined table.
fn match_subscript(text: &[char]) -> Option<(Subscript, usize)> {
    let alphabet = Alphabet::global();

    if text.first() == Some(&'+') {
        let (first, first_len) = match_subjoined(&text[1..])?;
        let mut consumed = 1 + first_len;
        if text.get(consumed) == Some(&'+') {
            if let Some((second, second_len)) = match_subjoined(&text[consumed + 1..]) {
                return Some((Subscript::Double(first, second), consumed + 1 + second_len));
            }
        }
        return Some((Subscript::Single(first), consumed));
    }

    for &key in alphabet.subscript_keys() {
        if starts_with_ci(text, key) {
            let first_len = token_len(key);
            for &second in alphabet.subscript_keys() {
                if starts_with_ci(&text[first_len..], second) {
                    return Some((
                        Subscript::Double(key.to_string(), second.to_string()),
                        first_len + token_len(second),
                    ));
                }
            }
            return Some((Subscript::Single(key.to_string()), first_len));
        }
    }
    None
}

fn match_subjoined(text: &[char]) -> Option<(String, usize)> {
    Alphabet::global()
        .subjoined_keys()
        .iter()
        .find(|&&key| starts_with(text, key))
        .map(|&key| (key.to_string(), token_len(key)))
}

/// Explicit vowel spelling, exact case, longest first.
fn match_vowel(text: &[char]) -> Option<(String, usize)> {
    Alphabet::global()
        .vowel_keys()
        .iter()
        .find(|&&key| starts_with(text, key))
        .map(|&key| (key.to_string(), token_len(key)))
}

/// Up to two postscripts; the second is only attempted after the first.
fn match_postscripts(text: &[char], components: &mut SyllableComponents) -> usize {
    let Some((first, first_len)) = match_postscript(text) else {
        return 0;
    };
    components.postscript1 = Some(first);
    let mut consumed = first_len;
    if let Some((second, second_len)) = match_postscript(&text[consumed..]) {
        components.postscript2 = Some(second);
        consumed += second_len;
    }
    consumed
}

fn match_postscript(text: &[char]) -> Option<(String, usize)> {
    let first = *text.first()?;
    // A capital opens a new Sanskrit syllable, never a postscript.
    if first.is_uppercase() {
        return None;
    }
    // An apostrophe before a vowel letter begins a genitive particle.
    if first == '\'' {
        if let Some(next) = text.get(1) {
            if VOWEL_LETTERS.contains(next) {
                return None;
            }
        }
    }
    rules::POSTSCRIPTS
        .iter()
        .find(|&&token| starts_with_ci(text, token))
        .map(|&token| (token.to_string(), token_len(token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedSyllable {
        parse_syllable(&text.chars().collect::<Vec<char>>()).expect("no parse")
    }

    #[test]
    fn test_simple_root_vowel() {
        let p = parse("ka");
        assert_eq!(p.components.root, "k");
        assert_eq!(p.components.vowel, "a");
        assert_eq!(p.consumed, 2);
    }

    #[test]
    fn test_longest_consonant_wins() {
        let p = parse("tsha");
        assert_eq!(p.components.root, "tsh");
        assert_eq!(p.consumed, 4);
    }

    #[test]
    fn test_full_stack() {
        let p = parse("bsgrubs");
        assert_eq!(p.components.prescript.as_deref(), Some("b"));
        assert_eq!(p.components.superscript.as_deref(), Some("s"));
        assert_eq!(p.components.root, "g");
        assert_eq!(
            p.components.subscript,
            Some(Subscript::Single("r".into()))
        );
        assert_eq!(p.components.vowel, "u");
        assert_eq!(p.components.postscript1.as_deref(), Some("b"));
        assert_eq!(p.components.postscript2.as_deref(), Some("s"));
        assert_eq!(p.consumed, 7);
    }

    #[test]
    fn test_prescript_needs_root_ahead() {
        // `ga` must not read `g` as a prescript of nothing.
        let p = parse("ga");
        assert!(p.components.prescript.is_none());
        assert_eq!(p.components.root, "g");
    }

    #[test]
    fn test_superscript_root_compatibility() {
        // `sha` is the single consonant, not `s` stacked over `h`.
        let p = parse("sha");
        assert!(p.components.superscript.is_none());
        assert_eq!(p.components.root, "sh");
        // `lha` is a real superscript stack.
        let p = parse("lha");
        assert_eq!(p.components.superscript.as_deref(), Some("l"));
        assert_eq!(p.components.root, "h");
    }

    #[test]
    fn test_double_subscript() {
        let p = parse("grwa");
        assert_eq!(
            p.components.subscript,
            Some(Subscript::Double("r".into(), "w".into()))
        );
        assert_eq!(p.consumed, 4);
    }

    #[test]
    fn test_explicit_subscript() {
        let p = parse("d+me");
        assert_eq!(p.components.root, "d");
        assert_eq!(
            p.components.subscript,
            Some(Subscript::Single("m".into()))
        );
        assert_eq!(p.components.vowel, "e");
        assert_eq!(p.consumed, 4);
    }

    #[test]
    fn test_explicit_subscript_sanskrit_capital() {
        let p = parse("n+Dai");
        assert_eq!(p.components.root, "n");
        assert_eq!(
            p.components.subscript,
            Some(Subscript::Single("Da".into()))
        );
        assert_eq!(p.components.vowel, "i");
        assert_eq!(p.consumed, 5);
    }

    #[test]
    fn test_capital_never_postscript() {
        let p = parse("hUM");
        assert_eq!(p.components.root, "h");
        assert_eq!(p.components.vowel, "U");
        assert!(p.components.postscript1.is_none());
        assert_eq!(p.consumed, 2);
    }

    #[test]
    fn test_apostrophe_before_vowel_not_postscript() {
        let p = parse("ba'i");
        assert_eq!(p.components.root, "b");
        assert_eq!(p.components.vowel, "a");
        assert!(p.components.postscript1.is_none());
        assert_eq!(p.consumed, 2);
        // The remainder parses as the genitive particle.
        let p = parse("'i");
        assert_eq!(p.components.root, "'");
        assert_eq!(p.components.vowel, "i");
    }

    #[test]
    fn test_apostrophe_postscript_still_matches() {
        let p = parse("ka'");
        assert_eq!(p.components.postscript1.as_deref(), Some("'"));
        assert_eq!(p.consumed, 3);
    }

    #[test]
    fn test_vowel_initial_syllable() {
        let p = parse("om");
        assert_eq!(p.components.root, "a");
        assert_eq!(p.components.vowel, "o");
        assert_eq!(p.components.postscript1.as_deref(), Some("m"));
        // The implicit root consumes nothing.
        assert_eq!(p.consumed, 2);
    }

    #[test]
    fn test_sanskrit_retroflex_exact_case() {
        let p = parse("Nai");
        assert_eq!(p.components.root, "Na");
        assert_eq!(p.components.vowel, "i");
    }

    #[test]
    fn test_no_syllable_here() {
        assert!(parse_syllable(&['@']).is_none());
        assert!(parse_syllable(&[]).is_none());
    }

    #[test]
    fn test_prescript_strategy() {
        let p = parse("dbyar");
        assert_eq!(p.components.prescript.as_deref(), Some("d"));
        assert_eq!(p.components.root, "b");
        assert_eq!(
            p.components.subscript,
            Some(Subscript::Single("y".into()))
        );
        assert_eq!(p.components.postscript1.as_deref(), Some("r"));
        assert_eq!(p.consumed, 5);
    }

    #[test]
    fn test_implicit_m_subscript_stacks() {
        let p = parse("dme");
        assert_eq!(p.components.root, "d");
        assert_eq!(
            p.components.subscript,
            Some(Subscript::Single("m".into()))
        );
        assert_eq!(p.components.vowel, "e");
        assert_eq!(p.consumed, 3);
    }
}

//! Validation parse strategies.
//!
//! Deliberately independent of the forward parser: the validator re-parses
//! with five shapes of its own and lets the caller pick the best candidate,
//! so a transliteration bug cannot hide a validation bug (or vice versa).

use crate::alphabet::{rules, Alphabet};
use crate::scan::{starts_with, starts_with_folded, token_len};
use crate::syllable::{Subscript, SyllableComponents};

/// A candidate parse and how many characters it consumed.
pub(super) type Parse = (SyllableComponents, usize);

pub(super) const STRATEGIES: [fn(&[char]) -> Option<Parse>; 5] = [
    parse_simple,
    parse_with_subscript,
    parse_with_superscript,
    parse_with_prescript,
    parse_full,
];

/// root [vowel] [postscript] [postscript2]
///
/// Also covers vowel-initial tokens (`om`): with no consonant root the
/// pure-vowel placeholder carries the syllable, consuming nothing itself.
fn parse_simple(text: &[char]) -> Option<Parse> {
    let mut pos = 0;
    let Some((root, len)) = match_root(text) else {
        let mut components = SyllableComponents::new("a");
        let vowel_len = match_vowel(text, false, &mut components);
        if vowel_len == 0 {
            return None;
        }
        pos += vowel_len;
        pos += match_postscripts(&text[pos..], &mut components);
        return Some((components, pos));
    };
    pos += len;
    let mut components = SyllableComponents::new(root);

    pos += match_vowel(&text[pos..], true, &mut components);
    pos += match_postscripts(&text[pos..], &mut components);
    Some((components, pos))
}

/// root subscript(s) [vowel] [postscript] [postscript2]
fn parse_with_subscript(text: &[char]) -> Option<Parse> {
    let mut pos = 0;
    let (root, len) = match_root(text)?;
    pos += len;
    let mut components = SyllableComponents::new(root);

    let (subscript, len) = match_subscripts(&text[pos..])?;
    components.subscript = Some(subscript);
    pos += len;

    pos += match_vowel(&text[pos..], true, &mut components);
    pos += match_postscripts(&text[pos..], &mut components);
    Some((components, pos))
}

/// superscript root [vowel] [postscript] [postscript2]
fn parse_with_superscript(text: &[char]) -> Option<Parse> {
    let mut pos = 0;
    let superscript = match_attachment(text, rules::SUPERSCRIPTS)?;
    pos += token_len(&superscript);

    let (root, len) = match_root(&text[pos..])?;
    pos += len;
    let mut components = SyllableComponents::new(root);
    components.superscript = Some(superscript);

    pos += match_vowel(&text[pos..], false, &mut components);
    pos += match_postscripts(&text[pos..], &mut components);
    Some((components, pos))
}

/// prescript root [vowel] [postscript] [postscript2]
fn parse_with_prescript(text: &[char]) -> Option<Parse> {
    let mut pos = 0;
    let prescript = match_attachment(text, rules::PRESCRIPTS)?;
    pos += token_len(&prescript);

    let (root, len) = match_root(&text[pos..])?;
    pos += len;
    let mut components = SyllableComponents::new(root);
    components.prescript = Some(prescript);

    pos += match_vowel(&text[pos..], false, &mut components);
    pos += match_postscripts(&text[pos..], &mut components);
    Some((components, pos))
}

/// [prescript] [superscript] root [subscript] [vowel] [postscripts];
/// redundant with the simpler strategies unless an attachment matched.
fn parse_full(text: &[char]) -> Option<Parse> {
    let mut pos = 0;
    let prescript = match_attachment(text, rules::PRESCRIPTS);
    if let Some(prescript) = &prescript {
        pos += token_len(prescript);
    }
    let superscript = match_attachment(&text[pos..], rules::SUPERSCRIPTS);
    if let Some(superscript) = &superscript {
        pos += token_len(superscript);
    }
    if prescript.is_none() && superscript.is_none() {
        return None;
    }

    let (root, len) = match_root(&text[pos..])?;
    pos += len;
    let mut components = SyllableComponents::new(root);
    components.prescript = prescript;
    components.superscript = superscript;

    if let Some(&key) = Alphabet::global()
        .subscript_keys()
        .iter()
        .find(|&&key| starts_with_folded(&text[pos..], key))
    {
        components.subscript = Some(Subscript::Single(key.to_string()));
        pos += token_len(key);
    }

    pos += match_vowel(&text[pos..], true, &mut components);
    pos += match_postscripts(&text[pos..], &mut components);
    Some((components, pos))
}

/// Longest consonant, exact case or folded, normalized to the lowercase key.
fn match_root(text: &[char]) -> Option<(String, usize)> {
    Alphabet::global()
        .consonant_keys()
        .iter()
        .find(|&&key| starts_with(text, key) || starts_with_folded(text, key))
        .map(|&key| (key.to_ascii_lowercase(), token_len(key)))
}

fn match_attachment(text: &[char], tokens: &[&str]) -> Option<String> {
    tokens
        .iter()
        .find(|&&token| starts_with_folded(text, token))
        .map(|&token| token.to_string())
}

/// One or two subscripts from the dedicated subscript repertoire.
fn match_subscripts(text: &[char]) -> Option<(Subscript, usize)> {
    let alphabet = Alphabet::global();
    let first = alphabet
        .subscript_keys()
        .iter()
        .find(|&&key| starts_with_folded(text, key))
        .copied()?;
    let mut pos = token_len(first);
    if let Some(&second) = alphabet
        .subscript_keys()
        .iter()
        .find(|&&key| starts_with_folded(&text[pos..], key))
    {
        pos += token_len(second);
        return Some((Subscript::Double(first.to_string(), second.to_string()), pos));
    }
    Some((Subscript::Single(first.to_string()), pos))
}

/// Explicit vowel. The literal `a` only counts when `allow_explicit_a` is set
/// and more of the token follows (a trailing `a` is the unwritten inherent
/// vowel, not a spelled one).
fn match_vowel(text: &[char], allow_explicit_a: bool, components: &mut SyllableComponents) -> usize {
    for &key in Alphabet::global().vowel_keys() {
        if !starts_with(text, key) {
            continue;
        }
        if key == "a" {
            if allow_explicit_a && text.len() > 1 {
                components.vowel = "a".to_string();
                return 1;
            }
            continue;
        }
        components.vowel = key.to_string();
        return token_len(key);
    }
    0
}

fn match_postscripts(text: &[char], components: &mut SyllableComponents) -> usize {
    let Some(&first) = rules::VALID_POSTSCRIPTS
        .iter()
        .find(|&&token| starts_with_folded(text, token))
    else {
        return 0;
    };
    components.postscript1 = Some(first.to_string());
    let mut pos = token_len(first);

    if let Some(&second) = rules::VALID_SECOND_POSTSCRIPTS
        .iter()
        .find(|&&token| starts_with_folded(&text[pos..], token))
    {
        components.postscript2 = Some(second.to_string());
        pos += token_len(second);
    }
    pos
}

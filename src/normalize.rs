//! Case normalizer for raw EWTS input.
//!
//! Downstream parsing assumes lowercase spellings, but three phenomena are
//! case-significant and must survive normalization: the long-vowel marker
//! `A` (only after a lowercase letter), the Sanskrit retroflex capitals
//! (`Ta`, `Tha`, `Da`, `Dha`, `Na`, `Sha`), and standalone `M`/`H` marks
//! before a terminator. Everything else folds to lowercase, multi-letter
//! consonants first so `KHA` becomes `kha` rather than `k` + `ha`.

use crate::alphabet::Alphabet;
use crate::scan::starts_with;

const RETROFLEX_3: &[&str] = &["Tha", "Dha", "Sha"];
const RETROFLEX_2: &[&str] = &["Ta", "Da", "Na"];

/// Characters that may follow a standalone Sanskrit mark.
const TERMINATORS: &[char] = &[' ', '/', '|', '\n', '\t', 'M'];

/// Normalize case while preserving the case-significant distinctions.
/// Never fails; unrecognized characters pass through. Idempotent.
pub fn normalize_case(text: &str) -> String {
    let alphabet = Alphabet::global();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        // Retroflex capitals, three-letter forms before two-letter forms.
        if let Some(retro) = RETROFLEX_3.iter().find(|r| starts_with(&chars[i..], r)) {
            out.push_str(retro);
            i += 3;
            continue;
        }
        if let Some(retro) = RETROFLEX_2.iter().find(|r| starts_with(&chars[i..], r)) {
            out.push_str(retro);
            i += 2;
            continue;
        }

        let c = chars[i];

        // Standalone Sanskrit marks survive only before a terminator.
        if (c == 'M' || c == 'H')
            && (i + 1 >= chars.len() || TERMINATORS.contains(&chars[i + 1]))
        {
            out.push(c);
            i += 1;
            continue;
        }

        // `A` is the long vowel only when a lowercase letter precedes it.
        if c == 'A' {
            if i > 0 && chars[i - 1].is_lowercase() {
                out.push('A');
            } else {
                out.push('a');
            }
            i += 1;
            continue;
        }

        // Multi-letter consonant folding, longest first (4 covers forms
        // like `TSHA`).
        let mut folded = false;
        for len in [4usize, 3, 2] {
            if i + len <= chars.len() {
                let lower: String = chars[i..i + len]
                    .iter()
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                if alphabet.is_consonant_token(&lower) {
                    out.push_str(&lower);
                    i += len;
                    folded = true;
                    break;
                }
            }
        }
        if folded {
            continue;
        }

        if c.is_uppercase() {
            // A retroflex capital written with a bare vowel (`Ni`) becomes
            // the capital digraph plus the vowel (`Nai`), so the parser sees
            // the Sanskrit root spelling.
            if matches!(c, 'N' | 'T' | 'D' | 'S') && i + 1 < chars.len() {
                let next = chars[i + 1];
                if next.is_lowercase() && next != 'h' && next != 'a' {
                    out.push(c);
                    out.push('a');
                    i += 1;
                    continue;
                }
            }
            let lower = c.to_ascii_lowercase();
            if alphabet.is_consonant_token(lower.encode_utf8(&mut [0; 4])) {
                out.push(lower);
            } else {
                out.push(c);
            }
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}

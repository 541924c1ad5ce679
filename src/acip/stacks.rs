//! Standard Tibetan stack recognition for the ACIP pipeline.
//!
//! When ACIP text is lowered to EWTS, consonant runs that do not form a
//! standard Tibetan stack need explicit `+` joins (Sanskrit ligatures). The
//! pattern lists every standard base stack and allows trailing `r`/`w`/`y`
//! subscripts.

use std::sync::OnceLock;

use regex::Regex;

fn standard_stack_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            "(?i)^([bcdgjklm'npstzhSDTN]|bgl|dm|sm|sn|kl|dk|bk|bkl|rk|lk|sk|brk|bsk|kh|mkh|'kh|\
             gl|dg|bg|mg|'g|rg|lg|sg|brg|bsg|ng|dng|mng|rng|lng|sng|brng|bsng|gc|bc|lc|\
             ch|mch|'ch|mj|'j|rj|lj|brj|ny|gny|mny|rny|sny|brny|bsny|gt|bt|rt|lt|st|brt|\
             blt|bst|th|mth|'th|gd|bd|md|'d|rd|ld|sd|brd|bld|bsd|gn|mn|rn|brn|bsn|dp|lp|\
             sp|ph|'ph|bl|db|'b|rb|lb|sb|rm|ts|gts|bts|rts|sts|brts|bsts|tsh|mtsh|'tsh|\
             dz|mdz|'dz|brdz|zh|gzh|bzh|zl|gz|bz|bzl|rl|brl|sh|gsh|bsh|sl|gs|bs|bsl|lh)\
             [rwy]*$",
        )
        .expect("static stack pattern")
    })
}

/// Stacks whose first letter is a prefix: the prefix stays unjoined and the
/// rest of the run takes `+`.
pub(super) static PREFIXED_STACKS: &[&str] = &[
    "bg", "dm", "dk", "bk", "brk", "bsk", "mkh", "'kh", "dg", "mg", "'g", "brg", "bsg", "dng",
    "mng", "brng", "bsng", "gc", "bc", "ch", "mch", "'ch", "mj", "'j", "brj", "gny", "mny", "brny",
    "bsny", "gt", "bt", "brt", "blt", "bst", "mth", "'th", "gd", "bd", "md", "'d", "brd", "bld",
    "bsd", "gn", "mn", "brn", "bsn", "dp", "ph", "'ph", "bl", "db", "'b", "gts", "bts", "brts",
    "bsts", "tsh", "mtsh", "'tsh", "mdz", "'dz", "brdz", "gzh", "bzh", "gz", "bz", "bzl", "brl",
    "gsh", "bsh", "gs", "bs", "bsl",
];

/// Does this consonant run spell a standard Tibetan stack?
pub(super) fn is_standard_stack(consonants: &str) -> bool {
    standard_stack_pattern().is_match(&consonants.to_ascii_lowercase())
}

pub(super) fn is_prefixed_stack(first_two: &str) -> bool {
    let lowered = first_two.to_ascii_lowercase();
    PREFIXED_STACKS
        .iter()
        .any(|stack| stack.eq_ignore_ascii_case(&lowered))
}

/// Split a consonant run into letters and digraphs, longest spellings first.
pub(super) fn tokenize_consonants(consonants: &str) -> Vec<String> {
    const MULTI: &[&str] = &[
        "zh", "ny", "dz", "ts", "tsh", "ch", "ph", "th", "sh", "Sh", "kh", "ng",
    ];
    const SINGLE: &str = "NDTRYWbcdghjklmnprstwyz'";

    let chars: Vec<char> = consonants.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let mut matched = false;
        for &token in MULTI {
            if crate::scan::starts_with(&chars[i..], token) {
                tokens.push(token.to_string());
                i += token.len();
                matched = true;
                break;
            }
        }
        if !matched {
            if SINGLE.contains(chars[i]) {
                tokens.push(chars[i].to_string());
            }
            i += 1;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_stacks() {
        for stack in ["bsgr", "bsg", "rk", "bl", "sk", "k", "'kh", "lh", "bsgrw"] {
            assert!(is_standard_stack(stack), "{stack} should be standard");
        }
    }

    #[test]
    fn test_non_standard_stacks() {
        for stack in ["dh", "kss", "nD"] {
            assert!(!is_standard_stack(stack), "{stack} should not be standard");
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize_consonants("dh"), ["d", "h"]);
        assert_eq!(tokenize_consonants("khr"), ["kh", "r"]);
        assert_eq!(tokenize_consonants("ngg"), ["ng", "g"]);
    }

    #[test]
    fn test_prefixed_stack() {
        assert!(is_prefixed_stack("bs"));
        assert!(is_prefixed_stack("dm"));
        assert!(!is_prefixed_stack("kk"));
    }
}

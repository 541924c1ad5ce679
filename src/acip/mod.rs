//! ACIP ⇔ EWTS conversion.
//!
//! ACIP (Asian Classics Input Project) is an alternative ASCII encoding of
//! Tibetan used for digitized Buddhist texts. Conversion is a fixed sequence
//! of string and regex rewrites with no shared state with the syllable
//! engine; reaching Unicode always goes through EWTS.

mod stacks;

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug_span;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect("static regex"))
        }
    };
}

static_regex!(re_comment_bracket, r"\[[^\]]*\]");
static_regex!(re_comment_at, r"@[^ ]* *");
static_regex!(re_parens, r"/([^/]*)/");
static_regex!(re_asterisks, r"\*+");
static_regex!(re_ga_yas, r"([BCDGHJKLMN'PRSTWYZhdtn])A-");
static_regex!(re_acip_i, r"A?i");
static_regex!(re_acip_i_chung, r"A?'-I");
static_regex!(re_vowel_after_cons, r"([BCDGHJKLMNPRSTWYZ])'([AEOUI])");
static_regex!(re_a_chung_vowel, r"(^|[^BCDGHJKLMNPR'STWYZhdtn])A'([AEOUI])");
static_regex!(re_a_plus_vowel, r"A([AEIOUaeiou])");
static_regex!(re_apostrophes, "[\u{2019}\u{02BC}\u{02B9}'\u{02BE}]");
static_regex!(re_stack_run, r"([bcdgjklm'nprstwyzhSDTN+]+)([aeiouAEIOU.-])");
static_regex!(re_space_before_punct, r"([aeiouIAEU]g|[gk][aeiouAEIU]|[;!/|]) +([;!/|])");
static_regex!(re_space_after_punct, r"([;!/|H]) +");
static_regex!(re_ewts_parens, r"\(([^)]*)\)");
static_regex!(re_leading_star, r"(^|\[)\*");
static_regex!(re_leading_hash, r"(^|\[)#");
static_regex!(re_u0f38, r"(?i)\\U0F38");
static_regex!(re_independent_vowel, r"(^|[^BCDGHJKLMNPR'STVYZhdtnEO])([AEOUIqaewiou])");

/// ASCII case swap; ACIP writes consonants uppercase where EWTS writes them
/// lowercase, and the remaining case distinctions flip with them.
fn swapcase(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Convert ACIP transliteration to EWTS.
pub fn acip_to_ewts(text: &str) -> String {
    let _span = debug_span!("acip_to_ewts", chars = text.chars().count()).entered();

    // Comments and yichung parentheses.
    let mut t = re_comment_bracket().replace_all(text, "").into_owned();
    t = re_comment_at().replace_all(&t, "").into_owned();
    t = t.replace(['(', ')'], "");

    // /.../ in ACIP is (...) in EWTS; stray slashes drop.
    t = re_parens().replace_all(&t, "(${1})").into_owned();
    t = t.replace('/', "");

    // Punctuation.
    t = t.replace(';', "|");
    t = t.replace('#', "@##");
    t = re_asterisks()
        .replace_all(&t, |caps: &Captures| format!("@{}", "#".repeat(caps[0].len())))
        .into_owned();
    t = t.replace('\\', "?");
    t = t.replace(',', "/");
    t = t.replace('`', "!");

    // Special characters.
    t = t.replace('^', "\\u0F38");
    t = t.replace('%', "~x");
    t = t.replace('V', "W");

    // TS/TZ must be resolved before the case swap.
    t = t.replace("TS", "ZZZ");
    t = t.replace("TZ", "TS");
    t = t.replace("ZZZ", "TSH");

    // GA-YAS dots.
    t = re_ga_yas().replace_all(&t, "${1}.").into_owned();
    t = t.replace('-', ".");

    // Vowel rewrites (lowercase `i` is the reversed vowel in ACIP).
    t = re_acip_i().replace_all(&t, "-I").into_owned();
    t = re_acip_i_chung().replace_all(&t, "-i").into_owned();
    t = t.replace('o', "x");

    // Consonant + apostrophe + vowel patterns (B'I is bi).
    t = re_vowel_after_cons()
        .replace_all(&t, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
        })
        .into_owned();
    t = re_a_chung_vowel()
        .replace_all(&t, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
        })
        .into_owned();
    t = re_a_plus_vowel().replace_all(&t, "${1}").into_owned();

    // Lowercase `sh` is the Sanskrit retroflex in ACIP; mark it so the case
    // swap turns it into the capital spelling.
    t = t.replace("sh", "sH");

    t = re_apostrophes().replace_all(&t, "'").into_owned();
    t = swapcase(&t);

    // Post-swap vowel cleanup.
    t = t.replace("ee", "ai");
    t = t.replace("oo", "au");
    t = t.replace(':', "H");

    // Insert + into non-standard stacks.
    t = re_stack_run()
        .replace_all(&t, |caps: &Captures| add_plus(&caps[1], &caps[2]))
        .into_owned();

    // Space vs tsheg normalization around punctuation.
    t = re_space_before_punct().replace_all(&t, "${1}_${2}").into_owned();
    t = re_space_after_punct().replace_all(&t, "${1}_").into_owned();

    t
}

/// Convert EWTS transliteration to ACIP.
pub fn ewts_to_acip(text: &str) -> String {
    let _span = debug_span!("ewts_to_acip", chars = text.chars().count()).entered();

    let mut t = re_apostrophes().replace_all(text, "'").into_owned();
    t = re_ewts_parens().replace_all(&t, "/${1}/").into_owned();

    // Punctuation.
    t = t.replace('|', ";");
    t = re_leading_star().replace_all(&t, "${1}").into_owned();
    t = t.replace("@##", "ZZ");
    t = t.replace("@#", "*");
    t = t.replace('_', " ");
    t = re_leading_hash().replace_all(&t, "${1}").into_owned();
    t = t.replace("ZZ", "#");
    t = t.replace('?', "\\");
    t = t.replace('/', ",");
    t = t.replace('!', "`");

    // Special characters.
    t = re_u0f38().replace_all(&t, "^").into_owned();
    t = t.replace("~X", "%");
    t = t.replace('H', ":");

    // ts/tsh before the case swap.
    t = t.replace("tsh", "ZZZ");
    t = t.replace("ts", "tz");
    t = t.replace("ZZZ", "ts");

    t = t.replace('w', "v");
    t = swapcase(&t);

    // Reversed vowels via placeholders.
    t = t.replace("-I", "w");
    t = t.replace("-i", "q");
    t = t.replace('.', "-");
    t = t.replace("AI", "EE");
    t = t.replace("AU", "OO");

    // Independent vowels take the A carrier in ACIP.
    t = re_independent_vowel().replace_all(&t, "${1}A${2}").into_owned();

    // Remaining lowercase vowels were capitals in EWTS (long vowels); they
    // take the apostrophe spelling. The placeholders resolve last.
    t = t.replace('a', "'A");
    t = t.replace('u', "'U");
    t = t.replace('o', "'O");
    t = t.replace('e', "'E");
    t = t.replace('i', "'I");
    t = t.replace('q', "'i");
    t = t.replace('w', "i");
    t = t.replace('x', "o");

    t = t.replace("sH", "sh");
    t
}

/// ACIP → Tibetan Unicode, through EWTS.
pub fn acip_to_unicode(text: &str) -> String {
    crate::forward::wylie_to_unicode(&acip_to_ewts(text), true)
}

/// Tibetan Unicode → ACIP, through EWTS.
pub fn unicode_to_acip(text: &str) -> String {
    ewts_to_acip(&crate::reverse::unicode_to_wylie(text))
}

/// Join a consonant run with `+` unless it spells a standard stack.
fn add_plus(consonants: &str, vowel: &str) -> String {
    if consonants.contains('+') || stacks::is_standard_stack(consonants) {
        return format!("{consonants}{vowel}");
    }
    let tokens = stacks::tokenize_consonants(consonants);
    if tokens.len() <= 1 {
        return format!("{consonants}{vowel}");
    }
    let first_two = format!("{}{}", tokens[0], tokens[1]);
    if stacks::is_prefixed_stack(&first_two) {
        // The first letter is a prefix; only the rest of the run stacks.
        return format!("{}{}{}", tokens[0], tokens[1..].join("+"), vowel);
    }
    format!("{}{}", tokens.join("+"), vowel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acip_to_ewts_basic() {
        assert_eq!(acip_to_ewts("BSGRUBS"), "bsgrubs");
        assert_eq!(acip_to_ewts("KHAMS"), "khams");
        assert_eq!(acip_to_ewts("BA'I"), "ba'i");
    }

    #[test]
    fn test_ts_tz_distinction() {
        assert_eq!(acip_to_ewts("TSA"), "tsha");
        assert_eq!(acip_to_ewts("TZA"), "tsa");
    }

    #[test]
    fn test_reversed_vowel() {
        assert_eq!(acip_to_ewts("L'i"), "l-I");
    }

    #[test]
    fn test_diphthongs() {
        assert_eq!(acip_to_ewts("AEE"), "ai");
        assert_eq!(acip_to_ewts("AOO"), "au");
    }

    #[test]
    fn test_v_is_w() {
        assert_eq!(acip_to_ewts("BSGRVUBS"), "bsgrwubs");
        assert_eq!(acip_to_ewts("DRA"), "dra");
    }

    #[test]
    fn test_sanskrit_stack_keeps_plus() {
        assert_eq!(acip_to_ewts("PAn+dI"), "paN+Di");
    }

    #[test]
    fn test_non_standard_stack_gains_plus() {
        assert_eq!(acip_to_ewts("DHA"), "d+ha");
    }

    #[test]
    fn test_ewts_to_acip_basic() {
        assert_eq!(ewts_to_acip("bsgrubs"), "BSGRUBS");
        assert_eq!(ewts_to_acip("ba'i"), "BA'I");
    }

    #[test]
    fn test_ewts_to_acip_ts() {
        assert!(ewts_to_acip("tsha").contains("TS"));
        assert!(ewts_to_acip("tsa").contains("TZ"));
    }

    #[test]
    fn test_ewts_to_acip_reversed_vowel() {
        assert!(ewts_to_acip("l-I").contains("'i"));
    }

    #[test]
    fn test_ewts_to_acip_diphthongs() {
        assert!(ewts_to_acip("ai").contains("EE"));
        assert!(ewts_to_acip("au").contains("OO"));
    }

    #[test]
    fn test_acip_to_unicode() {
        assert_eq!(acip_to_unicode("BSGRUBS"), "བསྒྲུབས");
        assert_eq!(acip_to_unicode("BLA MA"), "བླ་མ");
        assert_eq!(acip_to_unicode("SANGS RGYAS"), "སངས་རྒྱས");
        assert_eq!(acip_to_unicode("BYANG CHUB"), "བྱང་ཆུབ");
        assert_eq!(acip_to_unicode("KI"), "ཀི");
    }

    #[test]
    fn test_unicode_to_acip() {
        assert_eq!(unicode_to_acip("བསྒྲུབས"), "BSGRUBS");
        assert_eq!(unicode_to_acip("བླ་མ"), "BLA MA");
    }

    #[test]
    fn test_comments_stripped() {
        assert_eq!(acip_to_ewts("[header]KA"), "ka");
    }

    #[test]
    fn test_swapcase() {
        assert_eq!(swapcase("aB'2"), "Ab'2");
    }
}

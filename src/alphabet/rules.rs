//! Structural rule tables for Tibetan syllable composition.
//!
//! The allowed-root sets are kept faithful to the THL EWTS combination lists;
//! the validator reads them verbatim when judging prescript/superscript/
//! subscript attachments.

/// Letters that may appear as a prescript.
pub static PRESCRIPTS: &[&str] = &["g", "d", "b", "m", "'"];

/// Letters that may appear as a superscript.
pub static SUPERSCRIPTS: &[&str] = &["r", "l", "s"];

/// Letters the forward parser accepts as a postscript in either slot.
/// Longest first so `ng` wins over `n`.
pub static POSTSCRIPTS: &[&str] = &["ng", "g", "d", "n", "b", "m", "r", "l", "s", "'"];

/// Prescript → roots it may precede.
pub static PRESCRIPT_COMBINATIONS: &[(&str, &[&str])] = &[
    ("g", &["n", "ny", "s", "sh", "ts", "y", "z"]),
    (
        "d",
        &["k", "g", "ng", "p", "b", "m", "w", "n", "ny", "r", "l", "s", "ts"],
    ),
    (
        "b",
        &[
            "k", "g", "c", "j", "ng", "s", "sh", "r", "l", "d", "ts", "w", "z", "zh", "kss",
        ],
    ),
    (
        "m",
        &["kh", "g", "ng", "ch", "j", "ny", "th", "d", "n", "dz", "ts", "tsh"],
    ),
    ("'", &["a"]),
];

/// Superscript → roots it may stack above.
pub static SUPERSCRIPT_COMBINATIONS: &[(&str, &[&str])] = &[
    (
        "r",
        &["k", "g", "ng", "j", "ny", "t", "d", "n", "b", "m", "ts", "dz"],
    ),
    ("l", &["k", "g", "ng", "c", "j", "t", "d", "p", "b", "h"]),
    (
        "s",
        &["k", "g", "ng", "ny", "t", "d", "n", "p", "b", "m", "ts"],
    ),
];

/// Subscript → roots it may stack below. Compound keys cover the attested
/// double subscripts.
pub static SUBSCRIPT_COMBINATIONS: &[(&str, &[&str])] = &[
    (
        "r",
        &[
            "k", "kh", "g", "t", "th", "d", "p", "ph", "b", "s", "h", "tt", "tth", "dd", "ddh",
        ],
    ),
    ("l", &["k", "g", "s", "z", "r"]),
    ("y", &["k", "kh", "g", "p", "ph", "b", "m", "s", "h"]),
    (
        "w",
        &[
            "k", "kh", "g", "t", "th", "d", "ts", "tsh", "zh", "z", "s", "r", "l", "sh", "h",
        ],
    ),
    (
        "m",
        &[
            "k", "kh", "g", "ng", "c", "ch", "j", "ny", "t", "th", "d", "n", "p", "ph", "b", "m",
            "ts", "tsh", "dz", "w", "zh", "z", "s", "h", "r", "l", "sh",
        ],
    ),
    ("r+w", &["g", "d"]),
    ("r+l", &["k"]),
];

/// Valid suffix consonants, longest first.
pub static VALID_POSTSCRIPTS: &[&str] = &["ng", "g", "d", "n", "b", "m", "r", "l", "s"];

/// Valid post-suffix consonants.
pub static VALID_SECOND_POSTSCRIPTS: &[&str] = &["s", "d"];

/// Look up the allowed-root set for a combination table.
pub fn allowed_roots<'a>(table: &'a [(&str, &[&str])], key: &str) -> Option<&'a [&'a str]> {
    table.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

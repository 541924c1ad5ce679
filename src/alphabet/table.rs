//! Raw EWTS ↔ Tibetan Unicode pair tables.
//!
//! Entry order is load-bearing for the reverse index: when two spellings of
//! equal length produce the same codepoint, the earlier entry wins.

/// Base-form consonants, THL Extended Wylie (EWTS).
pub static CONSONANTS: &[(&str, &str)] = &[
    ("k", "\u{0F40}"),
    ("kh", "\u{0F41}"),
    ("g", "\u{0F42}"),
    ("gh", "\u{0F43}"),
    ("ng", "\u{0F44}"),
    ("c", "\u{0F45}"),
    ("ch", "\u{0F46}"),
    ("j", "\u{0F47}"),
    ("ny", "\u{0F49}"),
    ("t", "\u{0F4F}"),
    ("th", "\u{0F50}"),
    ("d", "\u{0F51}"),
    ("dh", "\u{0F52}"),
    ("n", "\u{0F53}"),
    ("p", "\u{0F54}"),
    ("ph", "\u{0F55}"),
    ("b", "\u{0F56}"),
    ("bh", "\u{0F57}"),
    ("m", "\u{0F58}"),
    ("ts", "\u{0F59}"),
    ("tsh", "\u{0F5A}"),
    ("dz", "\u{0F5B}"),
    ("dzh", "\u{0F5C}"),
    ("w", "\u{0F5D}"),
    ("zh", "\u{0F5E}"),
    ("z", "\u{0F5F}"),
    ("'", "\u{0F60}"),
    ("y", "\u{0F61}"),
    ("r", "\u{0F62}"),
    ("l", "\u{0F63}"),
    ("sh", "\u{0F64}"),
    ("ss", "\u{0F65}"),
    ("s", "\u{0F66}"),
    ("h", "\u{0F67}"),
    ("a", "\u{0F68}"),
    // Sanskrit retroflex series
    ("tt", "\u{0F4A}"),
    ("tth", "\u{0F4B}"),
    ("dd", "\u{0F4C}"),
    ("ddh", "\u{0F4D}"),
    ("nn", "\u{0F4E}"),
    ("kss", "\u{0F69}"),
    // Capital notation for the retroflex series, matched case-sensitively
    ("Ta", "\u{0F4A}"),
    ("Tha", "\u{0F4B}"),
    ("Da", "\u{0F4C}"),
    ("Dha", "\u{0F4D}"),
    ("Na", "\u{0F4E}"),
    ("Sha", "\u{0F65}"),
];

/// Vowel signs. The inherent vowel `a` renders as no mark at all.
pub static VOWELS: &[(&str, &str)] = &[
    ("a", ""),
    ("i", "\u{0F72}"),
    ("u", "\u{0F74}"),
    ("e", "\u{0F7A}"),
    ("o", "\u{0F7C}"),
    ("A", "\u{0F71}"),
    ("U", "\u{0F71}\u{0F74}"),
    ("-i", "\u{0F80}"),
    ("-I", "\u{0F81}"),
];

/// Dedicated subscript consonants (letters that may stack under a root).
pub static SUBSCRIPTS: &[(&str, &str)] = &[
    ("r", "\u{0FB2}"),
    ("l", "\u{0FB3}"),
    ("y", "\u{0FB1}"),
    ("w", "\u{0FAD}"),
    ("v", "\u{0FAD}"),
    ("m", "\u{0FA8}"),
];

/// Subjoined forms of the full consonant repertoire (U+0F90–U+0FB9 block).
/// Used for the root under a superscript and for explicit `+` stacks.
pub static SUBJOINED: &[(&str, &str)] = &[
    ("k", "\u{0F90}"),
    ("kh", "\u{0F91}"),
    ("g", "\u{0F92}"),
    ("gh", "\u{0F93}"),
    ("ng", "\u{0F94}"),
    ("c", "\u{0F95}"),
    ("ch", "\u{0F96}"),
    ("j", "\u{0F97}"),
    ("ny", "\u{0F99}"),
    ("t", "\u{0F9F}"),
    ("th", "\u{0FA0}"),
    ("d", "\u{0FA1}"),
    ("dh", "\u{0FA2}"),
    ("n", "\u{0FA3}"),
    ("p", "\u{0FA4}"),
    ("ph", "\u{0FA5}"),
    ("b", "\u{0FA6}"),
    ("bh", "\u{0FA7}"),
    ("m", "\u{0FA8}"),
    ("ts", "\u{0FA9}"),
    ("tsh", "\u{0FAA}"),
    ("dz", "\u{0FAB}"),
    ("dzh", "\u{0FAC}"),
    ("w", "\u{0FAD}"),
    ("zh", "\u{0FAE}"),
    ("z", "\u{0FAF}"),
    ("y", "\u{0FB1}"),
    ("r", "\u{0FB2}"),
    ("l", "\u{0FB3}"),
    ("sh", "\u{0FB4}"),
    ("ss", "\u{0FB5}"),
    ("s", "\u{0FB6}"),
    ("h", "\u{0FB7}"),
    ("tt", "\u{0F9A}"),
    ("tth", "\u{0F9B}"),
    ("dd", "\u{0F9C}"),
    ("ddh", "\u{0F9D}"),
    ("nn", "\u{0F9E}"),
    ("kss", "\u{0FB9}"),
    ("Ta", "\u{0F9A}"),
    ("Tha", "\u{0F9B}"),
    ("Da", "\u{0F9C}"),
    ("Dha", "\u{0F9D}"),
    ("Na", "\u{0F9E}"),
    ("Sha", "\u{0FB5}"),
];

/// Punctuation. The space entry is only used when spaces are not being
/// rendered as tsheg by the forward scan itself.
pub static PUNCTUATION: &[(&str, &str)] = &[
    (" ", "\u{0F0B}"),
    ("*", "\u{0F0C}"),
    ("/", "\u{0F0D}"),
    ("//", "\u{0F0E}"),
    (";", "\u{0F0F}"),
    ("|", "\u{0F0D}"),
    ("||", "\u{0F0E}"),
    ("!", "\u{0F08}"),
    (":", "\u{0F0E}"),
    ("_", "\u{0F35}"),
];

/// Tibetan digits.
pub static NUMERALS: &[(&str, &str)] = &[
    ("0", "\u{0F20}"),
    ("1", "\u{0F21}"),
    ("2", "\u{0F22}"),
    ("3", "\u{0F23}"),
    ("4", "\u{0F24}"),
    ("5", "\u{0F25}"),
    ("6", "\u{0F26}"),
    ("7", "\u{0F27}"),
    ("8", "\u{0F28}"),
    ("9", "\u{0F29}"),
];

/// Standalone Sanskrit marks (anusvara, visarga).
pub static SANSKRIT_MARKS: &[(&str, &str)] = &[
    ("M", "\u{0F7E}"),
    ("H", "\u{0F7F}"),
    ("~M", "\u{0F7E}"),
    ("~H", "\u{0F7F}"),
];

/// Anusvara variant used after a rendered `u` vowel sign (mantra spelling).
pub const ANUSVARA_AFTER_U: &str = "\u{0F83}";

/// Capital retroflex spellings, preserved verbatim by the case normalizer.
pub static SANSKRIT_RETROFLEX: &[(&str, &str)] = &[
    ("Ta", "\u{0F4A}"),
    ("Tha", "\u{0F4B}"),
    ("Da", "\u{0F4C}"),
    ("Dha", "\u{0F4D}"),
    ("Na", "\u{0F4E}"),
    ("Sha", "\u{0F65}"),
];

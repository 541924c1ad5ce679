//! Reverse mapping index: Tibetan Unicode → EWTS.
//!
//! Derived once from the forward tables. When several EWTS spellings produce
//! the same codepoint the shortest spelling is kept (`w` over `v`); subjoined
//! consonants are derived from the base block by the +0x50 offset with the
//! trailing inherent `a` stripped from multi-letter spellings.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::table;

/// Combined and per-category Unicode → Wylie lookups.
pub struct ReverseIndex {
    consonants: HashMap<String, String>,
    vowels: HashMap<String, String>,
    subscripts: HashMap<String, String>,
    punctuation: HashMap<String, String>,
    all: HashMap<String, String>,
}

/// Insert keeping the shortest wylie spelling; first entry wins ties.
fn insert_shortest(map: &mut HashMap<String, String>, unicode: &str, wylie: &str) {
    if unicode.is_empty() {
        return;
    }
    match map.get(unicode) {
        Some(existing) if existing.len() <= wylie.len() => {}
        _ => {
            map.insert(unicode.to_string(), wylie.to_string());
        }
    }
}

fn reversed(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for &(wylie, unicode) in pairs {
        insert_shortest(&mut map, unicode, wylie);
    }
    map
}

/// Strip the trailing inherent `a` from a multi-letter spelling (`Ta` → `T`).
fn strip_inherent_a(wylie: &str) -> &str {
    if wylie.len() > 1 && wylie.ends_with('a') {
        &wylie[..wylie.len() - 1]
    } else {
        wylie
    }
}

impl ReverseIndex {
    pub fn global() -> &'static ReverseIndex {
        static INSTANCE: OnceLock<ReverseIndex> = OnceLock::new();
        INSTANCE.get_or_init(ReverseIndex::build)
    }

    fn build() -> ReverseIndex {
        let consonants = reversed(table::CONSONANTS);
        let vowels = reversed(table::VOWELS);
        let subscripts = reversed(table::SUBSCRIPTS);
        let punctuation = reversed(table::PUNCTUATION);
        let marks = reversed(table::SANSKRIT_MARKS);
        let numerals = reversed(table::NUMERALS);
        let retroflex = reversed(table::SANSKRIT_RETROFLEX);

        // Subjoined forms derived from the base consonant block.
        let mut subjoined = HashMap::new();
        for &(wylie, unicode) in table::CONSONANTS {
            let Some(base) = unicode.chars().next() else {
                continue;
            };
            let code = base as u32;
            if (0x0F40..=0x0F6C).contains(&code) {
                let Some(stacked) = char::from_u32(code + 0x50) else {
                    continue;
                };
                insert_shortest(
                    &mut subjoined,
                    &stacked.to_string(),
                    strip_inherent_a(wylie),
                );
            }
        }

        // Combined map, overlaid in fixed category order: later categories
        // overwrite, so the retroflex capitals win for their codepoints.
        let mut all = HashMap::new();
        for layer in [
            &consonants,
            &vowels,
            &subscripts,
            &punctuation,
            &marks,
            &numerals,
            &retroflex,
            &subjoined,
        ] {
            for (unicode, wylie) in layer {
                all.insert(unicode.clone(), wylie.clone());
            }
        }

        // Composite sequences with no single-codepoint forward counterpart.
        let mut vowels = vowels;
        let long_u = "\u{0F71}\u{0F74}".to_string();
        vowels.insert(long_u.clone(), "U".to_string());
        all.insert(long_u, "U".to_string());
        all.insert(table::ANUSVARA_AFTER_U.to_string(), "M".to_string());
        let mut consonants = consonants;
        let kssa = "\u{0F40}\u{0FB5}".to_string();
        consonants.insert(kssa.clone(), "kss".to_string());
        all.insert(kssa, "kss".to_string());

        ReverseIndex {
            consonants,
            vowels,
            subscripts,
            punctuation,
            all,
        }
    }

    /// Wylie spelling for a Unicode character or sequence, if mapped.
    pub fn wylie(&self, unicode: &str) -> Option<&str> {
        self.all.get(unicode).map(String::as_str)
    }

    pub fn wylie_char(&self, c: char) -> Option<&str> {
        self.wylie(c.encode_utf8(&mut [0; 4]))
    }

    /// Base-consonant test (the subjoined block does not count).
    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains_key(c.encode_utf8(&mut [0; 4]))
    }

    pub fn is_vowel_sign(&self, c: char) -> bool {
        self.vowels.contains_key(c.encode_utf8(&mut [0; 4]))
    }

    /// Multi-codepoint vowel spelling (the long-a + u sequence).
    pub fn vowel_compound(&self, unicode: &str) -> Option<&str> {
        self.vowels.get(unicode).map(String::as_str)
    }

    pub fn is_subscript(&self, c: char) -> bool {
        self.subscripts.contains_key(c.encode_utf8(&mut [0; 4]))
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains_key(c.encode_utf8(&mut [0; 4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_spelling_wins() {
        let index = ReverseIndex::global();
        // Both `w` and `v` render the subjoined wa; the shorter... both are
        // one letter, so table order keeps `w`.
        assert_eq!(index.wylie("\u{0FAD}"), Some("w"));
        // `M` beats `~M` for the anusvara.
        assert_eq!(index.wylie("\u{0F7E}"), Some("M"));
        assert_eq!(index.wylie("\u{0F7F}"), Some("H"));
    }

    #[test]
    fn test_retroflex_capitals_win_in_combined_map() {
        let index = ReverseIndex::global();
        assert_eq!(index.wylie("\u{0F4E}"), Some("Na"));
        assert_eq!(index.wylie("\u{0F4A}"), Some("Ta"));
    }

    #[test]
    fn test_subjoined_derivation() {
        let index = ReverseIndex::global();
        assert_eq!(index.wylie("\u{0F92}"), Some("g"));
        assert_eq!(index.wylie("\u{0FB2}"), Some("r"));
        assert_eq!(index.wylie("\u{0FB6}"), Some("s"));
    }

    #[test]
    fn test_composite_entries() {
        let index = ReverseIndex::global();
        assert_eq!(index.wylie("\u{0F71}\u{0F74}"), Some("U"));
        assert_eq!(index.wylie("\u{0F83}"), Some("M"));
        assert_eq!(index.wylie("\u{0F40}\u{0FB5}"), Some("kss"));
    }

    #[test]
    fn test_category_predicates() {
        let index = ReverseIndex::global();
        assert!(index.is_consonant('\u{0F40}'));
        assert!(!index.is_consonant('\u{0F90}'));
        assert!(index.is_vowel_sign('\u{0F72}'));
        assert!(index.is_subscript('\u{0FB3}'));
        assert!(index.is_punctuation('\u{0F0D}'));
        assert_eq!(index.wylie("x"), None);
    }
}

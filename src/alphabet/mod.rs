mod reverse;
pub mod rules;
pub mod table;

pub use reverse::ReverseIndex;

use std::collections::HashMap;
use std::sync::OnceLock;

/// Indexed view over the static EWTS → Unicode tables.
///
/// Built once behind a `OnceLock`; every component borrows it for the life of
/// the process. Key lists are pre-sorted longest-first so greedy matchers can
/// iterate them directly.
pub struct Alphabet {
    consonants: HashMap<&'static str, &'static str>,
    subjoined: HashMap<&'static str, &'static str>,
    subscripts: HashMap<&'static str, &'static str>,
    vowels: HashMap<&'static str, &'static str>,
    punctuation: HashMap<&'static str, &'static str>,
    numerals: HashMap<&'static str, &'static str>,
    marks: HashMap<&'static str, &'static str>,
    consonant_keys: Vec<&'static str>,
    subjoined_keys: Vec<&'static str>,
    subscript_keys: Vec<&'static str>,
    vowel_keys: Vec<&'static str>,
    mark_keys: Vec<&'static str>,
    punctuation_keys: Vec<&'static str>,
}

fn index(pairs: &'static [(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

fn keys_longest_first(pairs: &'static [(&'static str, &'static str)]) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = pairs.iter().map(|&(k, _)| k).collect();
    // Stable: table order is preserved within a length class.
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    keys
}

impl Alphabet {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static Alphabet {
        static INSTANCE: OnceLock<Alphabet> = OnceLock::new();
        INSTANCE.get_or_init(|| Alphabet {
            consonants: index(table::CONSONANTS),
            subjoined: index(table::SUBJOINED),
            subscripts: index(table::SUBSCRIPTS),
            vowels: index(table::VOWELS),
            punctuation: index(table::PUNCTUATION),
            numerals: index(table::NUMERALS),
            marks: index(table::SANSKRIT_MARKS),
            consonant_keys: keys_longest_first(table::CONSONANTS),
            subjoined_keys: keys_longest_first(table::SUBJOINED),
            subscript_keys: keys_longest_first(table::SUBSCRIPTS),
            vowel_keys: keys_longest_first(table::VOWELS),
            mark_keys: keys_longest_first(table::SANSKRIT_MARKS),
            punctuation_keys: keys_longest_first(table::PUNCTUATION),
        })
    }

    pub fn consonant(&self, token: &str) -> Option<&'static str> {
        self.consonants.get(token).copied()
    }

    pub fn subjoined(&self, token: &str) -> Option<&'static str> {
        self.subjoined.get(token).copied()
    }

    pub fn subscript(&self, token: &str) -> Option<&'static str> {
        self.subscripts.get(token).copied()
    }

    pub fn vowel(&self, token: &str) -> Option<&'static str> {
        self.vowels.get(token).copied()
    }

    pub fn punctuation(&self, token: &str) -> Option<&'static str> {
        self.punctuation.get(token).copied()
    }

    pub fn numeral(&self, token: &str) -> Option<&'static str> {
        self.numerals.get(token).copied()
    }

    pub fn sanskrit_mark(&self, token: &str) -> Option<&'static str> {
        self.marks.get(token).copied()
    }

    pub fn is_consonant_token(&self, token: &str) -> bool {
        self.consonants.contains_key(token)
    }

    /// Consonant spellings, longest first.
    pub fn consonant_keys(&self) -> &[&'static str] {
        &self.consonant_keys
    }

    /// Subjoined spellings, longest first.
    pub fn subjoined_keys(&self) -> &[&'static str] {
        &self.subjoined_keys
    }

    /// Dedicated subscript spellings, longest first.
    pub fn subscript_keys(&self) -> &[&'static str] {
        &self.subscript_keys
    }

    /// Vowel spellings, longest first.
    pub fn vowel_keys(&self) -> &[&'static str] {
        &self.vowel_keys
    }

    /// Sanskrit mark spellings, longest first.
    pub fn mark_keys(&self) -> &[&'static str] {
        &self.mark_keys
    }

    /// Punctuation spellings, longest first.
    pub fn punctuation_keys(&self) -> &[&'static str] {
        &self.punctuation_keys
    }
}

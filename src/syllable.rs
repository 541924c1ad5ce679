//! Syllable data model: the seven structural slots of a Tibetan syllable.

/// One or two stacked letters below the root.
///
/// The double form covers both implicit letter sequences (`grwa`) and
/// explicit `+`-joined Sanskrit stacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Subscript {
    Single(String),
    Double(String, String),
}

impl Subscript {
    /// The letters, in stacking order.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            Subscript::Single(a) => (a.as_str(), None),
            Subscript::Double(a, b) => (a.as_str(), Some(b.as_str())),
        };
        std::iter::once(first).chain(second)
    }

    /// Canonical spelling, `+`-joined for the double form (`r+w`).
    pub fn wylie(&self) -> String {
        match self {
            Subscript::Single(a) => a.clone(),
            Subscript::Double(a, b) => format!("{a}+{b}"),
        }
    }
}

/// Structural slots of one syllable:
/// `[prescript] [superscript] ROOT [subscript] [vowel] [postscript1] [postscript2]`.
///
/// `root` is always present (the placeholder pure-vowel letter for
/// vowel-initial syllables); `vowel` defaults to the inherent `a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyllableComponents {
    pub root: String,
    pub prescript: Option<String>,
    pub superscript: Option<String>,
    pub subscript: Option<Subscript>,
    pub vowel: String,
    pub postscript1: Option<String>,
    pub postscript2: Option<String>,
}

impl SyllableComponents {
    pub fn new(root: impl Into<String>) -> Self {
        SyllableComponents {
            root: root.into(),
            prescript: None,
            superscript: None,
            subscript: None,
            vowel: "a".to_string(),
            postscript1: None,
            postscript2: None,
        }
    }

    /// True when the vowel slot holds the unwritten inherent `a`.
    pub fn has_inherent_vowel(&self) -> bool {
        self.vowel == "a"
    }
}

/// A parsed-and-rendered syllable: the slots, the Unicode rendering, and the
/// source slice that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syllable {
    pub components: SyllableComponents,
    pub unicode_text: String,
    pub wylie_text: String,
}

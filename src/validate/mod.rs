//! EWTS validator: structural checks with errors as data.
//!
//! Validation never throws and never short-circuits the caller; every
//! problem becomes a [`ValidationError`] in the report. The transliteration
//! path stays lossy-safe, so this module is the only place structural
//! violations surface.

mod parse;

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug_span;

use crate::alphabet::{rules, table, Alphabet};
use crate::syllable::SyllableComponents;

/// Validation error taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownCharacter,
    InvalidPrescript,
    InvalidSuperscript,
    InvalidSubscript,
    InvalidPostscript,
    InvalidSyllableStructure,
    AmbiguousParsing,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownCharacter => "unknown_character",
            ErrorKind::InvalidPrescript => "invalid_prescript",
            ErrorKind::InvalidSuperscript => "invalid_superscript",
            ErrorKind::InvalidSubscript => "invalid_subscript",
            ErrorKind::InvalidPostscript => "invalid_postscript",
            ErrorKind::InvalidSyllableStructure => "invalid_syllable_structure",
            ErrorKind::AmbiguousParsing => "ambiguous_parsing",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural violation, with the offending token and a suggestion when
/// a fix can be named.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub position: usize,
    pub syllable: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] at position {}: {}",
            self.kind, self.position, self.message
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {suggestion})")?;
        }
        Ok(())
    }
}

/// Outcome of validating a text. `is_valid` holds exactly when `errors` is
/// empty; warnings never fail a text on their own.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Human-readable report.
    pub fn summary(&self) -> String {
        if self.is_valid && self.warnings.is_empty() {
            return "valid Extended Wylie".to_string();
        }
        let mut lines = Vec::new();
        if !self.is_valid {
            lines.push(format!("found {} error(s):", self.errors.len()));
            for error in &self.errors {
                lines.push(format!("  - {error}"));
            }
        } else {
            lines.push("valid Extended Wylie".to_string());
        }
        if !self.warnings.is_empty() {
            lines.push(format!("{} warning(s):", self.warnings.len()));
            for warning in &self.warnings {
                lines.push(format!("  - {warning}"));
            }
        }
        lines.join("\n")
    }
}

/// Validate EWTS text against the Tibetan stacking rules.
pub fn validate(text: &str) -> ValidationResult {
    let _span = debug_span!("validate", chars = text.chars().count()).entered();
    if text.is_empty() {
        return ValidationResult::valid();
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut position = 0;

    for token in tokenize(text) {
        let token_chars: Vec<char> = token.chars().collect();
        if !is_punctuation_only(&token_chars) {
            validate_token(&token, &token_chars, position, &mut errors, &mut warnings);
        }
        position += token_chars.len();
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Split into syllable tokens; whitespace, slash, and pipe become their own
/// single-character tokens so positions stay exact.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if matches!(c, ' ' | '\t' | '\n' | '/' | '|') {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            tokens.push(c.to_string());
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn is_punctuation_only(chars: &[char]) -> bool {
    chars
        .iter()
        .all(|c| matches!(c, ' ' | '\t' | '\n' | '/' | '|' | '.'))
}

fn validate_token(
    token: &str,
    chars: &[char],
    position: usize,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationError>,
) {
    let unknown = find_unknown_characters(chars);
    if !unknown.is_empty() {
        let listed: Vec<String> = unknown.iter().map(|c| c.to_string()).collect();
        errors.push(ValidationError {
            kind: ErrorKind::UnknownCharacter,
            position,
            syllable: token.to_string(),
            message: format!("unknown characters: {}", listed.join(", ")),
            suggestion: Some("check the EWTS character list".to_string()),
        });
        return;
    }

    // Numerals, standalone vowels, and bare Sanskrit marks need no
    // structural parse.
    if is_numeral(chars) || is_standalone_vowel(token) || is_sanskrit_mark_only(token) {
        return;
    }

    match best_parse(chars, token) {
        Some(components) => {
            let (component_errors, component_warnings) =
                check_components(&components, token, position);
            errors.extend(component_errors);
            warnings.extend(component_warnings);
        }
        None => errors.push(ValidationError {
            kind: ErrorKind::InvalidSyllableStructure,
            position,
            syllable: token.to_string(),
            message: "cannot parse syllable structure".to_string(),
            suggestion: Some("check syllable component order".to_string()),
        }),
    }
}

/// Every character (or multi-character spelling) the validator accepts.
fn valid_tokens() -> &'static HashSet<String> {
    static TOKENS: OnceLock<HashSet<String>> = OnceLock::new();
    TOKENS.get_or_init(|| {
        let mut set = HashSet::new();
        for pairs in [
            table::CONSONANTS,
            table::VOWELS,
            table::SUBSCRIPTS,
            table::PUNCTUATION,
            table::SANSKRIT_MARKS,
            table::NUMERALS,
            table::SANSKRIT_RETROFLEX,
        ] {
            for &(wylie, _) in pairs {
                set.insert(wylie.to_string());
            }
        }
        for structural in [" ", "\n", "\t", "/", "|", "+", "'", ".", "-", "~"] {
            set.insert(structural.to_string());
        }
        for c in ('0'..='9').chain('A'..='Z') {
            set.insert(c.to_string());
        }
        set
    })
}

fn find_unknown_characters(chars: &[char]) -> Vec<char> {
    let tokens = valid_tokens();
    let mut unknown = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let mut matched = false;
        for len in [3usize, 2, 1] {
            if i + len <= chars.len() {
                let candidate: String = chars[i..i + len].iter().collect();
                if tokens.contains(&candidate) {
                    i += len;
                    matched = true;
                    break;
                }
            }
        }
        if !matched {
            unknown.push(chars[i]);
            i += 1;
        }
    }
    unknown
}

fn is_numeral(chars: &[char]) -> bool {
    !chars.is_empty() && chars.iter().all(|c| c.is_ascii_digit())
}

/// A vowel spelling, optionally followed by a Sanskrit mark (`oM`).
fn is_standalone_vowel(token: &str) -> bool {
    let alphabet = Alphabet::global();
    if alphabet.vowel(token).is_some() {
        return true;
    }
    for &key in alphabet.vowel_keys() {
        if let Some(rest) = token.strip_prefix(key) {
            if rest.is_empty() || alphabet.sanskrit_mark(rest).is_some() {
                return true;
            }
        }
    }
    false
}

fn is_sanskrit_mark_only(token: &str) -> bool {
    Alphabet::global().sanskrit_mark(token).is_some()
}

struct Candidate {
    components: SyllableComponents,
    consumed: usize,
    error_count: usize,
    complete: bool,
}

/// Run all strategies and pick the best candidate: complete-and-valid
/// (longest), then complete-but-invalid (fewest errors, then longest), then
/// any valid partial, then any invalid partial. "Complete" allows one
/// character of slack for the unwritten inherent vowel.
fn best_parse(chars: &[char], token: &str) -> Option<SyllableComponents> {
    let mut candidates = Vec::new();
    for strategy in parse::STRATEGIES {
        if let Some((components, consumed)) = strategy(chars) {
            if consumed == 0 {
                continue;
            }
            let (errors, _) = check_components(&components, token, 0);
            candidates.push(Candidate {
                complete: consumed + 1 >= chars.len(),
                error_count: errors.len(),
                components,
                consumed,
            });
        }
    }

    let pick_longest = |filter: &dyn Fn(&Candidate) -> bool| -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            if !filter(candidate) {
                continue;
            }
            if best.map_or(true, |b| candidate.consumed > candidates[b].consumed) {
                best = Some(i);
            }
        }
        best
    };
    let pick_fewest_errors = |filter: &dyn Fn(&Candidate) -> bool| -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            if !filter(candidate) {
                continue;
            }
            let key = (candidate.error_count, usize::MAX - candidate.consumed);
            let better = match best {
                None => true,
                Some(b) => key < (candidates[b].error_count, usize::MAX - candidates[b].consumed),
            };
            if better {
                best = Some(i);
            }
        }
        best
    };

    let chosen = pick_longest(&|c| c.complete && c.error_count == 0)
        .or_else(|| pick_fewest_errors(&|c| c.complete && c.error_count > 0))
        .or_else(|| pick_longest(&|c| c.error_count == 0))
        .or_else(|| pick_fewest_errors(&|c| c.error_count > 0))?;
    Some(candidates.swap_remove(chosen).components)
}

fn sorted_list(items: &[&str]) -> String {
    let mut sorted: Vec<&str> = items.to_vec();
    sorted.sort_unstable();
    sorted.join(", ")
}

/// Check a slot set against the structural rule tables.
fn check_components(
    components: &SyllableComponents,
    syllable: &str,
    position: usize,
) -> (Vec<ValidationError>, Vec<ValidationError>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let root = components.root.as_str();

    if let Some(prescript) = components.prescript.as_deref() {
        let allowed =
            rules::allowed_roots(rules::PRESCRIPT_COMBINATIONS, prescript).unwrap_or(&[]);
        if !allowed.contains(&root) {
            errors.push(ValidationError {
                kind: ErrorKind::InvalidPrescript,
                position,
                syllable: syllable.to_string(),
                message: format!("invalid prescript '{prescript}' before root '{root}'"),
                suggestion: Some(format!(
                    "valid roots after '{prescript}': {}",
                    sorted_list(allowed)
                )),
            });
        }
    }

    if let Some(superscript) = components.superscript.as_deref() {
        let allowed =
            rules::allowed_roots(rules::SUPERSCRIPT_COMBINATIONS, superscript).unwrap_or(&[]);
        if !allowed.contains(&root) {
            errors.push(ValidationError {
                kind: ErrorKind::InvalidSuperscript,
                position,
                syllable: syllable.to_string(),
                message: format!("invalid superscript '{superscript}' above root '{root}'"),
                suggestion: Some(format!(
                    "valid roots under '{superscript}': {}",
                    sorted_list(allowed)
                )),
            });
        }
    }

    if let Some(subscript) = &components.subscript {
        let key = subscript.wylie();
        match rules::allowed_roots(rules::SUBSCRIPT_COMBINATIONS, &key) {
            Some(allowed) if !allowed.contains(&root) => {
                errors.push(ValidationError {
                    kind: ErrorKind::InvalidSubscript,
                    position,
                    syllable: syllable.to_string(),
                    message: format!("invalid subscript '{key}' below root '{root}'"),
                    suggestion: Some(format!(
                        "valid roots above '{key}': {}",
                        sorted_list(allowed)
                    )),
                });
            }
            Some(_) => {}
            // Unlisted combinations stay warnings so rare mantra stacks pass.
            None => warnings.push(ValidationError {
                kind: ErrorKind::AmbiguousParsing,
                position,
                syllable: syllable.to_string(),
                message: format!("unusual subscript combination '{key}' with root '{root}'"),
                suggestion: Some("verify this is correct EWTS".to_string()),
            }),
        }
    }

    if let Some(postscript) = components.postscript1.as_deref() {
        if !rules::VALID_POSTSCRIPTS.contains(&postscript) {
            errors.push(ValidationError {
                kind: ErrorKind::InvalidPostscript,
                position,
                syllable: syllable.to_string(),
                message: format!("invalid postscript '{postscript}'"),
                suggestion: Some(format!(
                    "valid postscripts: {}",
                    sorted_list(rules::VALID_POSTSCRIPTS)
                )),
            });
        }
    }
    if let Some(postscript) = components.postscript2.as_deref() {
        if !rules::VALID_SECOND_POSTSCRIPTS.contains(&postscript) {
            errors.push(ValidationError {
                kind: ErrorKind::InvalidPostscript,
                position,
                syllable: syllable.to_string(),
                message: format!("invalid second postscript '{postscript}'"),
                suggestion: Some(format!(
                    "valid second postscripts: {}",
                    sorted_list(rules::VALID_SECOND_POSTSCRIPTS)
                )),
            });
        }
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_basic_syllables() {
        for input in [
            "ka",
            "kha",
            "bla",
            "rka",
            "grwa",
            "bsgrubs",
            "sangs rgyas",
            "bla ma",
            "byang chub",
        ] {
            let result = validate(input);
            assert!(result.is_valid, "'{input}' should be valid: {:?}", result.errors);
        }
    }

    #[test]
    fn test_valid_vowels() {
        for input in ["ki", "ku", "ke", "ko", "kA", "k-i"] {
            assert!(validate(input).is_valid, "'{input}' should be valid");
        }
    }

    #[test]
    fn test_valid_sanskrit() {
        for input in ["oM", "hUM", "Ni", "Ta", "kss"] {
            assert!(validate(input).is_valid, "'{input}' should be valid");
        }
    }

    #[test]
    fn test_valid_punctuation_and_numerals() {
        for input in ["ka nga/", "ka nga||", "1959", "ka. ba", "/ | /"] {
            assert!(validate(input).is_valid, "'{input}' should be valid");
        }
    }

    #[test]
    fn test_full_mantra_is_valid() {
        let result = validate("oM ma Ni pa dme hUM|");
        assert!(result.is_valid, "{}", result.summary());
    }

    #[test]
    fn test_unknown_characters() {
        for (input, bad) in [("xyz", 'x'), ("ka@ba", '@'), ("ka#ba", '#'), ("qa", 'q')] {
            let result = validate(input);
            assert!(!result.is_valid, "'{input}' should be invalid");
            let error = &result.errors[0];
            assert_eq!(error.kind, ErrorKind::UnknownCharacter);
            assert!(error.message.contains(bad), "{}", error.message);
        }
    }

    #[test]
    fn test_invalid_prescript() {
        for input in ["gka", "mpa"] {
            let result = validate(input);
            assert!(!result.is_valid, "'{input}' should be invalid");
            assert!(
                result
                    .errors
                    .iter()
                    .any(|e| e.kind == ErrorKind::InvalidPrescript),
                "expected a prescript error for '{input}': {:?}",
                result.errors
            );
        }
    }

    #[test]
    fn test_prescript_error_carries_suggestion() {
        let result = validate("gka");
        let error = result
            .errors
            .iter()
            .find(|e| e.kind == ErrorKind::InvalidPrescript)
            .unwrap();
        assert_eq!(error.syllable, "gka");
        let suggestion = error.suggestion.as_deref().unwrap();
        assert!(suggestion.contains("ny"), "{suggestion}");
    }

    #[test]
    fn test_error_positions_count_tokens() {
        let result = validate("ka gka");
        let error = &result.errors[0];
        assert_eq!(error.position, 3);
        assert_eq!(error.syllable, "gka");
    }

    #[test]
    fn test_empty_and_whitespace_valid() {
        assert!(validate("").is_valid);
        assert!(validate("   \n\t  ").is_valid);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        // `v` maps like `w` but has no combination entry of its own, so it
        // downgrades to a warning.
        let result = validate("kva");
        assert!(result.is_valid, "{}", result.summary());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.kind == ErrorKind::AmbiguousParsing),
            "{:?}",
            result.warnings
        );
    }

    #[test]
    fn test_summary_mentions_errors() {
        let summary = validate("xyz").summary();
        assert!(summary.contains("error"), "{summary}");
        assert_eq!(validate("bla ma").summary(), "valid Extended Wylie");
    }

    #[test]
    fn test_serializes_to_json() {
        let result = validate("gka");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("invalid_prescript"), "{json}");
    }

    #[test]
    fn test_validator_accepts_what_forward_renders() {
        for input in ["bsgrubs", "bla", "rgyal", "chos", "dbyar"] {
            assert!(
                validate(input).is_valid,
                "'{input}' renders via a syllable match and must validate"
            );
        }
    }
}

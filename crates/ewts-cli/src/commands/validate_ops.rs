use ewts_engine::{validate, ValidationError, ValidationResult};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::CliError;

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

/// Validate EWTS text and print a report. Returns whether the text was
/// valid so the binary can choose its exit code.
pub fn validate_cmd(text: &str, json: bool) -> Result<bool, CliError> {
    let result = validate(text);

    if json {
        let report = Report {
            input: text,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(result.is_valid);
    }

    if result.is_valid && result.warnings.is_empty() {
        println!("valid Extended Wylie");
        return Ok(true);
    }

    if !result.is_valid {
        println!("found {} error(s):", result.errors.len());
        print_rows("error", &result.errors);
    } else {
        println!("valid Extended Wylie");
    }
    if !result.warnings.is_empty() {
        println!("{} warning(s):", result.warnings.len());
        print_rows("warning", &result.warnings);
    }
    Ok(result.is_valid)
}

/// Tibetan syllables are wider than their char count; pad by display width
/// so the message column lines up.
fn print_rows(label: &str, entries: &[ValidationError]) {
    let syllable_width = entries
        .iter()
        .map(|e| e.syllable.width())
        .max()
        .unwrap_or(0);
    for entry in entries {
        let pad = syllable_width - entry.syllable.width();
        println!(
            "  {label} [{}] {}{} : {}",
            entry.kind,
            entry.syllable,
            " ".repeat(pad),
            entry.message
        );
        if let Some(suggestion) = &entry.suggestion {
            println!("    suggestion: {suggestion}");
        }
    }
}

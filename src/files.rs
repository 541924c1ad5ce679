//! File-level transliteration: read UTF-8, auto-detect direction, convert,
//! write UTF-8.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::forward::wylie_to_unicode;
use crate::reverse::unicode_to_wylie;
use crate::unicode::is_tibetan;

/// Errors from file-level processing. The conversion itself cannot fail;
/// only I/O can.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Conversion direction for a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    WylieToUnicode,
    UnicodeToWylie,
    Auto,
}

/// Line and character counts for a completed conversion.
#[derive(Clone, Copy, Debug)]
pub struct Stats {
    pub input_chars: usize,
    pub output_chars: usize,
    pub input_lines: usize,
    pub output_lines: usize,
}

/// Sample size for direction detection.
const DETECT_SAMPLE: usize = 500;

/// Resolve the direction from content: more than 30% Tibetan codepoints in
/// the leading sample means the input is already Unicode.
pub fn detect_direction(text: &str) -> Mode {
    let sample: Vec<char> = text.chars().take(DETECT_SAMPLE).collect();
    if sample.is_empty() {
        return Mode::WylieToUnicode;
    }
    let tibetan = sample.iter().filter(|&&c| is_tibetan(c)).count();
    if (tibetan as f64) / (sample.len() as f64) > 0.3 {
        Mode::UnicodeToWylie
    } else {
        Mode::WylieToUnicode
    }
}

/// Convert one file into another. Auto mode detects the direction from the
/// input text; parent directories of the output are created as needed.
pub fn process_file(input: &Path, output: &Path, mode: Mode) -> Result<Stats, FileError> {
    let text = fs::read_to_string(input)?;

    let resolved = match mode {
        Mode::Auto => detect_direction(&text),
        other => other,
    };
    debug!(?resolved, input = %input.display(), "converting file");

    let converted = match resolved {
        Mode::WylieToUnicode => wylie_to_unicode(&text, true),
        Mode::UnicodeToWylie | Mode::Auto => unicode_to_wylie(&text),
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, &converted)?;

    Ok(Stats {
        input_chars: text.chars().count(),
        output_chars: converted.chars().count(),
        input_lines: text.matches('\n').count() + 1,
        output_lines: converted.matches('\n').count() + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detect_direction() {
        assert_eq!(detect_direction("bla ma"), Mode::WylieToUnicode);
        assert_eq!(detect_direction("བླ་མ"), Mode::UnicodeToWylie);
        assert_eq!(detect_direction(""), Mode::WylieToUnicode);
        // Mixed content below the threshold stays Wylie.
        assert_eq!(
            detect_direction("mostly ascii with one ་ mark"),
            Mode::WylieToUnicode
        );
    }

    #[test]
    fn test_process_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let unicode = dir.path().join("out.txt");
        let back = dir.path().join("back.txt");

        fs::write(&input, "bla ma\n").unwrap();
        let stats = process_file(&input, &unicode, Mode::Auto).unwrap();
        assert_eq!(stats.input_lines, 2);
        assert_eq!(fs::read_to_string(&unicode).unwrap(), "བླ་མ\n");

        process_file(&unicode, &back, Mode::Auto).unwrap();
        assert_eq!(fs::read_to_string(&back).unwrap(), "bla ma\n");
    }

    #[test]
    fn test_process_file_creates_output_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("nested/dir/out.txt");
        fs::write(&input, "ka").unwrap();
        process_file(&input, &output, Mode::WylieToUnicode).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "ཀ");
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = process_file(
            &dir.path().join("missing.txt"),
            &dir.path().join("out.txt"),
            Mode::Auto,
        );
        assert!(matches!(result, Err(FileError::Io(_))));
    }
}

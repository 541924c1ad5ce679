use std::path::Path;

use ewts_engine::files::{process_file, Mode};
use ewts_engine::{unicode_to_wylie, wylie_to_unicode};

use super::CliError;

pub fn convert_cmd(text: &str, keep_spaces: bool) {
    println!("{}", wylie_to_unicode(text, !keep_spaces));
}

pub fn reverse_cmd(text: &str) {
    println!("{}", unicode_to_wylie(text));
}

pub fn file_cmd(input: &str, output: &str, mode: Mode) -> Result<(), CliError> {
    let stats = process_file(Path::new(input), Path::new(output), mode)?;
    eprintln!(
        "processed {} lines ({} chars in, {} chars out)",
        stats.input_lines, stats.input_chars, stats.output_chars
    );
    Ok(())
}

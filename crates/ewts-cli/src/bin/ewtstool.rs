use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use ewts_cli::commands::{acip_cmd, convert_cmd, file_cmd, reverse_cmd, validate_cmd};
use ewts_engine::files::Mode;

#[derive(Parser)]
#[command(name = "ewtstool", about = "EWTS / Tibetan Unicode conversion tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert EWTS text to Tibetan Unicode
    Convert {
        /// EWTS text (multiple arguments are joined with spaces)
        text: Vec<String>,
        /// Keep spaces instead of rendering tsheg marks
        #[arg(long)]
        keep_spaces: bool,
    },

    /// Convert Tibetan Unicode text to EWTS
    Reverse {
        /// Tibetan Unicode text
        text: Vec<String>,
    },

    /// Validate EWTS text against Tibetan stacking rules
    Validate {
        /// EWTS text to check
        text: Vec<String>,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert ACIP text to Tibetan Unicode (or back)
    Acip {
        /// Input text
        text: Vec<String>,
        /// Treat the input as Tibetan Unicode and produce ACIP
        #[arg(long)]
        from_unicode: bool,
    },

    /// Convert a file between EWTS and Tibetan Unicode
    File {
        /// Input file path
        input: String,
        /// Output file path
        output: String,
        /// Conversion direction
        #[arg(long, value_enum, default_value = "auto")]
        mode: ModeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Detect the direction from the input content
    Auto,
    /// EWTS to Tibetan Unicode
    Wylie,
    /// Tibetan Unicode to EWTS
    Unicode,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Mode {
        match mode {
            ModeArg::Auto => Mode::Auto,
            ModeArg::Wylie => Mode::WylieToUnicode,
            ModeArg::Unicode => Mode::UnicodeToWylie,
        }
    }
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert { text, keep_spaces } => convert_cmd(&text.join(" "), keep_spaces),
        Command::Reverse { text } => reverse_cmd(&text.join(" ")),
        Command::Validate { text, json } => {
            let valid = die!(validate_cmd(&text.join(" "), json), "Error: {}");
            if !valid {
                process::exit(2);
            }
        }
        Command::Acip { text, from_unicode } => acip_cmd(&text.join(" "), from_unicode),
        Command::File {
            input,
            output,
            mode,
        } => die!(file_cmd(&input, &output, mode.into()), "Error: {}"),
    }
}

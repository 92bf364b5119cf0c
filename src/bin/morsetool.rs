use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use morse_engine::settings;
use morse_engine::table::{self, MorseTable};
use morse_engine::trace_init::init_tracing;
use morse_engine::Encoder;

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "morsetool", about = "Encode text as International Morse code")]
struct Cli {
    /// Custom code table TOML (replaces the embedded ITU table)
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Directory for the JSON trace log (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full translation of a message
    Encode {
        /// Message words; joined with single spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print one translated word per line, then the end-of-message sentinel
    Stream {
        /// Message words; joined with single spaces
        #[arg(required = true)]
        text: Vec<String>,
        /// Report words with unsupported characters and keep going
        #[arg(long)]
        skip_errors: bool,
    },

    /// Run the built-in demonstration messages
    Demo,

    /// Export or validate a code table
    Table {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Export or validate settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default TOML
    Export,
    /// Check a TOML file
    Validate { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        init_tracing(dir);
    }
    if let Some(path) = &cli.table {
        let content = die!(fs::read_to_string(path), "Error reading {}: {}", path.display());
        die!(MorseTable::init_custom(content), "Error: {}");
    }
    if let Some(path) = &cli.settings {
        let content = die!(fs::read_to_string(path), "Error reading {}: {}", path.display());
        die!(settings::init_custom(content), "Error: {}");
    }

    match cli.command {
        Command::Encode { text } => {
            let mut encoder = Encoder::new();
            encoder.set_message(text.join(" "));
            println!("{}", die!(encoder.get_message(), "Error: {}"));
        }
        Command::Stream { text, skip_errors } => {
            let mut encoder = Encoder::new();
            encoder.set_message(text.join(" "));
            stream(&mut encoder, skip_errors);
        }
        Command::Demo => demo(),
        Command::Table { action } => match action {
            ConfigAction::Export => print!("{}", table::default_toml()),
            ConfigAction::Validate { file } => {
                let content = die!(fs::read_to_string(&file), "Error reading {}: {}", file.display());
                let t = die!(table::parse_table_toml(&content), "Error: {}");
                println!(
                    "OK: {} symbols, {} prosigns",
                    t.symbols.len(),
                    t.prosigns.len()
                );
            }
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => print!("{}", settings::default_toml()),
            ConfigAction::Validate { file } => {
                let content = die!(fs::read_to_string(&file), "Error reading {}: {}", file.display());
                let s = die!(settings::parse_settings_toml(&content), "Error: {}");
                println!(
                    "OK: spacing.letter_gap={}, spacing.word_gap={}, stream.end_of_message={:?}",
                    s.spacing.letter_gap, s.spacing.word_gap, s.stream.end_of_message
                );
            }
        },
    }
}

fn stream(encoder: &mut Encoder<'_>, skip_errors: bool) {
    loop {
        if encoder.is_exhausted() {
            // The sentinel itself comes from get_next so custom settings apply.
            println!("{}", die!(encoder.get_next(), "Error: {}"));
            return;
        }
        let index = encoder.position();
        match encoder.get_next() {
            Ok(part) => println!("{part}"),
            Err(e) if skip_errors => {
                eprintln!("word {}: {e}", index + 1);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}

fn demo() {
    let mut encoder = Encoder::new();

    println!("[Demo] Setting message: CQ AR DE K");
    encoder.set_message("CQ AR DE K");
    println!("[Demo] Full Morse message:");
    println!("{}", die!(encoder.get_message(), "Error: {}"));

    println!("[Demo] Word-by-word output:");
    for part in encoder.drain() {
        println!("{}", die!(part, "Error: {}"));
    }

    println!("[Demo] Prosigns AR SK:");
    encoder.set_message("AR SK");
    for part in encoder.drain() {
        println!("{}", die!(part, "Error: {}"));
    }
    println!("{}", die!(encoder.get_next(), "Error: {}"));

    println!("[Demo] Message with @:");
    encoder.set_message("HELLO @ WORLD");
    println!("{}", die!(encoder.get_message(), "Error: {}"));

    println!("[Demo] Message with ~ (rejected):");
    encoder.set_message("HELLO ~ WORLD");
    match encoder.get_message() {
        Ok(out) => println!("{out}"),
        Err(e) => eprintln!("[Rejected] {e}"),
    }
}

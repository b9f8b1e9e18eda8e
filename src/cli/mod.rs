use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{load_config_file, CandidateStrategy, Config};
use crate::error::KasiskiError;
use clap::{ArgGroup, Parser};
use log::trace;

/// The struct for Clap CLI arguments.
/// Doc strings on the fields are the `--help` text.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file", "messages"])))]
pub struct Opts {
    /// Ciphertext to crack
    #[arg(short, long)]
    text: Option<String>,

    /// Opens a file and cracks its contents.
    /// Use instead of `--text`
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// A JSON batch of messages, {"messages": [{"id": .., "encrypt_text": ..}]}
    #[arg(short, long)]
    messages: Option<PathBuf>,

    /// Where the report for `--messages` is written
    #[arg(short, long, default_value = "decrypted_results.txt")]
    output: PathBuf,

    /// A TOML config file, command line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How to choose between several plausible key lengths
    #[arg(short, long, value_enum)]
    strategy: Option<CandidateStrategy>,

    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Run in API mode, results are printed as JSON
    #[arg(short, long)]
    api_mode: bool,
}

/// What the user asked us to crack
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A single ciphertext
    Text(String),
    /// A JSON message batch and the report it should produce
    Messages {
        /// JSON batch to read
        input: PathBuf,
        /// Report to write
        output: PathBuf,
    },
}

/// Parse CLI Arguments turns a Clap Opts struct, seen above
/// into an [`Input`] and a library [`Config`].
/// It also sets up logging, at the verbosity of the merged config so a
/// `verbose` set in the config file counts too.
///
/// # Errors
/// Fails if the config file or the input file can't be read, or the
/// resulting config is invalid.
pub fn parse_cli_args() -> Result<(Input, Config), KasiskiError> {
    let opts: Opts = Opts::parse();
    let (input, config) = cli_args_into_config_struct(opts)?;
    env_logger::init_from_env(
        env_logger::Env::default()
            .filter_or(env_logger::DEFAULT_FILTER_ENV, min_log_level(config.verbose)),
    );

    trace!("Program was called with CLI 😉");
    trace!("Parsed the arguments into {:?}", input);
    Ok((input, config))
}

/// Default log filter for a verbosity level, `RUST_LOG` still wins
fn min_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "Warn",
        1 => "Info",
        2 => "Debug",
        _ => "Trace",
    }
}

/// When the CLI is called with `-f` to open a file
/// this function opens it
pub fn read_and_parse_file(file_path: &Path) -> Result<String, KasiskiError> {
    let contents = fs::read_to_string(file_path)?;
    // A file created on Unix usually ends with a newline.
    // That isn't part of the ciphertext, so we remove it.
    Ok(contents.trim_end_matches(['\n', '\r']).to_owned())
}

/// Turns our CLI arguments into a config struct
fn cli_args_into_config_struct(opts: Opts) -> Result<(Input, Config), KasiskiError> {
    let mut config = match &opts.config {
        Some(path) => load_config_file(path)?,
        None => Config::default(),
    };
    config.verbose = config.verbose.max(opts.verbose);
    config.api_mode = config.api_mode || opts.api_mode;
    if let Some(strategy) = opts.strategy {
        config.strategy = strategy;
    }
    config.validate()?;

    let input = if let Some(text) = opts.text {
        Input::Text(text)
    } else if let Some(path) = &opts.file {
        Input::Text(read_and_parse_file(path)?)
    } else if let Some(input) = opts.messages {
        Input::Messages {
            input,
            output: opts.output,
        }
    } else {
        // clap enforces the input group
        return Err(KasiskiError::Config("No input was provided".to_string()));
    };

    Ok((input, config))
}

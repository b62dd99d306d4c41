//! Command-line lookup of translated country names.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use country_translator::config::{
    self,
    ConfigError,
};
use country_translator::{
    DataSource,
    InitError,
    NotFoundError,
    TranslationStore,
    Translator,
};
use thiserror::Error;

/// Usage text shown with argument errors
const USAGE: &str = "Usage: country-translator [--data <file>] <command>

Commands:
  countries                       List all country codes
  languages <code>                List the languages of a country
  translate <code> [<language>]   Translate a country name";

/// Anything that ends the CLI with a failure exit code
#[derive(Error, Debug)]
enum CliError {
    /// Bad command line
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),

    /// Settings file could not be read or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Dataset could not be loaded
    #[error(transparent)]
    Init(#[from] InitError),

    /// Lookup missed
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Subcommand to run
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// List all country codes
    Countries,
    /// List the languages of a country
    Languages {
        /// Country code
        country: String,
    },
    /// Translate a country name
    Translate {
        /// Country code
        country: String,
        /// Language, or the configured default
        language: Option<String>,
    },
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    /// `--data` override for the dataset
    data: Option<PathBuf>,
    /// Subcommand
    command: Command,
}

/// Parse arguments (without the program name).
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, CliError> {
    let mut data = None;
    let mut positional = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--data" {
            let path = args
                .next()
                .ok_or_else(|| CliError::Usage("--data requires a file path".to_string()))?;
            data = Some(PathBuf::from(path));
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("countries") => Command::Countries,
        Some("languages") => {
            let country = positional
                .next()
                .ok_or_else(|| CliError::Usage("languages requires a country code".to_string()))?;
            Command::Languages { country }
        }
        Some("translate") => {
            let country = positional
                .next()
                .ok_or_else(|| CliError::Usage("translate requires a country code".to_string()))?;
            Command::Translate { country, language: positional.next() }
        }
        Some(other) => return Err(CliError::Usage(format!("Unknown command '{other}'"))),
        None => return Err(CliError::Usage("Missing command".to_string())),
    };

    if let Some(extra) = positional.next() {
        return Err(CliError::Usage(format!("Unexpected argument '{extra}'")));
    }

    Ok(Args { data, command })
}

/// Execute the command and return the lines to print.
///
/// The settings file is only read when the command line leaves something to
/// it, so `--data` with an explicit language works even if the file is broken.
fn run(args: Args, work_dir: &Path) -> Result<Vec<String>, CliError> {
    let source = match args.data {
        Some(path) => DataSource::File(path),
        None => config::load_settings(work_dir)?.data_source(work_dir),
    };
    let store = TranslationStore::load(&source)?;

    let lines = match args.command {
        Command::Countries => store.countries().into_iter().collect(),
        Command::Languages { country } => store.country_languages(&country)?,
        Command::Translate { country, language } => {
            let language = match language {
                Some(language) => language,
                None => config::load_settings(work_dir)?.default_language,
            };
            vec![store.translate(&country, &language)?.to_string()]
        }
    };

    Ok(lines)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(|e| CliError::Config(ConfigError::IoError(e)))
        .and_then(|work_dir| run(parse_args(std::env::args().skip(1))?, &work_dir));

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

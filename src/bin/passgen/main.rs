use std::path::PathBuf;
use std::process;

use clap::Parser;

mod interactive;
mod loglevel;
mod pw;
mod table;

#[derive(Parser)]
#[command(version, about = "Generate random passwords, and see how strong they are.")]
struct Cli {
    /// Read default options from this YAML file, rather than `~/.config/passgen/config.yaml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Be more verbose; may be given several times.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Args>,
}

#[derive(clap::Subcommand)]
enum Args {
    /// Generate one or more passwords, and print them along with their strength.
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        options: OptionArgs,
        /// How many passwords to generate.
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Copy the (first) generated password to the clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Score an existing password. Prompts for it, without echoing, if it isn't given.
    Check {
        password: Option<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate passwords interactively, tweaking the options as you go. This is the default.
    Interactive {
        #[command(flatten)]
        options: OptionArgs,
    },
}

/// Overrides for the options in the config file.
#[derive(clap::Args, Default)]
struct OptionArgs {
    /// Length of the password.
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u16).range(
            passgen::password_generation::MIN_LENGTH as i64
                ..=passgen::password_generation::MAX_LENGTH as i64
        )
    )]
    length: Option<u16>,
    /// Include the digits 0-9.
    #[arg(short, long, overrides_with = "no_digits")]
    digits: bool,
    /// Leave out the digits, even if the config file asks for them.
    #[arg(long, overrides_with = "digits")]
    no_digits: bool,
    /// Include punctuation characters.
    #[arg(short, long, overrides_with = "no_symbols")]
    symbols: bool,
    /// Leave out punctuation characters, even if the config file asks for them.
    #[arg(long, overrides_with = "symbols")]
    no_symbols: bool,
}

impl OptionArgs {
    fn apply(&self, mut options: passgen::GenerationOptions) -> passgen::GenerationOptions {
        if let Some(length) = self.length {
            options.length = usize::from(length);
        }
        if let Some(digits) = toggle(self.digits, self.no_digits) {
            options.include_digits = digits;
        }
        if let Some(symbols) = toggle(self.symbols, self.no_symbols) {
            options.include_symbols = symbols;
        }
        options
    }
}

/// Fold a `--foo`/`--no-foo` pair into an override; `None` leaves the config value alone.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn run() -> Result<(), ProgError> {
    let cli = Cli::parse();
    loglevel::LogLevel::from_verbosity_flag_count(cli.verbose).apply();

    let defaults = load_options(cli.config)?;
    log::debug!("default options: {:?}", defaults);

    match cli.command {
        Some(Args::Generate {
            options,
            count,
            json,
            copy,
        }) => pw::generate(&options.apply(defaults), count, json, copy)?,
        Some(Args::Check { password, json }) => pw::check(password, json)?,
        Some(Args::Interactive { options }) => interactive::run(options.apply(defaults))?,
        None => interactive::run(defaults)?,
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn load_options(config_path: Option<PathBuf>) -> Result<passgen::GenerationOptions, ProgError> {
    let options = match config_path {
        Some(p) => passgen::config::load(&p)?,
        None => passgen::config::load_default()?,
    };
    Ok(options)
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Cancelled; exiting.")]
    Cancelled,
    #[error("No password given.")]
    NoPassword,
    #[error("Configuration error: {0}")]
    Config(passgen::ConfigError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passgen::ConfigError> for ProgError {
    fn from(err: passgen::ConfigError) -> ProgError {
        ProgError::Config(err)
    }
}

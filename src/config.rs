//! Loading default generation options from a YAML file.
//!
//! The file is optional, and every key in it is optional:
//!
//! ```yaml
//! length: 16
//! include_digits: true
//! include_symbols: false
//! ```

use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::password_generation::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};

/// Where the config file lives when no path is given: `$XDG_CONFIG_HOME/passgen/config.yaml`,
/// falling back to `$HOME/.config/passgen/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    let mut p = match env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => {
            let mut home = PathBuf::from(env::var_os("HOME")?);
            home.push(".config");
            home
        }
    };
    p.push("passgen");
    p.push("config.yaml");
    Some(p)
}

/// Load options from the file at `path`.
pub fn load(path: &Path) -> Result<GenerationOptions, ConfigError> {
    let file = File::open(path).map_err(|err| ConfigErrorRepr::Io(path.to_owned(), err))?;
    from_reader(file).map_err(|err| match err.0 {
        ConfigErrorRepr::Io(_, inner) => ConfigErrorRepr::Io(path.to_owned(), inner).into(),
        ConfigErrorRepr::Parse(_, inner) => ConfigErrorRepr::Parse(path.to_owned(), inner).into(),
        repr => ConfigError(repr),
    })
}

/// Load options from the default location, if a file exists there.
///
/// A missing file yields the built-in defaults; an unreadable or invalid one is an error.
pub fn load_default() -> Result<GenerationOptions, ConfigError> {
    match default_config_path() {
        Some(path) => load_or_default(&path),
        None => {
            log::debug!("no home directory; using built-in defaults");
            Ok(GenerationOptions::default())
        }
    }
}

fn load_or_default(path: &Path) -> Result<GenerationOptions, ConfigError> {
    match load(path) {
        Ok(options) => {
            log::info!("loaded options from {}", path.display());
            Ok(options)
        }
        Err(ConfigError(ConfigErrorRepr::Io(_, ref err)))
            if err.kind() == io::ErrorKind::NotFound =>
        {
            log::debug!("{} does not exist; using built-in defaults", path.display());
            Ok(GenerationOptions::default())
        }
        Err(err) => Err(err),
    }
}

/// Parse and validate options from YAML.
pub fn from_reader(mut rdr: impl Read) -> Result<GenerationOptions, ConfigError> {
    let mut contents = String::new();
    rdr.read_to_string(&mut contents)
        .map_err(|err| ConfigErrorRepr::Io(PathBuf::new(), err))?;
    // A file with nothing but comments in it means "all defaults".
    if contents.lines().all(is_blank_line) {
        return Ok(GenerationOptions::default());
    }
    let options: GenerationOptions = serde_yaml::from_str(&contents)
        .map_err(|err| ConfigErrorRepr::Parse(PathBuf::new(), err))?;
    validate(&options)?;
    Ok(options)
}

fn is_blank_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#') || line == "---"
}

fn validate(options: &GenerationOptions) -> Result<(), ConfigErrorRepr> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        Ok(())
    } else {
        Err(ConfigErrorRepr::LengthOutOfRange(options.length))
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ConfigError(ConfigErrorRepr);

impl From<ConfigErrorRepr> for ConfigError {
    fn from(err: ConfigErrorRepr) -> ConfigError {
        ConfigError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum ConfigErrorRepr {
    #[error("failed to read config file {}: {1}", .0.display())]
    Io(PathBuf, #[source] io::Error),
    #[error("failed to parse config file {}: {1}", .0.display())]
    Parse(PathBuf, #[source] serde_yaml::Error),
    #[error("length must be between {} and {}, but the config says {0}", MIN_LENGTH, MAX_LENGTH)]
    LengthOutOfRange(usize),
}

use std::fmt;

/// How chatty the program is on stderr, picked by the number of `-v` flags.
///
/// `RUST_LOG`, when set, wins over the flags.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LogLevel {
    /// No log output; only the program's own output and errors. Zero `-v` flags.
    None = 0,
    Error,
    Warn,
    Info,
    Debug,
    /// Everything, including per-password scoring traces. Five or more `-v` flags.
    Trace,
}

impl LogLevel {
    pub fn from_verbosity_flag_count(level: u8) -> Self {
        match level {
            0 => LogLevel::None,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::None => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Install the global logger.
    pub fn apply(&self) {
        let env = env_logger::Env::default().default_filter_or(self.as_filter_str());
        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .init();
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

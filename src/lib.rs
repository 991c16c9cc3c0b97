//! Random password generation, with a rough strength score to go alongside each password.
//!
//! ```
//! let options = passgen::GenerationOptions {
//!     length: 12,
//!     include_digits: true,
//!     include_symbols: false,
//! };
//! let report = passgen::evaluate(&mut rand::thread_rng(), &options);
//! assert_eq!(report.password.as_str().len(), 12);
//! println!("{} ({}%)", report.strength.label, report.strength.score);
//! ```

use serde::Serialize;

pub mod config;
pub mod password_generation;
pub mod strength;

pub use config::ConfigError;
pub use password_generation::{generate, Alphabet, GenerationOptions};
pub use strength::{classify, estimate_crack_time, CrackTime, Strength, StrengthLabel};

/// A generated password, along with how strong it looks.
///
/// The strength and crack time are always derived from `password`; build a new report to score a
/// different password.
#[derive(Clone, Debug, Serialize)]
pub struct PasswordReport {
    pub password: Secret,
    pub strength: Strength,
    pub crack_time: CrackTime,
}

impl PasswordReport {
    pub fn new(password: Secret) -> PasswordReport {
        let strength = classify(password.as_str());
        let crack_time = estimate_crack_time(strength.score);
        PasswordReport {
            password,
            strength,
            crack_time,
        }
    }
}

/// Generate a password from `options`, and score it.
pub fn evaluate<R>(rng: &mut R, options: &GenerationOptions) -> PasswordReport
where
    R: rand::Rng + rand::CryptoRng,
{
    PasswordReport::new(generate(rng, options))
}

#[derive(Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

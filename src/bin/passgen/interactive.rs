//! The interactive session: one password on screen at a time, regenerated whenever the options
//! change.

use anyhow::Context;
use console::style;
use dialoguer::theme::ColorfulTheme;
use rand::{CryptoRng, Rng};

use passgen::password_generation::{MAX_LENGTH, MIN_LENGTH};
use passgen::{GenerationOptions, PasswordReport};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Action {
    GenerateNew,
    Copy,
    SetLength(usize),
    ToggleDigits,
    ToggleSymbols,
    ToggleVisibility,
    Quit,
}

/// What the user is currently looking at. The report is replaced wholesale on every change, so it
/// never lags behind the options.
struct Session {
    options: GenerationOptions,
    report: PasswordReport,
    show_password: bool,
}

impl Session {
    fn new<R: Rng + CryptoRng>(rng: &mut R, options: GenerationOptions) -> Session {
        Session {
            options,
            report: passgen::evaluate(rng, &options),
            show_password: true,
        }
    }

    fn regenerate<R: Rng + CryptoRng>(&mut self, rng: &mut R) {
        self.report = passgen::evaluate(rng, &self.options);
    }

    /// Apply an action that changes the session. Returns `false` once the user wants to leave.
    fn apply<R: Rng + CryptoRng>(&mut self, rng: &mut R, action: Action) -> bool {
        match action {
            Action::GenerateNew => self.regenerate(rng),
            Action::SetLength(length) => {
                self.options.length = length;
                self.regenerate(rng);
            }
            Action::ToggleDigits => {
                self.options.include_digits = !self.options.include_digits;
                self.regenerate(rng);
            }
            Action::ToggleSymbols => {
                self.options.include_symbols = !self.options.include_symbols;
                self.regenerate(rng);
            }
            Action::ToggleVisibility => self.show_password = !self.show_password,
            Action::Copy => (),
            Action::Quit => return false,
        }
        true
    }

    fn displayed_password(&self) -> String {
        let password = self.report.password.as_str();
        if self.show_password {
            password.to_owned()
        } else {
            "•".repeat(password.chars().count())
        }
    }

    fn render(&self) -> String {
        format!(
            "\n{}\n\n{}Length: {}  Numbers: {}  Characters: {}\n",
            style(self.displayed_password()).bold(),
            crate::pw::render_strength(&self.report),
            style(self.options.length).bold(),
            on_off(self.options.include_digits),
            on_off(self.options.include_symbols),
        )
    }
}

fn on_off(enabled: bool) -> console::StyledObject<&'static str> {
    if enabled {
        style("on").green()
    } else {
        style("off").dim()
    }
}

pub(crate) fn run(options: GenerationOptions) -> Result<(), crate::ProgError> {
    let mut rng = rand::thread_rng();
    let mut session = Session::new(&mut rng, options);
    eprintln!(
        "{}",
        style("We take care of your privacy. Your passwords are never stored.").dim()
    );

    loop {
        eprint!("{}", session.render());
        let action = prompt_action(&session)?;
        log::debug!("interactive action: {:?}", action);
        if action == Action::Copy {
            crate::pw::copy_password(&session.report.password);
        }
        if !session.apply(&mut rng, action) {
            break;
        }
    }
    Ok(())
}

fn prompt_action(session: &Session) -> Result<Action, crate::ProgError> {
    let theme = ColorfulTheme::default();
    let visibility = if session.show_password {
        "Hide password"
    } else {
        "Show password"
    };
    let items = [
        "Generate new",
        "Copy",
        "Change length",
        "Toggle numbers",
        "Toggle characters",
        visibility,
        "Quit",
    ];
    let selection = dialoguer::Select::with_theme(&theme)
        .with_prompt("What next?")
        .items(&items)
        .default(0)
        .interact_opt()
        .context("failed to query your selection")?;
    let action = match selection {
        Some(0) => Action::GenerateNew,
        Some(1) => Action::Copy,
        Some(2) => Action::SetLength(prompt_length(&theme, session.options.length)?),
        Some(3) => Action::ToggleDigits,
        Some(4) => Action::ToggleSymbols,
        Some(5) => Action::ToggleVisibility,
        Some(_) => Action::Quit,
        None => return Err(crate::ProgError::Cancelled),
    };
    Ok(action)
}

fn prompt_length(theme: &ColorfulTheme, current: usize) -> anyhow::Result<usize> {
    dialoguer::Input::<usize>::with_theme(theme)
        .with_prompt(format!("Length ({MIN_LENGTH}-{MAX_LENGTH})"))
        .default(current)
        .validate_with(|length: &usize| -> Result<(), String> {
            if (MIN_LENGTH..=MAX_LENGTH).contains(length) {
                Ok(())
            } else {
                Err(format!("must be between {MIN_LENGTH} and {MAX_LENGTH}"))
            }
        })
        .interact_text()
        .context("failed to read the new length")
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn session(rng: &mut StdRng) -> Session {
        Session::new(rng, GenerationOptions::default())
    }

    #[test]
    fn starts_with_a_scored_password() {
        let mut rng = StdRng::seed_from_u64(1);
        let session = session(&mut rng);
        assert_eq!(session.report.password.as_str().len(), 8);
        assert_eq!(
            session.report.strength,
            passgen::classify(session.report.password.as_str())
        );
    }

    #[test]
    fn option_changes_regenerate() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = session(&mut rng);

        assert!(session.apply(&mut rng, Action::SetLength(40)));
        assert_eq!(session.report.password.as_str().len(), 40);

        assert!(session.apply(&mut rng, Action::ToggleDigits));
        assert!(session.options.include_digits);
        assert_eq!(session.report.password.as_str().len(), 40);

        assert!(session.apply(&mut rng, Action::ToggleSymbols));
        assert!(session.options.include_symbols);
        let alphabet = session.options.alphabet();
        assert!(session
            .report
            .password
            .as_str()
            .chars()
            .all(|c| alphabet.contains(c)));
        assert_eq!(
            session.report.strength,
            passgen::classify(session.report.password.as_str())
        );
    }

    #[test]
    fn copy_and_visibility_keep_the_password() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = session(&mut rng);
        let before = session.report.password.clone();

        assert!(session.apply(&mut rng, Action::Copy));
        assert!(session.apply(&mut rng, Action::ToggleVisibility));
        assert_eq!(session.report.password, before);
        assert_eq!(session.displayed_password(), "•".repeat(8));

        assert!(session.apply(&mut rng, Action::ToggleVisibility));
        assert_eq!(session.displayed_password(), before.as_str());
    }

    #[test]
    fn quit_ends_the_session() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(!session(&mut rng).apply(&mut rng, Action::Quit));
    }
}

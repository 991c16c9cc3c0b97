//! Heuristic password strength scoring, and the matching "time to crack" blurb.
//!
//! None of this is an entropy estimate. A password earns one point for each of:
//! * being at least 8 characters long,
//! * containing an ASCII digit,
//! * containing an ASCII uppercase letter,
//! * containing anything outside `A-Za-z0-9`.
//!
//! Up to one point is "Weak", two is "Medium", three or more is "Strong".

use std::fmt;

use serde::Serialize;

/// Passwords at least this long (in characters) earn the length point.
pub const LONG_ENOUGH: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// The percentage shown for this label.
    pub fn percent(&self) -> u8 {
        match self {
            StrengthLabel::Weak => 33,
            StrengthLabel::Medium => 66,
            StrengthLabel::Strong => 100,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Strength {
    pub label: StrengthLabel,
    /// One of 33, 66 or 100.
    pub score: u8,
}

impl From<StrengthLabel> for Strength {
    fn from(label: StrengthLabel) -> Strength {
        Strength {
            label,
            score: label.percent(),
        }
    }
}

/// Count how many of the four criteria `password` satisfies (0 through 4).
pub fn criteria_met(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= LONG_ENOUGH {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Score `password` and map the score onto a label and percentage.
pub fn classify(password: &str) -> Strength {
    let score = criteria_met(password);
    let label = match score {
        0 | 1 => StrengthLabel::Weak,
        2 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    };
    log::trace!("password met {} of 4 strength criteria: {}", score, label);
    label.into()
}

/// A rough, human-readable guess at how long an attacker would need.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum CrackTime {
    /// Nothing to estimate, there is no password yet.
    #[serde(rename = "")]
    Unknown,
    #[serde(rename = "Instantly")]
    Instantly,
    #[serde(rename = "Hours to days")]
    HoursToDays,
    #[serde(rename = "Months to years")]
    MonthsToYears,
    #[serde(rename = "Thousands of years")]
    ThousandsOfYears,
}

impl CrackTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrackTime::Unknown => "",
            CrackTime::Instantly => "Instantly",
            CrackTime::HoursToDays => "Hours to days",
            CrackTime::MonthsToYears => "Months to years",
            CrackTime::ThousandsOfYears => "Thousands of years",
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a strength percentage onto a crack time.
///
/// The thresholds are fixed: 0 is unknown, below 40 is instant, below 70 is hours to days, below
/// 90 is months to years, and anything else is thousands of years.
pub fn estimate_crack_time(score_percent: u8) -> CrackTime {
    match score_percent {
        0 => CrackTime::Unknown,
        1..=39 => CrackTime::Instantly,
        40..=69 => CrackTime::HoursToDays,
        70..=89 => CrackTime::MonthsToYears,
        _ => CrackTime::ThousandsOfYears,
    }
}

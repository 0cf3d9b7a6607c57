use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language: {raw} (expected `en` or `ru`)")]
pub struct LocaleError {
    raw: String,
}

/// Interface language for the counter and navigation buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    #[must_use]
    pub fn labels(self) -> Labels {
        match self {
            Self::English => Labels::english(),
            Self::Russian => Labels::russian(),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            _ => Err(LocaleError {
                raw: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed strings shown around the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    pub counter_prefix: &'static str,
    pub counter_of: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    /// Shown on the next button while the last card is up.
    pub restart: &'static str,
}

impl Labels {
    #[must_use]
    pub const fn english() -> Self {
        Self {
            counter_prefix: "",
            counter_of: "of",
            previous: "Previous",
            next: "Next",
            restart: "Restart",
        }
    }

    #[must_use]
    pub const fn russian() -> Self {
        Self {
            counter_prefix: "Карточка ",
            counter_of: "из",
            previous: "Назад",
            next: "Далее",
            restart: "Заново",
        }
    }

    #[must_use]
    pub fn counter(&self, number: usize, total: usize) -> String {
        format!("{}{number} {} {total}", self.counter_prefix, self.counter_of)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

//! Hardcoded acknowledgment messages.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Display locale for acknowledgment messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Fa,
}

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Error)]
#[error("unknown locale '{0}' (expected en or fa)")]
pub struct UnknownLocale(String);

impl Locale {
    /// Acknowledgment shown after an item is added.
    #[must_use]
    pub fn added_to_cart(self, name: &str) -> String {
        match self {
            Self::En => format!("{name} added to cart!"),
            Self::Fa => format!("{name} به سبد اضافه شد!"),
        }
    }

    /// Acknowledgment shown after a form is submitted.
    #[must_use]
    pub const fn form_submitted(self) -> &'static str {
        match self {
            Self::En => "Your message was sent successfully!",
            Self::Fa => "پیام شما با موفقیت ارسال شد!",
        }
    }

    /// Locale code (e.g., "en").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fa" => Ok(Self::Fa),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_added_to_cart() {
        assert_eq!(Locale::En.added_to_cart("Widget"), "Widget added to cart!");
        assert_eq!(Locale::Fa.added_to_cart("Widget"), "Widget به سبد اضافه شد!");
    }

    #[test]
    fn test_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" FA ".parse::<Locale>().unwrap(), Locale::Fa);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_display_round_trips_code() {
        assert_eq!(Locale::Fa.to_string(), "fa");
    }
}

//! User display preferences: theme, locale and simplified layout.
//!
//! These are plain values. The frontend providers own their lifecycle
//! (load on start, persist on change); this module only defines the values
//! and how each toggle moves between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}

/// The interface languages, in the order the language button cycles through them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
    He,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::He];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::He => "he",
        }
    }

    /// The next locale in [`Locale::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::He)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| UnknownPreference(s.to_string()))
    }
}

/// Reduced-density display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimplifiedLayout(pub bool);

impl SimplifiedLayout {
    pub fn is_enabled(&self) -> bool {
        self.0
    }

    pub fn toggled(self) -> Self {
        Self(!self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown preference value: {0}")]
pub struct UnknownPreference(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_cycles_and_wraps() {
        let mut locale = Locale::En;
        locale = locale.next();
        assert_eq!(locale, Locale::Ru);
        locale = locale.next();
        assert_eq!(locale, Locale::He);
        locale = locale.next();
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn theme_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn simplified_toggle_twice_is_identity() {
        for layout in [SimplifiedLayout(false), SimplifiedLayout(true)] {
            assert_eq!(layout.toggled().toggled(), layout);
        }
        assert!(SimplifiedLayout(false).toggled().is_enabled());
    }

    #[test]
    fn stored_values_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("he".parse::<Locale>(), Ok(Locale::He));
        assert!("fr".parse::<Locale>().is_err());
        assert!(Locale::He.is_rtl());
    }
}

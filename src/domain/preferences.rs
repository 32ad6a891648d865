use serde::{Deserialize, Serialize};

/// Fallback rate applied on first run, before the user configures one.
pub const DEFAULT_RATE: f64 = 50.0;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Process-wide preferences, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
    pub default_rate: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::En,
            theme: Theme::Light,
            default_rate: DEFAULT_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_roundtrip() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code(" HI "), Some(Language::Hi));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Hi.code(), "hi");
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}

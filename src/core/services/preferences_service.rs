//! Validated mutations of process-wide preferences.

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Language, Preferences, Theme};
use crate::ledger::numeric::parse_decimal;

pub struct PreferencesService;

impl PreferencesService {
    /// Replaces the default rate. Non-numeric or negative input is rejected
    /// and the previous value stays in effect. The change is not
    /// retroactive: days holding an explicit rate keep it.
    pub fn set_default_rate(preferences: &mut Preferences, raw: &str) -> ServiceResult<f64> {
        let value = parse_decimal(raw)
            .ok_or_else(|| ServiceError::Invalid("default rate must be a number".into()))?;
        if value < 0.0 {
            return Err(ServiceError::Invalid(
                "default rate cannot be negative".into(),
            ));
        }
        preferences.default_rate = value;
        Ok(value)
    }

    pub fn set_language(preferences: &mut Preferences, code: &str) -> ServiceResult<Language> {
        let language = Language::from_code(code)
            .ok_or_else(|| ServiceError::Invalid(format!("unsupported language `{code}`")))?;
        preferences.language = language;
        Ok(language)
    }

    pub fn toggle_theme(preferences: &mut Preferences) -> Theme {
        preferences.theme = preferences.theme.toggled();
        preferences.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_rate_keeps_previous_value() {
        let mut preferences = Preferences {
            default_rate: 45.0,
            ..Preferences::default()
        };

        assert!(PreferencesService::set_default_rate(&mut preferences, "abc").is_err());
        assert!(PreferencesService::set_default_rate(&mut preferences, "-2").is_err());
        assert_eq!(preferences.default_rate, 45.0);

        PreferencesService::set_default_rate(&mut preferences, "52.5").unwrap();
        assert_eq!(preferences.default_rate, 52.5);
    }

    #[test]
    fn unknown_language_is_rejected() {
        let mut preferences = Preferences::default();
        assert!(PreferencesService::set_language(&mut preferences, "fr").is_err());
        assert_eq!(preferences.language, Language::En);

        PreferencesService::set_language(&mut preferences, "hi").unwrap();
        assert_eq!(preferences.language, Language::Hi);
    }
}

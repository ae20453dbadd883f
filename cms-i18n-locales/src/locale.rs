//! Locale records
//!
//! A [`Locale`] is one configured language entry in the CMS. The
//! "exactly one default" rule is a property of a whole collection and is
//! maintained by the reducer, not by the record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configured locale.
///
/// # Examples
///
/// ```
/// use cms_i18n_locales::Locale;
///
/// let fr = Locale::new(1, "French").with_code("fr");
/// let en = Locale::new(2, "English").with_code("en").default_locale();
///
/// assert!(!fr.is_default);
/// assert!(en.is_default);
/// assert_eq!(en.code(), Some("en"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Identifier assigned by the backend
    pub id: i64,
    /// Human readable name ("French (fr)")
    pub display_name: String,
    /// Whether this is the collection default
    #[serde(default)]
    pub is_default: bool,
    /// Locale code ("fr", "en-GB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Locale {
    /// Create a non-default locale without a code.
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_default: false,
            code: None,
        }
    }

    /// Set the locale code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Mark as the default locale.
    pub fn default_locale(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Locale code, if known.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.display_name, code),
            None => f.write_str(&self.display_name),
        }
    }
}

/// Reference to a locale by code, as selected by the user for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreferredLocale {
    pub code: String,
}

impl PreferredLocale {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Whether `locale` is the one this reference points at.
    pub fn refers_to(&self, locale: &Locale) -> bool {
        locale.code() == Some(self.code.as_str())
    }
}

impl From<&str> for PreferredLocale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// `true` when at most one locale in `locales` is flagged as default.
pub fn has_single_default(locales: &[Locale]) -> bool {
    locales.iter().filter(|locale| locale.is_default).count() <= 1
}

/// First locale flagged as default.
pub fn default_locale(locales: &[Locale]) -> Option<&Locale> {
    locales.iter().find(|locale| locale.is_default)
}

//! Actions accepted by the locale reducer

use crate::locale::{Locale, PreferredLocale};
use crate::{LocaleError, Result};
use serde::{Deserialize, Serialize};

/// Tagged union of every transition the store understands.
///
/// On the wire an action is `{ "type": "ADD_LOCALE", "newLocale": { .. } }`.
/// Any `type` not listed here decodes to [`Action::Unknown`], which the
/// reducer treats as the identity transition.
///
/// ```
/// use cms_i18n_locales::Action;
///
/// let action = Action::from_json(r#"{ "type": "DELETE_LOCALE", "id": 2 }"#).unwrap();
/// assert_eq!(action, Action::DeleteLocale { id: 2 });
///
/// let action = Action::from_json(r#"{ "type": "SOMETHING_ELSE" }"#).unwrap();
/// assert_eq!(action, Action::Unknown);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Replace the collection with a freshly fetched list
    ResolveLocales { locales: Vec<Locale> },
    /// Append a new locale
    AddLocale { new_locale: Locale },
    /// Remove the locale with this id
    DeleteLocale { id: i64 },
    /// Replace the locale sharing `edited_locale.id`
    UpdateLocale { edited_locale: Locale },
    /// Select (or clear) the session's preferred locale
    SetPreferredLocale {
        #[serde(default)]
        preferred_locale: Option<PreferredLocale>,
    },
    /// Any other action type
    #[serde(other)]
    Unknown,
}

impl Action {
    pub const RESOLVE_LOCALES: &'static str = "RESOLVE_LOCALES";
    pub const ADD_LOCALE: &'static str = "ADD_LOCALE";
    pub const DELETE_LOCALE: &'static str = "DELETE_LOCALE";
    pub const UPDATE_LOCALE: &'static str = "UPDATE_LOCALE";
    pub const SET_PREFERRED_LOCALE: &'static str = "SET_PREFERRED_LOCALE";

    /// Wire name of the action type.
    pub fn name(&self) -> &'static str {
        match self {
            Action::ResolveLocales { .. } => Self::RESOLVE_LOCALES,
            Action::AddLocale { .. } => Self::ADD_LOCALE,
            Action::DeleteLocale { .. } => Self::DELETE_LOCALE,
            Action::UpdateLocale { .. } => Self::UPDATE_LOCALE,
            Action::SetPreferredLocale { .. } => Self::SET_PREFERRED_LOCALE,
            Action::Unknown => "UNKNOWN",
        }
    }

    /// Whether the action edits the collection and leaves a fetch pending.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Action::AddLocale { .. } | Action::DeleteLocale { .. } | Action::UpdateLocale { .. }
        )
    }

    /// Decode an action object from JSON text.
    ///
    /// A known `type` whose payload is missing or mistyped (for example
    /// `DELETE_LOCALE` without an `id`) is a [`LocaleError::InvalidAction`]
    /// rather than a transition on partial data. Unknown types still decode
    /// to [`Action::Unknown`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LocaleError::InvalidAction(e.to_string()))
    }

    /// Decode an action object from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| LocaleError::InvalidAction(e.to_string()))
    }

    // Constructors

    pub fn resolve(locales: Vec<Locale>) -> Self {
        Action::ResolveLocales { locales }
    }

    pub fn add(new_locale: Locale) -> Self {
        Action::AddLocale { new_locale }
    }

    pub fn delete(id: i64) -> Self {
        Action::DeleteLocale { id }
    }

    pub fn update(edited_locale: Locale) -> Self {
        Action::UpdateLocale { edited_locale }
    }

    pub fn set_preferred(preferred_locale: Option<PreferredLocale>) -> Self {
        Action::SetPreferredLocale { preferred_locale }
    }
}

//! Locale store state and its transition function

use crate::action::Action;
use crate::locale::{Locale, PreferredLocale};
use crate::Result;
use serde::{Deserialize, Serialize};

/// State of the locale registry for one admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleState {
    /// A fetch of the locale list is pending
    pub is_loading: bool,
    /// Configured locales, in backend order
    pub locales: Vec<Locale>,
    /// Session preference, not validated against `locales`
    pub preferred_locale: Option<PreferredLocale>,
}

impl Default for LocaleState {
    fn default() -> Self {
        Self::initial()
    }
}

impl LocaleState {
    /// `{ isLoading: true, locales: [], preferredLocale: null }`
    pub fn initial() -> Self {
        Self {
            is_loading: true,
            locales: Vec::new(),
            preferred_locale: None,
        }
    }

    /// Initial state with `locales` already in place.
    pub fn with_locales(locales: Vec<Locale>) -> Self {
        Self {
            locales,
            ..Self::initial()
        }
    }

    /// Apply `action` and return the next state.
    pub fn reduce(self, action: &Action) -> Self {
        reduce(self, action)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The locale flagged as default.
    pub fn default_locale(&self) -> Option<&Locale> {
        crate::locale::default_locale(&self.locales)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.id == id)
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.code() == Some(code))
    }

    /// The preferred locale when it names a configured locale, otherwise
    /// the default one.
    pub fn preferred_or_default(&self) -> Option<&Locale> {
        self.preferred_locale
            .as_ref()
            .and_then(|preferred| self.find_by_code(&preferred.code))
            .or_else(|| self.default_locale())
    }

    /// Snapshot as JSON, in the same shape the host UI stores.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a snapshot produced by [`LocaleState::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Transition function of the locale store.
///
/// Total: every action yields a state. Mutations (`ADD`, `DELETE`,
/// `UPDATE`) leave `is_loading` set until the next `RESOLVE_LOCALES`.
pub fn reduce(mut state: LocaleState, action: &Action) -> LocaleState {
    match action {
        Action::ResolveLocales { locales } => {
            state.locales = locales.clone();
            state.is_loading = false;
        }
        Action::AddLocale { new_locale } => {
            if new_locale.is_default {
                clear_defaults(&mut state.locales);
            }
            state.locales.push(new_locale.clone());
            state.is_loading = true;
        }
        Action::DeleteLocale { id } => {
            state.locales.retain(|locale| locale.id != *id);
            state.is_loading = true;
        }
        Action::UpdateLocale { edited_locale } => {
            let position = state
                .locales
                .iter()
                .position(|locale| locale.id == edited_locale.id);

            // Nothing matched: leave the collection (and its default) alone.
            if let Some(index) = position {
                if edited_locale.is_default {
                    clear_defaults(&mut state.locales);
                }
                state.locales[index] = edited_locale.clone();
            }
            state.is_loading = true;
        }
        Action::SetPreferredLocale { preferred_locale } => {
            state.preferred_locale = preferred_locale.clone();
        }
        Action::Unknown => {}
    }

    state
}

fn clear_defaults(locales: &mut [Locale]) {
    for locale in locales.iter_mut() {
        locale.is_default = false;
    }
}

//! Owned, versioned locale store

use crate::action::Action;
use crate::reducer::{LocaleState, reduce};
use crate::Result;
use cms_i18n_log::{debug, trace};

/// Holds the current [`LocaleState`] and counts effective transitions.
///
/// The store is a plain value: dispatch takes `&mut self`, so a host that
/// shares it across tasks wraps it in its own lock.
///
/// ```
/// use cms_i18n_locales::{Action, Locale, LocaleStore};
///
/// let mut store = LocaleStore::new();
/// store.dispatch(Action::resolve(vec![Locale::new(1, "English").with_code("en")]));
///
/// assert!(!store.state().is_loading);
/// assert_eq!(store.version(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    state: LocaleState,
    version: u64,
}

impl LocaleStore {
    /// Store seeded with the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a hydrated state.
    pub fn with_state(state: LocaleState) -> Self {
        Self { state, version: 0 }
    }

    pub fn state(&self) -> &LocaleState {
        &self.state
    }

    /// Number of dispatches that changed the state.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Run `action` through the reducer.
    pub fn dispatch(&mut self, action: Action) -> &LocaleState {
        let next = reduce(self.state.clone(), &action);

        if next == self.state {
            trace!(target: "cms_i18n::locales", "{} left the store unchanged", action.name());
        } else {
            self.version += 1;
            self.state = next;
            debug!(
                target: "cms_i18n::locales",
                "{} -> version {} ({} locales, loading: {})",
                action.name(),
                self.version,
                self.state.locales.len(),
                self.state.is_loading
            );
        }

        &self.state
    }

    /// Decode a host action object and dispatch it.
    pub fn dispatch_json(&mut self, json: &str) -> Result<&LocaleState> {
        let action = Action::from_json(json)?;
        Ok(self.dispatch(action))
    }

    pub fn into_state(self) -> LocaleState {
        self.state
    }
}

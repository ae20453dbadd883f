//! Locale Registry for cms-i18n
//!
//! Keeps the list of locales configured in the CMS, which one is the
//! default, and which one the current user prefers.
//!
//! - **Reducer**: [`reduce`] is a pure transition over [`LocaleState`]
//! - **Actions**: closed [`Action`] enum, decoded from host action objects
//! - **Store**: [`LocaleStore`] owns the state and versions it
//!
//! # Quick Start
//!
//! ```rust
//! use cms_i18n_locales::{Action, Locale, LocaleStore};
//!
//! let mut store = LocaleStore::new();
//!
//! store.dispatch(Action::resolve(vec![
//!     Locale::new(1, "English").with_code("en").default_locale(),
//! ]));
//! store.dispatch(Action::add(Locale::new(2, "French").with_code("fr").default_locale()));
//!
//! let state = store.state();
//! assert_eq!(state.default_locale().and_then(|l| l.code()), Some("fr"));
//! assert!(state.is_loading); // a refetch is pending after a mutation
//! ```

mod action;
mod error;
mod locale;
mod reducer;
mod store;

pub use action::Action;
pub use error::LocaleError;
pub use locale::{Locale, PreferredLocale, default_locale, has_single_default};
pub use reducer::{LocaleState, reduce};
pub use store::LocaleStore;

/// Result type for locale store operations
pub type Result<T> = std::result::Result<T, LocaleError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Action, Locale, LocaleError, LocaleState, LocaleStore, PreferredLocale, Result, reduce,
    };
}

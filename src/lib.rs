// cms-i18n - Locale registry and locale-aware navigation for CMS admin panels
//
// This library bundles the locale store (a reducer over the configured
// locales) and the link localizer (content-manager navigation links carrying
// the right locale parameter).

// Re-export the locale store
pub use cms_i18n_locales::*;

// Re-export logging
pub use cms_i18n_log as log;

// Re-export optional crates
#[cfg(feature = "links")]
pub use cms_i18n_links;

#[cfg(feature = "links")]
pub use cms_i18n_links::{
    ContentKind, ContentTypeSchema, Link, LinkError, LinkLocalizer, LocalizerConfig,
    LocalizerContext, PermissionMap, PermissionRecord, PermissionResolver, QsCodec, QueryCodec,
    add_locale_to_links_search,
};

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Action, Locale, LocaleError, LocaleState, LocaleStore, PreferredLocale, reduce,
    };

    #[cfg(feature = "links")]
    pub use crate::{
        ContentKind, ContentTypeSchema, Link, LinkError, LinkLocalizer, LocalizerConfig,
        LocalizerContext, PermissionMap, PermissionRecord, add_locale_to_links_search,
    };
}

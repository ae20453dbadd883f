//! Locale-aware Navigation Links for cms-i18n
//!
//! The content manager lists collection types and single types in its side
//! navigation. For content types with i18n enabled, each link must open the
//! list view in a locale the user is allowed to read:
//!
//! - **Rewrite**: add `plugins[i18n][locale]=<code>` to the link's query string
//! - **Hide**: flag the link `isDisplayed: false` when no locale is permitted
//! - **Pass through**: leave links of non-localized content types untouched
//!
//! Locale selection is delegated to a [`PermissionResolver`] and query
//! strings to a [`QueryCodec`], both replaceable.
//!
//! # Quick Start
//!
//! ```rust
//! use cms_i18n_links::{add_locale_to_links_search, ContentTypeSchema, Link, PermissionMap};
//! use cms_i18n_locales::Locale;
//!
//! let links = vec![Link::new("/content-manager/collectionType/api::tag.tag")];
//! let schemas = vec![ContentTypeSchema::new("api::tag.tag")];
//! let locales = vec![Locale::new(1, "English").with_code("en").default_locale()];
//!
//! let localized = add_locale_to_links_search(
//!     &links,
//!     "collectionType",
//!     &schemas,
//!     None,
//!     &locales,
//!     &PermissionMap::new(),
//! )?;
//!
//! // api::tag.tag is not localized
//! assert_eq!(localized, links);
//! # Ok::<(), cms_i18n_links::LinkError>(())
//! ```

mod config;
mod error;
mod link;
mod localizer;
mod permission;
mod query;
mod schema;

pub use config::{CREATE_ACTION, LocalizerConfig, PLUGINS_PARAM, READ_ACTION};
pub use error::LinkError;
pub use link::{ContentKind, Link, content_type_uid};
pub use localizer::{LinkLocalizer, LocalizerContext, add_locale_to_links_search};
pub use permission::{
    ContentTypePermissions, PermissionMap, PermissionProperties, PermissionRecord,
    PermissionResolver, PreferredOrDefaultResolver, is_locale_permitted, restrict_permissions,
};
pub use query::{MAX_DEPTH, QsCodec, QueryCodec, QueryParams};
pub use schema::{ContentTypeSchema, I18nOptions, PluginOptions, find_schema};

/// Result type for link localization
pub type Result<T> = std::result::Result<T, LinkError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ContentKind, ContentTypeSchema, Link, LinkError, LinkLocalizer, LocalizerConfig,
        LocalizerContext, PermissionMap, PermissionRecord, PermissionResolver, QueryCodec,
        Result, add_locale_to_links_search,
    };
}

//! Locale-aware rewriting of content-manager links

use crate::config::{LocalizerConfig, PLUGINS_PARAM};
use crate::link::{ContentKind, Link, content_type_uid};
use crate::permission::{
    ContentTypePermissions, PermissionMap, PermissionResolver, PreferredOrDefaultResolver,
    restrict_permissions,
};
use crate::query::{QsCodec, QueryCodec, QueryParams};
use crate::schema::{ContentTypeSchema, find_schema};
use crate::Result;
use cms_i18n_locales::{Locale, LocaleState, PreferredLocale};
use cms_i18n_log::{debug, trace};
use serde_json::{Map, Value};

/// Everything a link list is localized against.
#[derive(Debug, Clone)]
pub struct LocalizerContext<'a> {
    pub kind: ContentKind,
    pub schemas: &'a [ContentTypeSchema],
    pub preferred_locale: Option<&'a PreferredLocale>,
    pub locales: &'a [Locale],
    pub permissions: &'a PermissionMap,
}

impl<'a> LocalizerContext<'a> {
    pub fn new(
        kind: ContentKind,
        schemas: &'a [ContentTypeSchema],
        locales: &'a [Locale],
        permissions: &'a PermissionMap,
    ) -> Self {
        Self {
            kind,
            schemas,
            preferred_locale: None,
            locales,
            permissions,
        }
    }

    /// Context taking locales and the preferred locale from a store snapshot.
    pub fn from_state(
        kind: ContentKind,
        schemas: &'a [ContentTypeSchema],
        state: &'a LocaleState,
        permissions: &'a PermissionMap,
    ) -> Self {
        Self {
            kind,
            schemas,
            preferred_locale: state.preferred_locale.as_ref(),
            locales: &state.locales,
            permissions,
        }
    }

    pub fn with_preferred_locale(mut self, preferred: Option<&'a PreferredLocale>) -> Self {
        self.preferred_locale = preferred;
        self
    }
}

/// Adds the locale parameter to links of localized content types and hides
/// the ones the user cannot open in any locale.
///
/// # Example
///
/// ```
/// use cms_i18n_links::{
///     ContentKind, ContentTypeSchema, Link, LinkLocalizer, LocalizerContext, PermissionMap,
///     PermissionRecord, READ_ACTION,
/// };
/// use cms_i18n_locales::Locale;
///
/// let uid = "api::article.article";
/// let schemas = vec![ContentTypeSchema::with_localized(uid, true)];
/// let locales = vec![Locale::new(1, "English").with_code("en").default_locale()];
///
/// let mut permissions = PermissionMap::new();
/// permissions.entry(uid.to_string()).or_default().insert(
///     READ_ACTION.to_string(),
///     vec![PermissionRecord::new(READ_ACTION).with_locales(["en"])],
/// );
///
/// let links = vec![Link::new(format!("/content-manager/singleType/{uid}"))];
/// let context = LocalizerContext::new(ContentKind::SingleType, &schemas, &locales, &permissions);
///
/// let localized = LinkLocalizer::with_defaults().localize(&links, &context).unwrap();
/// assert_eq!(localized[0].search.as_deref(), Some("plugins[i18n][locale]=en"));
/// ```
#[derive(Debug, Clone)]
pub struct LinkLocalizer<R = PreferredOrDefaultResolver, Q = QsCodec> {
    config: LocalizerConfig,
    resolver: R,
    codec: Q,
}

impl LinkLocalizer {
    /// Bundled resolver, codec and configuration.
    pub fn with_defaults() -> Self {
        Self::with_config(LocalizerConfig::default())
    }

    /// Bundled resolver and codec with a custom configuration.
    pub fn with_config(config: LocalizerConfig) -> Self {
        Self::new(config, PreferredOrDefaultResolver, QsCodec)
    }
}

impl Default for LinkLocalizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<R, Q> LinkLocalizer<R, Q>
where
    R: PermissionResolver,
    Q: QueryCodec,
{
    pub fn new(config: LocalizerConfig, resolver: R, codec: Q) -> Self {
        Self {
            config,
            resolver,
            codec,
        }
    }

    pub fn config(&self) -> &LocalizerConfig {
        &self.config
    }

    /// Localize every link; output has the input's length and order.
    pub fn localize(&self, links: &[Link], context: &LocalizerContext<'_>) -> Result<Vec<Link>> {
        links
            .iter()
            .map(|link| self.localize_link(link, context))
            .collect()
    }

    /// Localize a single link.
    pub fn localize_link(&self, link: &Link, context: &LocalizerContext<'_>) -> Result<Link> {
        let uid = content_type_uid(&link.to, &context.kind)?;

        let localized = find_schema(context.schemas, uid)
            .map(ContentTypeSchema::is_localized)
            .unwrap_or(false);
        if !localized {
            trace!(target: "cms_i18n::links", "{} is not localized, link kept", uid);
            return Ok(link.clone());
        }

        let empty = ContentTypePermissions::new();
        let permissions = context.permissions.get(uid).unwrap_or(&empty);
        let required = self.config.required_actions(&context.kind);
        let restricted = restrict_permissions(permissions, &required);

        let Some(locale) =
            self.resolver
                .resolve(context.preferred_locale, &restricted, context.locales)
        else {
            debug!(target: "cms_i18n::links", "No permitted locale for {}, hiding link", uid);
            return Ok(Link {
                is_displayed: Some(false),
                ..link.clone()
            });
        };

        let search = self.search_with_locale(link.search.as_deref(), &locale)?;
        trace!(target: "cms_i18n::links", "{} -> ?{}", uid, search);

        Ok(Link {
            search: Some(search),
            ..link.clone()
        })
    }

    /// `search` with `plugins.<namespace>` replaced by `{ <param>: locale }`.
    fn search_with_locale(&self, search: Option<&str>, locale: &str) -> Result<String> {
        let mut params = match search {
            Some(search) => self.codec.parse(search)?,
            None => QueryParams::new(),
        };

        let plugins = params
            .entry(PLUGINS_PARAM)
            .or_insert_with(|| Value::Object(Map::new()));
        if !plugins.is_object() {
            *plugins = Value::Object(Map::new());
        }

        if let Value::Object(plugins) = plugins {
            let mut namespace = Map::new();
            namespace.insert(
                self.config.locale_param.clone(),
                Value::String(locale.to_string()),
            );
            plugins.insert(self.config.plugin_namespace.clone(), Value::Object(namespace));
        }

        Ok(self.codec.stringify(&params, self.config.encode_search))
    }
}

/// Localize `links` with the bundled resolver, codec and default settings.
pub fn add_locale_to_links_search(
    links: &[Link],
    kind: impl Into<ContentKind>,
    schemas: &[ContentTypeSchema],
    preferred_locale: Option<&PreferredLocale>,
    locales: &[Locale],
    permissions: &PermissionMap,
) -> Result<Vec<Link>> {
    let context = LocalizerContext::new(kind.into(), schemas, locales, permissions)
        .with_preferred_locale(preferred_locale);
    LinkLocalizer::with_defaults().localize(links, &context)
}

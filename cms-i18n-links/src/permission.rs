//! Permission records and locale resolution
//!
//! The localizer never decides on its own which locale a user may see. It
//! narrows the content type's permissions to the actions needed to open a
//! link and hands them to a [`PermissionResolver`].

use cms_i18n_locales::{Locale, PreferredLocale, default_locale};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One access-control entry for an action on a content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    #[serde(default)]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub properties: PermissionProperties,
    #[serde(default)]
    pub conditions: Vec<String>,
}

/// Restrictions carried by a permission record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionProperties {
    /// Locale codes the action is allowed for
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl PermissionRecord {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn allows_locale(&self, code: &str) -> bool {
        self.properties.locales.iter().any(|locale| locale == code)
    }
}

/// Action name to records, for one content type.
pub type ContentTypePermissions = BTreeMap<String, Vec<PermissionRecord>>;

/// Content-type UID to its permissions.
pub type PermissionMap = HashMap<String, ContentTypePermissions>;

/// Keep the records of `required` actions and empty every other action.
///
/// The result has exactly the keys of `permissions`.
pub fn restrict_permissions(
    permissions: &ContentTypePermissions,
    required: &[&str],
) -> ContentTypePermissions {
    permissions
        .iter()
        .map(|(action, records)| {
            let kept = if required.contains(&action.as_str()) {
                records.clone()
            } else {
                Vec::new()
            };
            (action.clone(), kept)
        })
        .collect()
}

/// Whether any record in `permissions` allows `code`.
pub fn is_locale_permitted(permissions: &ContentTypePermissions, code: &str) -> bool {
    permissions
        .values()
        .flatten()
        .any(|record| record.allows_locale(code))
}

/// Picks the locale a link should open with, or `None` when the user may
/// not see any.
pub trait PermissionResolver {
    fn resolve(
        &self,
        preferred: Option<&PreferredLocale>,
        permissions: &ContentTypePermissions,
        locales: &[Locale],
    ) -> Option<String>;
}

impl<F> PermissionResolver for F
where
    F: Fn(Option<&PreferredLocale>, &ContentTypePermissions, &[Locale]) -> Option<String>,
{
    fn resolve(
        &self,
        preferred: Option<&PreferredLocale>,
        permissions: &ContentTypePermissions,
        locales: &[Locale],
    ) -> Option<String> {
        self(preferred, permissions, locales)
    }
}

/// Preferred locale if permitted, else the collection default if
/// permitted, else nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferredOrDefaultResolver;

impl PermissionResolver for PreferredOrDefaultResolver {
    fn resolve(
        &self,
        preferred: Option<&PreferredLocale>,
        permissions: &ContentTypePermissions,
        locales: &[Locale],
    ) -> Option<String> {
        if let Some(preferred) = preferred {
            if is_locale_permitted(permissions, &preferred.code) {
                return Some(preferred.code.clone());
            }
        }

        default_locale(locales)
            .and_then(Locale::code)
            .filter(|code| is_locale_permitted(permissions, code))
            .map(str::to_string)
    }
}

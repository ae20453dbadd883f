//! Content-type schemas, as far as localization is concerned

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema of a content type. Fields other than `uid` and
/// `pluginOptions` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeSchema {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_options: Option<PluginOptions>,
}

/// Per-plugin options attached to a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18nOptions>,
    /// Options of other plugins
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nOptions {
    #[serde(default)]
    pub localized: bool,
}

impl ContentTypeSchema {
    /// Schema without plugin options.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            plugin_options: None,
        }
    }

    /// Schema with i18n explicitly enabled or disabled.
    pub fn with_localized(uid: impl Into<String>, localized: bool) -> Self {
        Self {
            uid: uid.into(),
            plugin_options: Some(PluginOptions {
                i18n: Some(I18nOptions { localized }),
                other: Map::new(),
            }),
        }
    }

    /// `pluginOptions.i18n.localized`, `false` when any level is missing.
    pub fn is_localized(&self) -> bool {
        self.plugin_options
            .as_ref()
            .and_then(|options| options.i18n)
            .map(|i18n| i18n.localized)
            .unwrap_or(false)
    }
}

/// Schema with the given UID.
pub fn find_schema<'a>(schemas: &'a [ContentTypeSchema], uid: &str) -> Option<&'a ContentTypeSchema> {
    schemas.iter().find(|schema| schema.uid == uid)
}

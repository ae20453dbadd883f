//! Localizer configuration

use crate::link::ContentKind;
use crate::{LinkError, Result};
use serde::{Deserialize, Serialize};

/// Permission action needed to browse entries.
pub const READ_ACTION: &str = "plugin::content-manager.explorer.read";

/// Permission action needed to create entries.
pub const CREATE_ACTION: &str = "plugin::content-manager.explorer.create";

/// Top-level query parameter holding per-plugin parameters.
pub const PLUGINS_PARAM: &str = "plugins";

/// Settings for [`LinkLocalizer`](crate::LinkLocalizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizerConfig {
    /// Read action name
    pub read_action: String,
    /// Create action name, also required for collection types
    pub create_action: String,
    /// Key under `plugins` that receives the locale
    pub plugin_namespace: String,
    /// Key under the namespace holding the locale code
    pub locale_param: String,
    /// Percent-encode the rewritten query string
    pub encode_search: bool,
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            read_action: READ_ACTION.to_string(),
            create_action: CREATE_ACTION.to_string(),
            plugin_namespace: "i18n".to_string(),
            locale_param: "locale".to_string(),
            encode_search: false,
        }
    }
}

impl LocalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_action(mut self, action: impl Into<String>) -> Self {
        self.read_action = action.into();
        self
    }

    pub fn create_action(mut self, action: impl Into<String>) -> Self {
        self.create_action = action.into();
        self
    }

    pub fn plugin_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.plugin_namespace = namespace.into();
        self
    }

    pub fn locale_param(mut self, param: impl Into<String>) -> Self {
        self.locale_param = param.into();
        self
    }

    pub fn encode_search(mut self, encode: bool) -> Self {
        self.encode_search = encode;
        self
    }

    /// Actions a user needs to open a link of this kind.
    pub fn required_actions(&self, kind: &ContentKind) -> Vec<&str> {
        match kind {
            ContentKind::CollectionType => vec![self.read_action.as_str(), self.create_action.as_str()],
            _ => vec![self.read_action.as_str()],
        }
    }

    /// Load from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let names = [
            ("read_action", &self.read_action),
            ("create_action", &self.create_action),
            ("plugin_namespace", &self.plugin_namespace),
            ("locale_param", &self.locale_param),
        ];

        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(LinkError::Config(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

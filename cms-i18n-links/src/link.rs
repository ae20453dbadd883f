//! Navigation links and content kinds

use crate::{LinkError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A content-manager navigation link.
///
/// Only `to`, `search` and `isDisplayed` are interpreted; every other field
/// the host puts on the link is carried through untouched. An explicit
/// `"search": null` is written back as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireLink", into = "WireLink")]
pub struct Link {
    /// Route path, e.g. `/content-manager/collectionType/api::article.article`
    pub to: String,
    /// Query string without the leading `?`
    pub search: Option<String>,
    /// `Some(false)` hides the link
    pub is_displayed: Option<bool>,
    /// Other display fields (title, uid, permissions, ...)
    pub extra: Map<String, Value>,
    pub(crate) null_search: bool,
}

/// JSON shape of a [`Link`]; `search` distinguishes absent from `null`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLink {
    to: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    search: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_displayed: Option<bool>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<WireLink> for Link {
    fn from(wire: WireLink) -> Self {
        Self {
            to: wire.to,
            null_search: matches!(wire.search, Some(None)),
            search: wire.search.flatten(),
            is_displayed: wire.is_displayed,
            extra: wire.extra,
        }
    }
}

impl From<Link> for WireLink {
    fn from(link: Link) -> Self {
        let search = match link.search {
            Some(search) => Some(Some(search)),
            None if link.null_search => Some(None),
            None => None,
        };

        Self {
            to: link.to,
            search,
            is_displayed: link.is_displayed,
            extra: link.extra,
        }
    }
}

impl Link {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            search: None,
            is_displayed: None,
            extra: Map::new(),
            null_search: false,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Attach an opaque display field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Hidden only when explicitly flagged.
    pub fn is_visible(&self) -> bool {
        self.is_displayed != Some(false)
    }

    pub fn from_json(json: &str) -> Result<Vec<Link>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Kind of content type a link list points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKind {
    CollectionType,
    SingleType,
    Other(String),
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::CollectionType => "collectionType",
            ContentKind::SingleType => "singleType",
            ContentKind::Other(kind) => kind,
        }
    }

    /// Path segment separating the route prefix from the content-type UID.
    pub fn marker(&self) -> String {
        format!("/{}/", self.as_str())
    }
}

impl From<&str> for ContentKind {
    fn from(kind: &str) -> Self {
        match kind {
            "collectionType" => ContentKind::CollectionType,
            "singleType" => ContentKind::SingleType,
            other => ContentKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content-type UID named by a link target.
///
/// Takes the segment between the first `/{kind}/` marker and the next one
/// (or the end of the path).
///
/// ```
/// use cms_i18n_links::{ContentKind, content_type_uid};
///
/// let uid = content_type_uid(
///     "/content-manager/collectionType/api::article.article",
///     &ContentKind::CollectionType,
/// )
/// .unwrap();
/// assert_eq!(uid, "api::article.article");
/// ```
pub fn content_type_uid<'a>(to: &'a str, kind: &ContentKind) -> Result<&'a str> {
    let marker = kind.marker();
    to.split(marker.as_str())
        .nth(1)
        .ok_or_else(|| LinkError::MissingKindMarker {
            to: to.to_string(),
            marker,
        })
}

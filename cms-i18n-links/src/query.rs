//! Query strings with bracket-nested keys
//!
//! Links carry their list-view parameters as `qs`-style query strings:
//! `page=1&plugins[i18n][locale]=fr&filters[$and][0][name]=x`. The
//! [`QueryCodec`] trait is the seam; [`QsCodec`] is the bundled
//! implementation.

use crate::Result;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Bracket segments split off a key; anything deeper stays one literal
/// segment.
pub const MAX_DEPTH: usize = 5;

/// Decoded query string. Values are strings, nested objects or arrays.
pub type QueryParams = Map<String, Value>;

/// Parse and serialize link query strings.
pub trait QueryCodec {
    /// Decode `query` (a leading `?` is allowed). Implementations report
    /// undecodable input as [`LinkError::QueryParse`](crate::LinkError::QueryParse).
    fn parse(&self, query: &str) -> Result<QueryParams>;

    /// Encode `params`. Keys and values are percent-encoded only when
    /// `encode` is set.
    fn stringify(&self, params: &QueryParams, encode: bool) -> String;
}

/// Bracket-notation codec.
///
/// - `a[b][c]=v` nests objects
/// - `a[]=v` and repeated keys build arrays
/// - arrays are written back with indices (`a[0]=v`)
///
/// ```
/// use cms_i18n_links::{QsCodec, QueryCodec};
///
/// let codec = QsCodec;
/// let params = codec.parse("plugins[foo]=bar&page=2").unwrap();
/// assert_eq!(params["plugins"]["foo"], "bar");
/// assert_eq!(codec.stringify(&params, false), "plugins[foo]=bar&page=2");
/// assert_eq!(codec.stringify(&params, true), "plugins%5Bfoo%5D=bar&page=2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QsCodec;

impl QueryCodec for QsCodec {
    fn parse(&self, query: &str) -> Result<QueryParams> {
        let query = query.strip_prefix('?').unwrap_or(query);
        if query.is_empty() {
            return Ok(QueryParams::new());
        }

        let mut root = Value::Object(QueryParams::new());
        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            if key.is_empty() {
                continue;
            }
            assign(&mut root, &split_key(&key), decode_component(value));
        }

        match root {
            Value::Object(params) => Ok(params),
            _ => Ok(QueryParams::new()),
        }
    }

    fn stringify(&self, params: &QueryParams, encode: bool) -> String {
        let mut pairs = Vec::new();
        for (key, value) in params {
            flatten(key.clone(), value, &mut pairs);
        }

        pairs
            .into_iter()
            .map(|(key, value)| {
                if encode {
                    format!("{}={}", urlencoding::encode(&key), urlencoding::encode(&value))
                } else {
                    format!("{key}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// `+` as space, then percent-decoding. Escapes that do not decode to
/// UTF-8 leave the component as written.
fn decode_component(raw: &str) -> String {
    let plain = raw.replace('+', " ");
    let decoded = urlencoding::decode(&plain).map(Cow::into_owned);
    decoded.unwrap_or(plain)
}

/// `a[b][]` -> `["a", "b", ""]`. Keys with a leading or unbalanced bracket
/// are kept whole, and segments past [`MAX_DEPTH`] are kept as one.
fn split_key(key: &str) -> Vec<&str> {
    let open = match key.find('[') {
        Some(0) | None => return vec![key],
        Some(open) => open,
    };

    let mut parts = vec![&key[..open]];
    let mut rest = &key[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        if parts.len() > MAX_DEPTH {
            parts.push(rest);
            return parts;
        }
        match inner.find(']') {
            Some(close) => {
                parts.push(&inner[..close]);
                rest = &inner[close + 1..];
            }
            None => return vec![key],
        }
    }

    if rest.is_empty() { parts } else { vec![key] }
}

fn assign(slot: &mut Value, path: &[&str], value: String) {
    let Some((segment, rest)) = path.split_first() else {
        push_leaf(slot, value);
        return;
    };

    if segment.is_empty() {
        let mut child = Value::Null;
        assign(&mut child, rest, value);
        push_child(slot, child);
        return;
    }

    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(map) = slot {
        let child = map.entry(segment.to_string()).or_insert(Value::Null);
        assign(child, rest, value);
    }
}

fn push_leaf(slot: &mut Value, value: String) {
    match slot {
        Value::Null => *slot = Value::String(value),
        _ => push_child(slot, Value::String(value)),
    }
}

/// Append to an array slot, promoting a scalar or object into an array.
fn push_child(slot: &mut Value, child: Value) {
    match slot {
        Value::Array(items) => items.push(child),
        Value::Null => *slot = Value::Array(vec![child]),
        other => {
            let previous = other.take();
            *other = Value::Array(vec![previous, child]);
        }
    }
}

fn flatten(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten(format!("{prefix}[{key}]"), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(format!("{prefix}[{index}]"), child, out);
            }
        }
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Null => out.push((prefix, String::new())),
        Value::Bool(b) => out.push((prefix, b.to_string())),
        Value::Number(n) => out.push((prefix, n.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(query: &str) -> Value {
        Value::Object(QsCodec.parse(query).unwrap())
    }

    #[test]
    fn test_split_key() {
        assert_eq!(split_key("page"), vec!["page"]);
        assert_eq!(split_key("a[b][c]"), vec!["a", "b", "c"]);
        assert_eq!(split_key("a[]"), vec!["a", ""]);
        assert_eq!(split_key("[a]"), vec!["[a]"]);
        assert_eq!(split_key("a[b"), vec!["a[b"]);
        assert_eq!(split_key("a[b]c"), vec!["a[b]c"]);
    }

    #[test]
    fn test_split_key_depth_limit() {
        assert_eq!(
            split_key("a[b][c][d][e][f][g][h]"),
            vec!["a", "b", "c", "d", "e", "f", "[g][h]"]
        );
        assert_eq!(split_key("a[b][c][d][e][f]").len(), MAX_DEPTH + 1);
    }

    #[test]
    fn test_parse_deeply_nested_key_is_bounded() {
        let query = format!("f{}=1&page=2", "[x]".repeat(20_000));
        let params = QsCodec.parse(&query).unwrap();

        let mut depth = 0;
        let mut node = &params["f"];
        while let Value::Object(map) = node {
            depth += 1;
            node = map.values().next().unwrap();
        }
        assert_eq!(depth, MAX_DEPTH + 1);
        assert_eq!(node, &json!("1"));
        assert_eq!(params["page"], "2");

        let written = QsCodec.stringify(&params, false);
        assert!(written.starts_with("f[x][x][x][x][x][[x][x]"));
        assert!(written.ends_with("=1&page=2"));
    }

    #[test]
    fn test_parse_keeps_undecodable_escapes() {
        let params = QsCodec.parse("q=%FF&plugins[foo]=bar&r=50%+off").unwrap();
        assert_eq!(params["q"], "%FF");
        assert_eq!(params["r"], "50% off");
        assert_eq!(
            QsCodec.stringify(&params, false),
            "q=%FF&plugins[foo]=bar&r=50% off"
        );
    }

    #[test]
    fn test_parse_nested() {
        assert_eq!(
            parse("page=1&pageSize=10&plugins[i18n][locale]=en&sort=name:ASC"),
            json!({
                "page": "1",
                "pageSize": "10",
                "plugins": { "i18n": { "locale": "en" } },
                "sort": "name:ASC"
            })
        );
    }

    #[test]
    fn test_parse_ignores_question_mark_and_decodes() {
        assert_eq!(
            parse("?plugins%5Bfoo%5D=bar+baz&q=caf%C3%A9"),
            json!({ "plugins": { "foo": "bar baz" }, "q": "café" })
        );
    }

    #[test]
    fn test_parse_arrays() {
        assert_eq!(parse("ids[]=1&ids[]=2"), json!({ "ids": ["1", "2"] }));
        assert_eq!(parse("a=1&a=2&a=3"), json!({ "a": ["1", "2", "3"] }));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), json!({}));
        assert_eq!(parse("?"), json!({}));
        assert_eq!(parse("flag"), json!({ "flag": "" }));
    }

    #[test]
    fn test_stringify_preserves_insertion_order() {
        let params = QsCodec
            .parse("sort=name:ASC&plugins[foo]=bar&page=1")
            .unwrap();
        assert_eq!(
            QsCodec.stringify(&params, false),
            "sort=name:ASC&plugins[foo]=bar&page=1"
        );
    }

    #[test]
    fn test_stringify_arrays_with_indices() {
        let params = QsCodec.parse("filters[$and][]=x&filters[$and][]=y").unwrap();
        assert_eq!(
            QsCodec.stringify(&params, false),
            "filters[$and][0]=x&filters[$and][1]=y"
        );
    }

    #[test]
    fn test_stringify_encoded() {
        let mut params = QueryParams::new();
        params.insert("plugins".into(), json!({ "i18n": { "locale": "fr-FR" } }));
        params.insert("q".into(), json!("a b"));

        assert_eq!(
            QsCodec.stringify(&params, true),
            "plugins%5Bi18n%5D%5Blocale%5D=fr-FR&q=a%20b"
        );
    }
}

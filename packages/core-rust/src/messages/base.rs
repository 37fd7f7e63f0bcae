//! Header store shared by every request kind.

use std::collections::HashMap;

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::traits::ForwardHttpHeaders;

/// Key prefix under which forwarded HTTP headers are stored.
///
/// Plugin requests carry protocol headers (auth tokens, feature toggles) in
/// the same map, so forwarded HTTP headers are namespaced to avoid clashes.
pub const HTTP_HEADER_PREFIX: &str = "http_";

/// String key/value headers attached to an outbound plugin request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginHeaders {
    entries: HashMap<String, String>,
}

impl PluginHeaders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup by exact key, including the `http_` prefix if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Raw insert by exact key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Stored key of a forwarded header, matched case-insensitively.
    fn find_http_key(&self, name: &str) -> Option<String> {
        self.entries
            .keys()
            .find(|k| {
                k.strip_prefix(HTTP_HEADER_PREFIX)
                    .is_some_and(|rest| rest.eq_ignore_ascii_case(name))
            })
            .cloned()
    }
}

impl ForwardHttpHeaders for PluginHeaders {
    fn set_http_header(&mut self, name: &str, value: &str) {
        if let Some(existing) = self.find_http_key(name) {
            self.entries.remove(&existing);
        }
        self.entries
            .insert(format!("{HTTP_HEADER_PREFIX}{name}"), value.to_string());
    }

    fn delete_http_header(&mut self, name: &str) {
        if let Some(existing) = self.find_http_key(name) {
            self.entries.remove(&existing);
        }
    }

    fn get_http_header(&self, name: &str) -> Option<&str> {
        self.find_http_key(name)
            .and_then(|key| self.entries.get(&key))
            .map(String::as_str)
    }

    fn get_http_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (key, value) in &self.entries {
            let Some(name) = key.strip_prefix(HTTP_HEADER_PREFIX) else {
                continue;
            };
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                map.append(name, value);
            }
        }
        map
    }
}

//! Resource call request and streamed response.

use std::collections::HashMap;

use bytes::Bytes;

use super::base::PluginHeaders;
use crate::traits::{ForwardHttpHeaders, ForwardingTarget};
use crate::types::PluginContext;

/// An HTTP-like call to a plugin resource endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallResourceRequest {
    pub plugin_context: PluginContext,
    pub headers: PluginHeaders,
    /// Resource path relative to the plugin root.
    pub path: String,
    pub method: String,
    /// Full URL of the original request.
    pub url: String,
    pub body: Bytes,
}

impl CallResourceRequest {
    #[must_use]
    pub fn new(plugin_context: PluginContext, method: &str, path: &str) -> Self {
        Self {
            plugin_context,
            headers: PluginHeaders::new(),
            path: path.to_string(),
            method: method.to_string(),
            url: String::new(),
            body: Bytes::new(),
        }
    }
}

impl ForwardHttpHeaders for CallResourceRequest {
    fn set_http_header(&mut self, name: &str, value: &str) {
        self.headers.set_http_header(name, value);
    }

    fn delete_http_header(&mut self, name: &str) {
        self.headers.delete_http_header(name);
    }

    fn get_http_header(&self, name: &str) -> Option<&str> {
        self.headers.get_http_header(name)
    }

    fn get_http_headers(&self) -> http::HeaderMap {
        self.headers.get_http_headers()
    }
}

impl ForwardingTarget for CallResourceRequest {
    fn forwarding_parts(&mut self) -> (&PluginContext, Option<&mut dyn ForwardHttpHeaders>) {
        (&self.plugin_context, Some(&mut self.headers))
    }
}

/// One chunk of a streamed resource response.
///
/// The first chunk carries the status and headers; subsequent chunks may
/// carry only a body.
#[derive(Debug, Clone, PartialEq)]
pub struct CallResourceResponse {
    pub status: u16,
    pub headers: HashMap<String, Vec<String>>,
    pub body: Bytes,
}

impl CallResourceResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }
}

//! Health check request and result.

use serde::{Deserialize, Serialize};

use super::base::PluginHeaders;
use crate::traits::{ForwardHttpHeaders, ForwardingTarget};
use crate::types::PluginContext;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckHealthRequest {
    pub plugin_context: PluginContext,
    pub headers: PluginHeaders,
}

impl CheckHealthRequest {
    #[must_use]
    pub fn new(plugin_context: PluginContext) -> Self {
        Self {
            plugin_context,
            headers: PluginHeaders::new(),
        }
    }
}

impl ForwardHttpHeaders for CheckHealthRequest {
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

impl ForwardingTarget for CheckHealthRequest {
    fn forwarding_parts(&mut self) -> (&PluginContext, Option<&mut dyn ForwardHttpHeaders>) {
        (&self.plugin_context, Some(&mut self.headers))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    #[default]
    Unknown,
    Ok,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckHealthResult {
    pub status: HealthStatus,
    pub message: String,
    /// Plugin-defined diagnostic details.
    #[serde(default)]
    pub json_details: serde_json::Value,
}

impl CheckHealthResult {
    #[must_use]
    pub fn ok(message: &str) -> Self {
        Self {
            status: HealthStatus::Ok,
            message: message.to_string(),
            json_details: serde_json::Value::Null,
        }
    }
}

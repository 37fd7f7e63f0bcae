//! Data query request and response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::base::PluginHeaders;
use crate::traits::{ForwardHttpHeaders, ForwardingTarget};
use crate::types::PluginContext;

/// A single query within a [`QueryDataRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuery {
    /// Identifier linking the query to its entry in [`QueryDataResponse`].
    pub ref_id: String,
    #[serde(default)]
    pub query_type: String,
    #[serde(default)]
    pub max_data_points: i64,
    #[serde(default)]
    pub interval_ms: i64,
    /// Plugin-specific query model.
    #[serde(default)]
    pub json: serde_json::Value,
}

impl DataQuery {
    #[must_use]
    pub fn new(ref_id: &str) -> Self {
        Self {
            ref_id: ref_id.to_string(),
            query_type: String::new(),
            max_data_points: 0,
            interval_ms: 0,
            json: serde_json::Value::Null,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryDataRequest {
    pub plugin_context: PluginContext,
    pub headers: PluginHeaders,
    pub queries: Vec<DataQuery>,
}

impl QueryDataRequest {
    #[must_use]
    pub fn new(plugin_context: PluginContext, queries: Vec<DataQuery>) -> Self {
        Self {
            plugin_context,
            headers: PluginHeaders::new(),
            queries,
        }
    }
}

impl ForwardHttpHeaders for QueryDataRequest {
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

impl ForwardingTarget for QueryDataRequest {
    fn forwarding_parts(&mut self) -> (&PluginContext, Option<&mut dyn ForwardHttpHeaders>) {
        (&self.plugin_context, Some(&mut self.headers))
    }
}

/// Result of a single query, keyed by `ref_id` in [`QueryDataResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataResponse {
    /// Data frames in plugin-defined JSON encoding.
    #[serde(default)]
    pub frames: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDataResponse {
    pub responses: BTreeMap<String, DataResponse>,
}

//! Call-scoped data source projection and its header-forwarding policy.

use std::time::SystemTime;

use plugbay_core::DataSourceInstanceSettings;
use serde_json::Value;

/// Configuration key listing the HTTP headers to forward to the plugin.
pub const FORWARD_HEADERS_KEY: &str = "forwardHeaders";

/// Lightweight view of a data source built from the settings carried by a
/// plugin call. Created per call and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    id: i64,
    org_id: i64,
    json_data: Value,
    updated: SystemTime,
}

impl DataSource {
    /// Parse the raw settings of a data source instance.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `json_data` is not valid JSON, including
    /// when it is empty.
    pub fn from_instance_settings(
        settings: &DataSourceInstanceSettings,
        org_id: i64,
    ) -> Result<Self, serde_json::Error> {
        let json_data = serde_json::from_slice(&settings.json_data)?;
        Ok(Self {
            id: settings.id,
            org_id,
            json_data,
            updated: settings.updated,
        })
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn org_id(&self) -> i64 {
        self.org_id
    }

    #[must_use]
    pub fn json_data(&self) -> &Value {
        &self.json_data
    }

    #[must_use]
    pub fn updated(&self) -> SystemTime {
        self.updated
    }

    /// Header names configured for forwarding, in configured order and case.
    ///
    /// `null` elements read as empty names. Anything other than an array of
    /// strings and nulls yields an empty list.
    #[must_use]
    pub fn forward_headers(&self) -> Vec<String> {
        let Some(Value::Array(items)) = self.json_data.get(FORWARD_HEADERS_KEY) else {
            return Vec::new();
        };
        items
            .iter()
            .map(|item| match item {
                Value::Null => Some(String::new()),
                other => other.as_str().map(str::to_string),
            })
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }
}

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Authenticated principal attached to an inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier for the authenticated entity.
    pub id: String,
    /// Organization the principal is signed in to.
    pub org_id: i64,
    /// Login name, used for audit logging.
    pub login: String,
    /// Roles assigned to this principal for authorization checks.
    pub roles: Vec<String>,
}

/// Settings of the data source instance a plugin call targets.
///
/// `json_data` is the raw JSON configuration blob exactly as stored; it is
/// parsed lazily by whoever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSourceInstanceSettings {
    pub id: i64,
    pub uid: String,
    pub name: String,
    /// Raw JSON configuration.
    pub json_data: Vec<u8>,
    /// Last time the settings were modified.
    pub updated: SystemTime,
}

impl DataSourceInstanceSettings {
    /// Settings with the given id and raw JSON configuration.
    #[must_use]
    pub fn new(id: i64, json_data: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            uid: String::new(),
            name: String::new(),
            json_data: json_data.into(),
            updated: SystemTime::UNIX_EPOCH,
        }
    }
}

/// Identifies the plugin instance (and optional data source) a call targets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PluginContext {
    pub org_id: i64,
    pub plugin_id: String,
    /// Present only for calls that target a data source instance.
    pub data_source_instance_settings: Option<DataSourceInstanceSettings>,
}

impl PluginContext {
    #[must_use]
    pub fn for_data_source(org_id: i64, plugin_id: &str, settings: DataSourceInstanceSettings) -> Self {
        Self {
            org_id,
            plugin_id: plugin_id.to_string(),
            data_source_instance_settings: Some(settings),
        }
    }
}

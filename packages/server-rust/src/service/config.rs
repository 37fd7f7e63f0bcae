use serde::Deserialize;

/// Configuration for the plugin client middleware pipeline.
///
/// Controls which middlewares wrap plugin clients and how diagnostics are
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Forward configured inbound HTTP headers to data source plugins.
    pub forward_headers_enabled: bool,
    /// Record per-call timing and outcome spans.
    pub metrics_enabled: bool,
    pub log: LogConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            forward_headers_enabled: true,
            metrics_enabled: true,
            log: LogConfig::default(),
        }
    }
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: "info".to_string(),
        }
    }
}

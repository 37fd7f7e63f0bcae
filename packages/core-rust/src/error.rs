/// Errors returned by plugin clients.
///
/// Middleware propagates these verbatim; they originate in the innermost
/// client or in the response sender.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("plugin not found: {plugin_id}")]
    PluginNotFound { plugin_id: String },
    #[error("plugin unavailable: {plugin_id}")]
    PluginUnavailable { plugin_id: String },
    #[error("request is missing")]
    MissingRequest,
    #[error("call cancelled")]
    Cancelled,
    #[error("resource response receiver closed")]
    SenderClosed,
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

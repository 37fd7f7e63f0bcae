//! Metrics middleware for plugin calls.
//!
//! Records call duration and outcome per endpoint using `tracing` spans,
//! not a full metrics crate.

use std::future::Future;
use std::time::Instant;

use async_trait::async_trait;
use plugbay_core::{
    CallContext, CallResourceRequest, CallResourceResponseSender, CheckHealthRequest,
    CheckHealthResult, PluginClient, PluginError, QueryDataRequest, QueryDataResponse,
};
use tower::Layer;
use tracing::{info_span, Instrument};

/// Endpoint names recorded on the `plugin_call` span.
pub mod endpoints {
    pub const QUERY_DATA: &str = "queryData";
    pub const CALL_RESOURCE: &str = "callResource";
    pub const CHECK_HEALTH: &str = "checkHealth";
}

// ---------------------------------------------------------------------------
// MetricsLayer
// ---------------------------------------------------------------------------

/// Layer that instruments plugin calls with timing and outcome via `tracing` spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsLayer;

impl<S> Layer<S> for MetricsLayer {
    type Service = MetricsMiddleware<S>;

    fn layer(&self, next: S) -> Self::Service {
        MetricsMiddleware { next }
    }
}

// ---------------------------------------------------------------------------
// MetricsMiddleware
// ---------------------------------------------------------------------------

/// Plugin client wrapper that records call duration and outcome in tracing spans.
#[derive(Debug, Clone)]
pub struct MetricsMiddleware<S> {
    next: S,
}

fn outcome<T>(result: &Result<T, PluginError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(PluginError::Cancelled) => "cancelled",
        Err(_) => "error",
    }
}

async fn instrumented<T, F>(endpoint: &'static str, plugin_id: String, fut: F) -> Result<T, PluginError>
where
    F: Future<Output = Result<T, PluginError>>,
{
    let span = info_span!(
        "plugin_call",
        endpoint = endpoint,
        plugin_id = %plugin_id,
        duration_ms = tracing::field::Empty,
        outcome = tracing::field::Empty,
    );

    async move {
        let start = Instant::now();
        let result = fut.await;

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;
        let outcome = outcome(&result);

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::Span::current().record("outcome", outcome);

        tracing::info!(
            endpoint = endpoint,
            plugin_id = %plugin_id,
            duration_ms = duration_ms,
            outcome = outcome,
            "plugin call complete"
        );

        result
    }
    .instrument(span)
    .await
}

#[async_trait]
impl<S: PluginClient> PluginClient for MetricsMiddleware<S> {
    async fn query_data(
        &self,
        ctx: &CallContext,
        req: Option<QueryDataRequest>,
    ) -> Result<QueryDataResponse, PluginError> {
        let id = req
            .as_ref()
            .map(|r| r.plugin_context.plugin_id.clone())
            .unwrap_or_default();
        instrumented(endpoints::QUERY_DATA, id, self.next.query_data(ctx, req)).await
    }

    async fn call_resource(
        &self,
        ctx: &CallContext,
        req: Option<CallResourceRequest>,
        sender: &dyn CallResourceResponseSender,
    ) -> Result<(), PluginError> {
        let id = req
            .as_ref()
            .map(|r| r.plugin_context.plugin_id.clone())
            .unwrap_or_default();
        instrumented(
            endpoints::CALL_RESOURCE,
            id,
            self.next.call_resource(ctx, req, sender),
        )
        .await
    }

    async fn check_health(
        &self,
        ctx: &CallContext,
        req: Option<CheckHealthRequest>,
    ) -> Result<CheckHealthResult, PluginError> {
        let id = req
            .as_ref()
            .map(|r| r.plugin_context.plugin_id.clone())
            .unwrap_or_default();
        instrumented(endpoints::CHECK_HEALTH, id, self.next.check_health(ctx, req)).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

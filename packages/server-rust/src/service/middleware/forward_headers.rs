//! Header-forwarding middleware for plugin clients.
//!
//! Copies the inbound HTTP headers a data source is configured to receive
//! (its `forwardHeaders` setting) onto the outbound plugin request. Every
//! missing precondition degrades to forwarding nothing; the wrapped call is
//! never blocked or failed by this layer.

use async_trait::async_trait;
use plugbay_core::{
    CallContext, CallResourceRequest, CallResourceResponseSender, CheckHealthRequest,
    CheckHealthResult, ForwardHttpHeaders, ForwardingTarget, PluginClient, PluginContext,
    PluginError, QueryDataRequest, QueryDataResponse,
};
use tower::Layer;
use tracing::{debug, debug_span, warn};

use crate::service::contexthandler;
use crate::service::datasource::DataSource;

/// Log target of every event emitted by this middleware.
pub const LOG_TARGET: &str = "plugbay::forward_headers";

// ---------------------------------------------------------------------------
// ForwardHeadersLayer
// ---------------------------------------------------------------------------

/// Layer that wraps a plugin client with [`ForwardHeadersMiddleware`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardHeadersLayer;

impl<S> Layer<S> for ForwardHeadersLayer {
    type Service = ForwardHeadersMiddleware<S>;

    fn layer(&self, next: S) -> Self::Service {
        ForwardHeadersMiddleware::new(next)
    }
}

// ---------------------------------------------------------------------------
// ForwardHeadersMiddleware
// ---------------------------------------------------------------------------

/// Plugin client wrapper that forwards configured inbound headers.
#[derive(Debug, Clone)]
pub struct ForwardHeadersMiddleware<S> {
    next: S,
}

impl<S> ForwardHeadersMiddleware<S> {
    #[must_use]
    pub fn new(next: S) -> Self {
        Self { next }
    }

    /// Copy the headers configured on the targeted data source from the
    /// inbound request onto `carrier`.
    ///
    /// No-op when there is no carrier, no complete request context, or no
    /// data source settings. Malformed settings forward nothing silently; an
    /// empty header list forwards nothing and logs a warning.
    ///
    /// Events are emitted under [`LOG_TARGET`] inside a `forward_headers`
    /// span nested in whatever span the call is running in.
    pub fn forward_headers(
        &self,
        ctx: &CallContext,
        plugin_ctx: &PluginContext,
        carrier: Option<&mut dyn ForwardHttpHeaders>,
    ) {
        let _entered = debug_span!(target: LOG_TARGET, "forward_headers").entered();

        let Some(carrier) = carrier else {
            return;
        };
        let Some(inbound) = contexthandler::from_call_context(ctx).and_then(|rc| rc.headers())
        else {
            return;
        };
        let Some(settings) = plugin_ctx.data_source_instance_settings.as_ref() else {
            return;
        };

        let ds = match DataSource::from_instance_settings(settings, plugin_ctx.org_id) {
            Ok(ds) => ds,
            Err(err) => {
                debug!(
                    target: LOG_TARGET,
                    datasource_id = settings.id,
                    error = %err,
                    "datasource settings could not be parsed"
                );
                return;
            }
        };

        let headers = ds.forward_headers();
        if headers.is_empty() {
            warn!(
                target: LOG_TARGET,
                datasource_id = ds.id(),
                org_id = ds.org_id(),
                "no headers to forward"
            );
            return;
        }

        for name in &headers {
            // HeaderMap lookups are case-insensitive; `get` yields the first value.
            let Some(value) = inbound.get(name.as_str()) else {
                continue;
            };
            debug!(target: LOG_TARGET, header = %name, "forwarding header");
            carrier.set_http_header(name, &String::from_utf8_lossy(value.as_bytes()));
        }
    }

    fn forward_onto<R: ForwardingTarget>(&self, ctx: &CallContext, req: &mut R) {
        let (plugin_ctx, carrier) = req.forwarding_parts();
        self.forward_headers(ctx, plugin_ctx, carrier);
    }
}

#[async_trait]
impl<S: PluginClient> PluginClient for ForwardHeadersMiddleware<S> {
    async fn query_data(
        &self,
        ctx: &CallContext,
        req: Option<QueryDataRequest>,
    ) -> Result<QueryDataResponse, PluginError> {
        let Some(mut req) = req else {
            return self.next.query_data(ctx, None).await;
        };
        self.forward_onto(ctx, &mut req);
        self.next.query_data(ctx, Some(req)).await
    }

    async fn call_resource(
        &self,
        ctx: &CallContext,
        req: Option<CallResourceRequest>,
        sender: &dyn CallResourceResponseSender,
    ) -> Result<(), PluginError> {
        let Some(mut req) = req else {
            return self.next.call_resource(ctx, None, sender).await;
        };
        self.forward_onto(ctx, &mut req);
        self.next.call_resource(ctx, Some(req), sender).await
    }

    async fn check_health(
        &self,
        ctx: &CallContext,
        req: Option<CheckHealthRequest>,
    ) -> Result<CheckHealthResult, PluginError> {
        let Some(mut req) = req else {
            return self.next.check_health(ctx, None).await;
        };
        self.forward_onto(ctx, &mut req);
        self.next.check_health(ctx, Some(req)).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

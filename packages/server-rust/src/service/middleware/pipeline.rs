//! Pipeline composition: wraps a plugin client in an ordered middleware chain.

use std::sync::Arc;

use async_trait::async_trait;
use plugbay_core::{
    CallContext, CallResourceRequest, CallResourceResponseSender, CheckHealthRequest,
    CheckHealthResult, PluginClient, PluginError, QueryDataRequest, QueryDataResponse,
};
use tower::Layer;

use super::forward_headers::ForwardHeadersLayer;
use super::metrics::MetricsLayer;
use crate::service::config::PipelineConfig;

// ---------------------------------------------------------------------------
// ClientMiddleware
// ---------------------------------------------------------------------------

/// Factory producing a middleware instance bound to the next client in a chain.
///
/// Implemented for every [`tower::Layer`] over `Arc<dyn PluginClient>` whose
/// output is itself a plugin client, including closures wrapped with
/// [`tower::layer::layer_fn`].
pub trait ClientMiddleware: Send + Sync {
    fn create_client_middleware(&self, next: Arc<dyn PluginClient>) -> Arc<dyn PluginClient>;
}

impl<L> ClientMiddleware for L
where
    L: Layer<Arc<dyn PluginClient>> + Send + Sync,
    L::Service: PluginClient + 'static,
{
    fn create_client_middleware(&self, next: Arc<dyn PluginClient>) -> Arc<dyn PluginClient> {
        Arc::new(self.layer(next))
    }
}

// ---------------------------------------------------------------------------
// ClientDecorator
// ---------------------------------------------------------------------------

/// A plugin client wrapped in an ordered list of middlewares.
///
/// The first middleware is outermost: it sees each call first and hands it
/// on to the second, down to the wrapped client.
#[derive(Clone)]
pub struct ClientDecorator {
    client: Arc<dyn PluginClient>,
    len: usize,
}

impl ClientDecorator {
    #[must_use]
    pub fn new(client: Arc<dyn PluginClient>, middlewares: &[Arc<dyn ClientMiddleware>]) -> Self {
        let client = middlewares
            .iter()
            .rev()
            .fold(client, |next, mw| mw.create_client_middleware(next));
        Self {
            client,
            len: middlewares.len(),
        }
    }

    /// Number of middlewares in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for ClientDecorator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientDecorator")
            .field("middlewares", &self.len)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PluginClient for ClientDecorator {
    async fn query_data(
        &self,
        ctx: &CallContext,
        req: Option<QueryDataRequest>,
    ) -> Result<QueryDataResponse, PluginError> {
        self.client.query_data(ctx, req).await
    }

    async fn call_resource(
        &self,
        ctx: &CallContext,
        req: Option<CallResourceRequest>,
        sender: &dyn CallResourceResponseSender,
    ) -> Result<(), PluginError> {
        self.client.call_resource(ctx, req, sender).await
    }

    async fn check_health(
        &self,
        ctx: &CallContext,
        req: Option<CheckHealthRequest>,
    ) -> Result<CheckHealthResult, PluginError> {
        self.client.check_health(ctx, req).await
    }
}

/// Build the standard client pipeline around `client`.
///
/// Layer order (outermost to innermost):
/// 1. `MetricsLayer` -- timing and outcome, including time spent in later layers
/// 2. `ForwardHeadersLayer` -- attach configured inbound headers to the request
///
/// Disabled layers are left out of the chain.
#[must_use]
pub fn build_client_pipeline(client: Arc<dyn PluginClient>, config: &PipelineConfig) -> ClientDecorator {
    let mut middlewares: Vec<Arc<dyn ClientMiddleware>> = Vec::new();
    if config.metrics_enabled {
        middlewares.push(Arc::new(MetricsLayer));
    }
    if config.forward_headers_enabled {
        middlewares.push(Arc::new(ForwardHeadersLayer));
    }
    ClientDecorator::new(client, &middlewares)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::CallContext;
use crate::error::PluginError;
use crate::messages::{
    CallResourceRequest, CallResourceResponse, CheckHealthRequest, CheckHealthResult,
    QueryDataRequest, QueryDataResponse,
};
use crate::types::PluginContext;

/// Outbound request capability: HTTP headers can be attached to it.
///
/// Header names are matched case-insensitively; setting a name that is
/// already present replaces its value.
pub trait ForwardHttpHeaders: Send {
    fn set_http_header(&mut self, name: &str, value: &str);

    fn delete_http_header(&mut self, name: &str);

    fn get_http_header(&self, name: &str) -> Option<&str>;

    /// All forwarded headers as an HTTP header map. Entries that are not
    /// valid HTTP names or values are omitted.
    fn get_http_headers(&self) -> http::HeaderMap;
}

/// A request kind that header-forwarding middleware can act on.
///
/// Returns the request's plugin context together with its header carrier,
/// borrowed disjointly. Kinds that cannot carry headers return `None` and
/// are passed through untouched.
pub trait ForwardingTarget {
    fn forwarding_parts(&mut self) -> (&PluginContext, Option<&mut dyn ForwardHttpHeaders>);
}

/// Receives the streamed chunks of a resource call response.
#[async_trait]
pub trait CallResourceResponseSender: Send + Sync {
    async fn send(&self, response: CallResourceResponse) -> Result<(), PluginError>;
}

#[async_trait]
impl CallResourceResponseSender for tokio::sync::mpsc::Sender<CallResourceResponse> {
    async fn send(&self, response: CallResourceResponse) -> Result<(), PluginError> {
        tokio::sync::mpsc::Sender::send(self, response)
            .await
            .map_err(|_| PluginError::SenderClosed)
    }
}

/// Client for a backend plugin.
///
/// Implemented both by the client that talks to the plugin process and by
/// every middleware wrapping it. A `None` request is passed down the chain
/// as-is so the innermost client decides how to reject it.
#[async_trait]
pub trait PluginClient: Send + Sync {
    /// Execute data queries against the plugin.
    async fn query_data(
        &self,
        ctx: &CallContext,
        req: Option<QueryDataRequest>,
    ) -> Result<QueryDataResponse, PluginError>;

    /// Call a plugin resource; response chunks are streamed through `sender`.
    async fn call_resource(
        &self,
        ctx: &CallContext,
        req: Option<CallResourceRequest>,
        sender: &dyn CallResourceResponseSender,
    ) -> Result<(), PluginError>;

    /// Check the health of the plugin or its data source.
    async fn check_health(
        &self,
        ctx: &CallContext,
        req: Option<CheckHealthRequest>,
    ) -> Result<CheckHealthResult, PluginError>;
}

#[async_trait]
impl<T: PluginClient + ?Sized> PluginClient for Arc<T> {
    async fn query_data(
        &self,
        ctx: &CallContext,
        req: Option<QueryDataRequest>,
    ) -> Result<QueryDataResponse, PluginError> {
        (**self).query_data(ctx, req).await
    }

    async fn call_resource(
        &self,
        ctx: &CallContext,
        req: Option<CallResourceRequest>,
        sender: &dyn CallResourceResponseSender,
    ) -> Result<(), PluginError> {
        (**self).call_resource(ctx, req, sender).await
    }

    async fn check_health(
        &self,
        ctx: &CallContext,
        req: Option<CheckHealthRequest>,
    ) -> Result<CheckHealthResult, PluginError> {
        (**self).check_health(ctx, req).await
    }
}

#[async_trait]
impl<T: PluginClient + ?Sized> PluginClient for Box<T> {
    async fn query_data(
        &self,
        ctx: &CallContext,
        req: Option<QueryDataRequest>,
    ) -> Result<QueryDataResponse, PluginError> {
        (**self).query_data(ctx, req).await
    }

    async fn call_resource(
        &self,
        ctx: &CallContext,
        req: Option<CallResourceRequest>,
        sender: &dyn CallResourceResponseSender,
    ) -> Result<(), PluginError> {
        (**self).call_resource(ctx, req, sender).await
    }

    async fn check_health(
        &self,
        ctx: &CallContext,
        req: Option<CheckHealthRequest>,
    ) -> Result<CheckHealthResult, PluginError> {
        (**self).check_health(ctx, req).await
    }
}

//! Test doubles shared by the middleware tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use plugbay_core::{
    CallContext, CallResourceRequest, CallResourceResponse, CallResourceResponseSender,
    CheckHealthRequest, CheckHealthResult, DataSourceInstanceSettings, PluginClient, PluginContext,
    PluginError, Principal, QueryDataRequest, QueryDataResponse, RequestContext,
};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::contexthandler::with_request_context;

// ---------------------------------------------------------------------------
// RecordingClient
// ---------------------------------------------------------------------------

/// A call observed by [`RecordingClient`], with the request exactly as received.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    QueryData(Option<QueryDataRequest>),
    CallResource(Option<CallResourceRequest>),
    CheckHealth(Option<CheckHealthRequest>),
}

/// Innermost client that records every call and optionally fails.
#[derive(Debug, Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<RecordedCall>>,
    fail: bool,
}

impl RecordingClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every call returns `PluginError::PluginUnavailable`.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    fn outcome(&self) -> Result<(), PluginError> {
        if self.fail {
            Err(PluginError::PluginUnavailable {
                plugin_id: "recording".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PluginClient for RecordingClient {
    async fn query_data(
        &self,
        _ctx: &CallContext,
        req: Option<QueryDataRequest>,
    ) -> Result<QueryDataResponse, PluginError> {
        self.calls.lock().push(RecordedCall::QueryData(req));
        self.outcome()?;
        Ok(QueryDataResponse::default())
    }

    async fn call_resource(
        &self,
        _ctx: &CallContext,
        req: Option<CallResourceRequest>,
        sender: &dyn CallResourceResponseSender,
    ) -> Result<(), PluginError> {
        self.calls.lock().push(RecordedCall::CallResource(req));
        self.outcome()?;
        sender.send(CallResourceResponse::new(200, "ok")).await
    }

    async fn check_health(
        &self,
        _ctx: &CallContext,
        req: Option<CheckHealthRequest>,
    ) -> Result<CheckHealthResult, PluginError> {
        self.calls.lock().push(RecordedCall::CheckHealth(req));
        self.outcome()?;
        Ok(CheckHealthResult::ok("healthy"))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn principal() -> Principal {
    Principal {
        id: "42".to_string(),
        org_id: 1,
        login: "editor".to_string(),
        roles: vec!["Editor".to_string()],
    }
}

/// Call context carrying a complete request context with the given inbound headers.
pub fn call_context_with_headers(headers: &[(&str, &str)]) -> CallContext {
    let mut builder = http::Request::builder().uri("/api/ds/query");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let req = builder.body(()).expect("valid test request");
    with_request_context(CallContext::new(), RequestContext::new(req, principal()))
}

/// Plugin context targeting a data source with the given raw JSON configuration.
pub fn plugin_context(json_data: &str) -> PluginContext {
    PluginContext::for_data_source(
        1,
        "prometheus",
        DataSourceInstanceSettings::new(3, json_data),
    )
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    /// Names of the spans the event was emitted in, innermost first.
    pub scope: Vec<String>,
    pub message: String,
    pub fields: HashMap<String, String>,
}

/// Collects every event emitted while the capturing subscriber is the default.
#[derive(Debug, Clone, Default)]
pub struct CapturedEvents(Arc<Mutex<Vec<CapturedEvent>>>);

impl CapturedEvents {
    pub fn at_level(&self, level: Level) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }

    pub fn with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .iter()
            .filter(|e| e.message == message)
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: HashMap<String, String>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.insert(field.name().to_string(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.fields.insert(field.name().to_string(), rendered);
        }
    }
}

struct CaptureLayer(CapturedEvents);

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        let scope = ctx
            .event_scope(event)
            .map(|scope| scope.map(|span| span.name().to_string()).collect())
            .unwrap_or_default();
        self.0 .0.lock().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            scope,
            message: collector.message,
            fields: collector.fields,
        });
    }
}

/// Install a capturing subscriber as the thread-local default.
///
/// Events are captured until the returned guard is dropped.
pub fn capture_events() -> (CapturedEvents, tracing::subscriber::DefaultGuard) {
    let events = CapturedEvents::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(events.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (events, guard)
}

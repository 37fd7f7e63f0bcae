//! Plugin client middlewares and their composition.
//!
//! - [`forward_headers`]: Forward configured inbound HTTP headers to data source plugins
//! - [`metrics`]: Call timing and outcome via `tracing` spans
//! - [`pipeline`]: Composes middlewares around a plugin client

pub mod forward_headers;
pub mod metrics;
pub mod pipeline;

pub use forward_headers::{ForwardHeadersLayer, ForwardHeadersMiddleware};
pub use metrics::{MetricsLayer, MetricsMiddleware};
pub use pipeline::{build_client_pipeline, ClientDecorator, ClientMiddleware};

//! Plugin client dispatch pipeline.
//!
//! 1. **Request context** (`contexthandler`): inbound HTTP request carried by the call context
//! 2. **Data source policy** (`datasource`): which headers a data source accepts
//! 3. **Middleware** (`middleware`): decorators wrapping the plugin client
//! 4. **Configuration** (`config`): which middlewares are enabled

pub mod config;
pub mod contexthandler;
pub mod datasource;
pub mod middleware;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{LogConfig, LogFormat, PipelineConfig};
pub use datasource::DataSource;
pub use middleware::{
    build_client_pipeline, ClientDecorator, ClientMiddleware, ForwardHeadersLayer,
    ForwardHeadersMiddleware, MetricsLayer, MetricsMiddleware,
};

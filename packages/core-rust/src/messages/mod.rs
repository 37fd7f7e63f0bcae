//! Request and response types for the three plugin call kinds.
//!
//! - [`query`]: data queries (`query_data`)
//! - [`resource`]: arbitrary resource calls with a streamed response (`call_resource`)
//! - [`health`]: health checks (`check_health`)
//!
//! All request kinds carry a [`PluginContext`](crate::PluginContext) and a
//! [`PluginHeaders`] store, so they can receive forwarded HTTP headers.

pub mod base;
pub mod health;
pub mod query;
pub mod resource;

pub use base::{PluginHeaders, HTTP_HEADER_PREFIX};
pub use health::{CheckHealthRequest, CheckHealthResult, HealthStatus};
pub use query::{DataQuery, DataResponse, QueryDataRequest, QueryDataResponse};
pub use resource::{CallResourceRequest, CallResourceResponse};

//! `plugbay` Core — plugin client interface, call context, and request kinds.

pub mod context;
pub mod error;
pub mod messages;
pub mod traits;
pub mod types;

pub use context::{CallContext, RequestContext};
pub use error::PluginError;
pub use messages::{
    CallResourceRequest, CallResourceResponse, CheckHealthRequest, CheckHealthResult, DataQuery,
    DataResponse, HealthStatus, PluginHeaders, QueryDataRequest, QueryDataResponse,
};
pub use traits::{CallResourceResponseSender, ForwardHttpHeaders, ForwardingTarget, PluginClient};
pub use types::{DataSourceInstanceSettings, PluginContext, Principal};

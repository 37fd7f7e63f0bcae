//! Access to the inbound HTTP request context carried by a [`CallContext`].

use plugbay_core::{CallContext, RequestContext};

/// The request context attached upstream, if it is complete.
///
/// Absence is a normal outcome (background jobs, alerting, internal calls),
/// so this never fails. A context lacking either the request or the
/// principal is reported as absent.
#[must_use]
pub fn from_call_context(ctx: &CallContext) -> Option<&RequestContext> {
    ctx.get::<RequestContext>().filter(|rc| rc.is_complete())
}

/// Attach a request context to a call context.
#[must_use]
pub fn with_request_context(ctx: CallContext, req_ctx: RequestContext) -> CallContext {
    ctx.with_value(req_ctx)
}

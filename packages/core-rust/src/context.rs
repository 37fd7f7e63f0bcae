use http::Extensions;
use tokio_util::sync::CancellationToken;

use crate::types::Principal;

/// Call-scoped carrier threaded through every plugin client call.
///
/// Holds the cancellation signal for the call and a typed map of ambient
/// values attached upstream (for example the [`RequestContext`] of the inbound
/// HTTP request). Middleware reads from it; it never outlives the call.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancellation: CancellationToken,
    values: Extensions,
}

impl CallContext {
    /// Create an empty context with a fresh cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty context bound to an existing cancellation token.
    #[must_use]
    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self {
            cancellation,
            values: Extensions::new(),
        }
    }

    /// Derive a context whose token is cancelled when this one is.
    ///
    /// Ambient values are copied; cancelling the child does not affect the parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            cancellation: self.cancellation.child_token(),
            values: self.values.clone(),
        }
    }

    /// Attach an ambient value, replacing any previous value of the same type.
    pub fn insert<T>(&mut self, value: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        self.values.insert(value);
    }

    /// Builder form of [`CallContext::insert`].
    #[must_use]
    pub fn with_value<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.insert(value);
        self
    }

    /// Look up an ambient value by type.
    #[must_use]
    pub fn get<T>(&self) -> Option<&T>
    where
        T: Send + Sync + 'static,
    {
        self.values.get::<T>()
    }

    /// The cancellation token for this call.
    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

/// Per-request context for the inbound HTTP request that triggered a plugin call.
///
/// Attached to a [`CallContext`] by the HTTP layer. A context missing either
/// the request or the principal is considered incomplete and is ignored by
/// consumers.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Inbound HTTP request (head only; bodies are never carried here).
    pub request: Option<http::Request<()>>,
    /// Authenticated principal, if the request is authenticated.
    pub principal: Option<Principal>,
}

impl RequestContext {
    #[must_use]
    pub fn new(request: http::Request<()>, principal: Principal) -> Self {
        Self {
            request: Some(request),
            principal: Some(principal),
        }
    }

    /// True when both the inbound request and the principal are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.request.is_some() && self.principal.is_some()
    }

    /// Inbound request headers, if a request is attached.
    #[must_use]
    pub fn headers(&self) -> Option<&http::HeaderMap> {
        self.request.as_ref().map(http::Request::headers)
    }
}

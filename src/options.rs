//! Per-call request options.
//!
//! Every bridged operation accepts `Option<RequestOptions>`; `None` stands
//! for [`RequestOptions::default()`], mirroring the underlying client's
//! default options value.

use std::time::Duration;

/// Options forwarded unchanged to the underlying client alongside a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Client-side deadline for the call, if any. Enforcement belongs to the
    /// underlying client; this crate only carries the value through.
    pub timeout: Option<Duration>,
    /// Extra headers attached to the request, in insertion order.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a client-side deadline for the call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Append a header to the request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_headers_in_order() {
        let options = RequestOptions::new()
            .with_header("x-opaque-id", "audit-1")
            .with_header("authorization", "Bearer token");
        assert_eq!(options.headers.len(), 2);
        assert_eq!(options.headers[0].0, "x-opaque-id");
    }
}

//! Error types shared across the bridged operations.
//!
//! Errors cross the bridge unchanged: whatever the underlying client reports,
//! synchronously at registration or asynchronously through a listener, is
//! what the caller observes at the await point. No wrapping, no retries.

use thiserror::Error;

/// Errors reported by a bridged search operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Failure in the transport layer below the client (connection reset,
    /// unreachable node, protocol-level trouble).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server executed the request and reported a failure.
    #[error("server error (status {status}): {reason}")]
    Server { status: u16, reason: String },

    /// The client rejected the request synchronously, before dispatching it.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The scroll cursor is unknown to the server or its keep-alive lapsed.
    #[error("scroll cursor expired or unknown: {0}")]
    ScrollExpired(String),

    /// The client dropped a listener without resolving it. This indicates a
    /// defect in the underlying client, not a server-side condition.
    #[error("response channel closed before a result was delivered")]
    ChannelClosed,
}

impl SearchError {
    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a server-reported error with an HTTP-style status code.
    pub fn server(status: u16, reason: impl Into<String>) -> Self {
        Self::Server {
            status,
            reason: reason.into(),
        }
    }

    /// Create a synchronous rejection.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_reason() {
        let error = SearchError::server(503, "no shard available");
        assert_eq!(
            error.to_string(),
            "server error (status 503): no shard available"
        );
    }

    #[test]
    fn constructors_match_variants() {
        assert_eq!(
            SearchError::transport("reset"),
            SearchError::Transport("reset".into())
        );
        assert_eq!(
            SearchError::rejected("queue full"),
            SearchError::Rejected("queue full".into())
        );
    }
}

//! Request and response carriers for the bridged operations.
//!
//! These mirror the shapes of the underlying client's wire types closely
//! enough for the adapter to route them. Their contents are carried through
//! unchanged: this crate never serializes them itself, it only reads the
//! scroll cursor and hit sequence off search responses to drive pagination.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A search request, optionally configured to open a scroll session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Indices to search; empty means all.
    pub indices: Vec<String>,
    /// Query body as the server expects it.
    pub body: Value,
    /// Page size per response.
    pub size: Option<u32>,
    /// Server-side retention for the scroll session opened by this request.
    /// Set by the scroll adapter; callers normally leave it `None`.
    pub scroll: Option<Duration>,
}

impl SearchRequest {
    pub fn new(indices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            indices: indices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// One matched document, in the order the server returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub index: String,
    pub id: String,
    pub score: Option<f64>,
    pub source: Value,
}

impl SearchHit {
    pub fn new(index: impl Into<String>, id: impl Into<String>, source: Value) -> Self {
        Self {
            index: index.into(),
            id: id.into(),
            score: None,
            source,
        }
    }
}

/// The hit block of a search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHits {
    /// Total matches reported by the server, not the size of this page.
    pub total: u64,
    pub hits: Vec<SearchHit>,
}

/// Response to a search or scroll-continuation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Cursor for the next scroll page, when a scroll session is open.
    pub scroll_id: Option<String>,
    pub took_ms: u64,
    pub hits: SearchHits,
}

/// Continuation request for an open scroll session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchScrollRequest {
    pub scroll_id: String,
    /// Renewed server-side retention for the session.
    pub keep_alive: Option<Duration>,
}

impl SearchScrollRequest {
    pub fn new(scroll_id: impl Into<String>) -> Self {
        Self {
            scroll_id: scroll_id.into(),
            keep_alive: None,
        }
    }

    pub fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }
}

/// Request to discard the server-side state of one or more scroll sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearScrollRequest {
    pub scroll_ids: Vec<String>,
}

impl ClearScrollRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scroll_id(&mut self, scroll_id: impl Into<String>) {
        self.scroll_ids.push(scroll_id.into());
    }
}

/// Acknowledgement for a clear-scroll request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearScrollResponse {
    pub succeeded: bool,
    pub num_freed: u64,
}

/// Outcome of a single-document write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocWriteResult {
    Created,
    Updated,
    Deleted,
    NotFound,
    Noop,
}

/// A batch of write operations, pre-encoded by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkRequest {
    pub operations: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkResponse {
    pub took_ms: u64,
    pub errors: bool,
    pub items: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRequest {
    pub index: String,
    pub id: String,
}

impl GetRequest {
    pub fn new(index: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    pub index: String,
    pub id: String,
    pub found: bool,
    pub source: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiGetRequest {
    pub docs: Vec<GetRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiGetResponse {
    pub docs: Vec<GetResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexRequest {
    pub index: String,
    /// Server assigns an id when `None`.
    pub id: Option<String>,
    pub document: Value,
}

impl IndexRequest {
    pub fn new(index: impl Into<String>, document: Value) -> Self {
        Self {
            index: index.into(),
            id: None,
            document,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexResponse {
    pub index: String,
    pub id: String,
    pub result: DocWriteResult,
    pub version: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub index: String,
    pub id: String,
    /// Partial document merged into the existing one.
    pub doc: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub index: String,
    pub id: String,
    pub result: DocWriteResult,
    pub version: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub index: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub index: String,
    pub id: String,
    pub result: DocWriteResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiSearchRequest {
    pub searches: Vec<SearchRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiSearchResponse {
    /// One response per request, in request order.
    pub responses: Vec<SearchResponse>,
}

/// Copy documents matching a query from source indices into a destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReindexRequest {
    pub source_indices: Vec<String>,
    pub dest_index: String,
    pub query: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateByQueryRequest {
    pub indices: Vec<String>,
    pub query: Value,
    pub script: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteByQueryRequest {
    pub indices: Vec<String>,
    pub query: Value,
}

/// Progress summary for the long-running batch operations (reindex,
/// update-by-query, delete-by-query).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkByScrollResponse {
    pub took_ms: u64,
    pub total: u64,
    pub created: u64,
    pub updated: u64,
    pub deleted: u64,
    pub batches: u64,
}

/// Adjust the throttle of a running batch task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RethrottleRequest {
    pub task_id: String,
    pub requests_per_second: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub node: String,
    pub id: u64,
    pub action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<TaskInfo>,
}

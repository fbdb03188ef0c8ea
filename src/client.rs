//! Async facade over a callback-based search client.
//!
//! [`CallbackSearchClient`] models the underlying client's surface: one
//! registration method per logical operation. [`SearchClient`] wraps it and
//! exposes one `async fn` per operation; each wrapper is a direct
//! specialization of [`listen`](crate::listener::listen) with no logic of
//! its own.

use std::sync::Arc;

use crate::error::SearchError;
use crate::listener::{ActionListener, listen};
use crate::options::RequestOptions;
use crate::types::*;

fn unsupported(operation: &str) -> SearchError {
    SearchError::rejected(format!("{operation} is not supported by this client"))
}

/// The callback surface of the underlying search client.
///
/// Registration returns immediately or fails synchronously; the result is
/// delivered later through the listener, exactly once, on the client's own
/// transport threads. Implementations may leave operations they do not carry
/// at their default, which rejects the call synchronously.
#[allow(unused_variables)]
pub trait CallbackSearchClient: Send + Sync + 'static {
    fn bulk(
        &self,
        request: BulkRequest,
        options: RequestOptions,
        listener: ActionListener<BulkResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("bulk"))
    }

    fn get(
        &self,
        request: GetRequest,
        options: RequestOptions,
        listener: ActionListener<GetResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("get"))
    }

    fn multi_get(
        &self,
        request: MultiGetRequest,
        options: RequestOptions,
        listener: ActionListener<MultiGetResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("multi_get"))
    }

    fn index(
        &self,
        request: IndexRequest,
        options: RequestOptions,
        listener: ActionListener<IndexResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("index"))
    }

    fn update(
        &self,
        request: UpdateRequest,
        options: RequestOptions,
        listener: ActionListener<UpdateResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("update"))
    }

    fn delete(
        &self,
        request: DeleteRequest,
        options: RequestOptions,
        listener: ActionListener<DeleteResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("delete"))
    }

    fn search(
        &self,
        request: SearchRequest,
        options: RequestOptions,
        listener: ActionListener<SearchResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("search"))
    }

    fn multi_search(
        &self,
        request: MultiSearchRequest,
        options: RequestOptions,
        listener: ActionListener<MultiSearchResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("multi_search"))
    }

    fn scroll(
        &self,
        request: SearchScrollRequest,
        options: RequestOptions,
        listener: ActionListener<SearchResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("scroll"))
    }

    fn clear_scroll(
        &self,
        request: ClearScrollRequest,
        options: RequestOptions,
        listener: ActionListener<ClearScrollResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("clear_scroll"))
    }

    fn reindex(
        &self,
        request: ReindexRequest,
        options: RequestOptions,
        listener: ActionListener<BulkByScrollResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("reindex"))
    }

    fn update_by_query(
        &self,
        request: UpdateByQueryRequest,
        options: RequestOptions,
        listener: ActionListener<BulkByScrollResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("update_by_query"))
    }

    fn delete_by_query(
        &self,
        request: DeleteByQueryRequest,
        options: RequestOptions,
        listener: ActionListener<BulkByScrollResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("delete_by_query"))
    }

    fn reindex_rethrottle(
        &self,
        request: RethrottleRequest,
        options: RequestOptions,
        listener: ActionListener<ListTasksResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("reindex_rethrottle"))
    }

    fn update_by_query_rethrottle(
        &self,
        request: RethrottleRequest,
        options: RequestOptions,
        listener: ActionListener<ListTasksResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("update_by_query_rethrottle"))
    }

    fn delete_by_query_rethrottle(
        &self,
        request: RethrottleRequest,
        options: RequestOptions,
        listener: ActionListener<ListTasksResponse>,
    ) -> Result<(), SearchError> {
        Err(unsupported("delete_by_query_rethrottle"))
    }
}

/// Async wrapper around a [`CallbackSearchClient`].
///
/// Cloning is cheap; clones share the underlying client. Every method awaits
/// exactly one listener resolution and returns the typed response, or the
/// client's error unchanged.
#[derive(Debug)]
pub struct SearchClient<C> {
    inner: Arc<C>,
}

impl<C> Clone for SearchClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: CallbackSearchClient> SearchClient<C> {
    pub fn new(client: C) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    pub fn from_arc(client: Arc<C>) -> Self {
        Self { inner: client }
    }

    /// Access the underlying callback client.
    pub fn raw(&self) -> &C {
        &self.inner
    }

    /// Execute a batch of write operations.
    pub async fn bulk(
        &self,
        request: BulkRequest,
        options: Option<RequestOptions>,
    ) -> Result<BulkResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.bulk(request, options, listener)).await
    }

    /// Fetch a single document by id.
    pub async fn get(
        &self,
        request: GetRequest,
        options: Option<RequestOptions>,
    ) -> Result<GetResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.get(request, options, listener)).await
    }

    /// Fetch several documents in one round trip.
    pub async fn multi_get(
        &self,
        request: MultiGetRequest,
        options: Option<RequestOptions>,
    ) -> Result<MultiGetResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.multi_get(request, options, listener)).await
    }

    /// Index (create or overwrite) a document.
    pub async fn index(
        &self,
        request: IndexRequest,
        options: Option<RequestOptions>,
    ) -> Result<IndexResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.index(request, options, listener)).await
    }

    /// Apply a partial update to a document.
    pub async fn update(
        &self,
        request: UpdateRequest,
        options: Option<RequestOptions>,
    ) -> Result<UpdateResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.update(request, options, listener)).await
    }

    /// Delete a document by id.
    pub async fn delete(
        &self,
        request: DeleteRequest,
        options: Option<RequestOptions>,
    ) -> Result<DeleteResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.delete(request, options, listener)).await
    }

    /// Run one search request.
    pub async fn search(
        &self,
        request: SearchRequest,
        options: Option<RequestOptions>,
    ) -> Result<SearchResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.search(request, options, listener)).await
    }

    /// Run several search requests in one round trip.
    pub async fn multi_search(
        &self,
        request: MultiSearchRequest,
        options: Option<RequestOptions>,
    ) -> Result<MultiSearchResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.multi_search(request, options, listener)).await
    }

    /// Fetch the next page of an open scroll session.
    pub async fn scroll(
        &self,
        request: SearchScrollRequest,
        options: Option<RequestOptions>,
    ) -> Result<SearchResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.scroll(request, options, listener)).await
    }

    /// Release the server-side state of one or more scroll sessions.
    pub async fn clear_scroll(
        &self,
        request: ClearScrollRequest,
        options: Option<RequestOptions>,
    ) -> Result<ClearScrollResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.clear_scroll(request, options, listener)).await
    }

    /// Copy matching documents from source indices into a destination index.
    pub async fn reindex(
        &self,
        request: ReindexRequest,
        options: Option<RequestOptions>,
    ) -> Result<BulkByScrollResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.reindex(request, options, listener)).await
    }

    /// Update every document matching a query.
    pub async fn update_by_query(
        &self,
        request: UpdateByQueryRequest,
        options: Option<RequestOptions>,
    ) -> Result<BulkByScrollResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.update_by_query(request, options, listener)).await
    }

    /// Delete every document matching a query.
    pub async fn delete_by_query(
        &self,
        request: DeleteByQueryRequest,
        options: Option<RequestOptions>,
    ) -> Result<BulkByScrollResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.delete_by_query(request, options, listener)).await
    }

    /// Adjust the throttle of a running reindex task.
    pub async fn reindex_rethrottle(
        &self,
        request: RethrottleRequest,
        options: Option<RequestOptions>,
    ) -> Result<ListTasksResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.reindex_rethrottle(request, options, listener)).await
    }

    /// Adjust the throttle of a running update-by-query task.
    pub async fn update_by_query_rethrottle(
        &self,
        request: RethrottleRequest,
        options: Option<RequestOptions>,
    ) -> Result<ListTasksResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.update_by_query_rethrottle(request, options, listener)).await
    }

    /// Adjust the throttle of a running delete-by-query task.
    pub async fn delete_by_query_rethrottle(
        &self,
        request: RethrottleRequest,
        options: Option<RequestOptions>,
    ) -> Result<ListTasksResponse, SearchError> {
        let options = options.unwrap_or_default();
        listen(|listener| self.inner.delete_by_query_rethrottle(request, options, listener)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the options it was handed and resolves inline.
    struct RecordingClient {
        seen_options: Mutex<Vec<RequestOptions>>,
    }

    impl RecordingClient {
        fn new() -> Self {
            Self {
                seen_options: Mutex::new(Vec::new()),
            }
        }
    }

    impl CallbackSearchClient for RecordingClient {
        fn get(
            &self,
            request: GetRequest,
            options: RequestOptions,
            listener: ActionListener<GetResponse>,
        ) -> Result<(), SearchError> {
            self.seen_options.lock().unwrap().push(options);
            listener.on_response(GetResponse {
                index: request.index,
                id: request.id,
                found: true,
                source: Some(serde_json::json!({"title": "hello"})),
            });
            Ok(())
        }

        fn index(
            &self,
            _request: IndexRequest,
            _options: RequestOptions,
            listener: ActionListener<IndexResponse>,
        ) -> Result<(), SearchError> {
            listener.on_failure(SearchError::server(429, "rejected execution"));
            Ok(())
        }
    }

    #[tokio::test]
    async fn typed_response_comes_back_through_the_bridge() {
        let client = SearchClient::new(RecordingClient::new());
        let response = client
            .get(GetRequest::new("articles", "1"), None)
            .await
            .unwrap();
        assert!(response.found);
        assert_eq!(response.id, "1");
    }

    #[tokio::test]
    async fn missing_options_default_to_the_client_default() {
        let client = SearchClient::new(RecordingClient::new());
        client
            .get(GetRequest::new("articles", "1"), None)
            .await
            .unwrap();
        let seen = client.raw().seen_options.lock().unwrap();
        assert_eq!(seen.as_slice(), &[RequestOptions::default()]);
    }

    #[tokio::test]
    async fn async_failure_surfaces_unchanged() {
        let client = SearchClient::new(RecordingClient::new());
        let error = client
            .index(
                IndexRequest::new("articles", serde_json::json!({})),
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(error, SearchError::server(429, "rejected execution"));
    }

    #[tokio::test]
    async fn unimplemented_operation_rejects_synchronously() {
        let client = SearchClient::new(RecordingClient::new());
        let error = client.bulk(BulkRequest::default(), None).await.unwrap_err();
        assert!(matches!(error, SearchError::Rejected(_)));
    }
}

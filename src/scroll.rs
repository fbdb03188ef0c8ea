//! Scroll pagination as a lazy hit stream.
//!
//! A scroll search holds server-side state between pages, identified by a
//! cursor that must be released when traversal ends. This module hides the
//! cursor: [`SearchClient::scroll_hits`] yields every hit of every page in
//! order, fetching the next page only after the consumer has taken the
//! current one, and clears the session exactly once on every exit path —
//! exhaustion, mid-stream failure, or the consumer dropping the stream early.
//!
//! Release failure policy: a release failure never masks a primary error
//! (it is logged at `warn` instead); when the traversal itself succeeded,
//! a failing release is yielded as the final stream item.

use std::pin::Pin;
use std::time::Duration;

use async_stream::stream;
use futures::Stream;

use crate::client::{CallbackSearchClient, SearchClient};
use crate::error::SearchError;
use crate::types::{ClearScrollRequest, SearchHit, SearchRequest, SearchScrollRequest};

/// Keep-alive attached to scroll requests when the caller does not pick one.
/// Renewed on every page fetch.
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(60);

/// A pinned, boxed stream of search hits.
///
/// Single-pass and non-restartable; items arrive in the order the server
/// returned them.
pub type SearchHitStream = Pin<Box<dyn Stream<Item = Result<SearchHit, SearchError>> + Send>>;

/// Owns the last-known scroll cursor for one session.
///
/// The stream body releases the cursor inline on its own exit paths. If the
/// consumer drops the stream mid-iteration instead, `Drop` spawns the release
/// on the current runtime. `release` and `Drop` both take the cursor out, so
/// a session is never cleared twice.
struct ScrollGuard<C: CallbackSearchClient> {
    client: SearchClient<C>,
    scroll_id: Option<String>,
}

impl<C: CallbackSearchClient> ScrollGuard<C> {
    fn new(client: SearchClient<C>) -> Self {
        Self {
            client,
            scroll_id: None,
        }
    }

    /// Remember the cursor the latest page came back with.
    fn track(&mut self, scroll_id: Option<String>) {
        self.scroll_id = scroll_id;
    }

    /// Release the tracked cursor, if any.
    async fn release(&mut self) -> Result<(), SearchError> {
        let Some(scroll_id) = self.scroll_id.take() else {
            return Ok(());
        };
        tracing::debug!(%scroll_id, "clearing scroll session");
        let mut request = ClearScrollRequest::new();
        request.add_scroll_id(scroll_id);
        self.client.clear_scroll(request, None).await.map(|_| ())
    }
}

impl<C: CallbackSearchClient> Drop for ScrollGuard<C> {
    fn drop(&mut self) {
        let Some(scroll_id) = self.scroll_id.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let client = self.client.clone();
                handle.spawn(async move {
                    let mut request = ClearScrollRequest::new();
                    request.add_scroll_id(scroll_id.clone());
                    if let Err(error) = client.clear_scroll(request, None).await {
                        tracing::warn!(%scroll_id, %error, "failed to clear abandoned scroll session");
                    }
                });
            }
            Err(_) => {
                tracing::warn!(%scroll_id, "scroll stream dropped outside a runtime; session left to expire");
            }
        }
    }
}

impl<C: CallbackSearchClient> SearchClient<C> {
    /// Stream every hit of a scroll search with the default keep-alive.
    pub fn scroll_hits(&self, request: SearchRequest) -> SearchHitStream {
        self.scroll_hits_with_keep_alive(request, DEFAULT_KEEP_ALIVE)
    }

    /// Stream every hit of a scroll search, page by page.
    ///
    /// The opening request is sent with `keep_alive` attached; each
    /// continuation renews it. Iteration ends at the first page with no hits,
    /// even if the server still returned a cursor. Any failed fetch ends the
    /// stream with that error after the already-fetched hits.
    pub fn scroll_hits_with_keep_alive(
        &self,
        mut request: SearchRequest,
        keep_alive: Duration,
    ) -> SearchHitStream {
        let client = self.clone();
        request.scroll = Some(keep_alive);

        Box::pin(stream! {
            let mut guard = ScrollGuard::new(client.clone());

            let mut response = match client.search(request, None).await {
                Ok(response) => response,
                Err(error) => {
                    // No cursor was obtained; nothing to release.
                    yield Err(error);
                    return;
                }
            };
            guard.track(response.scroll_id.clone());
            tracing::debug!(scroll_id = ?response.scroll_id, "opened scroll session");

            loop {
                let page = std::mem::take(&mut response.hits.hits);
                let page_len = page.len();
                for hit in page {
                    yield Ok(hit);
                }
                if page_len == 0 {
                    break;
                }

                let Some(scroll_id) = response.scroll_id.clone() else {
                    // Server closed the session on its own; nothing to fetch
                    // or release.
                    break;
                };
                let next = client
                    .scroll(
                        SearchScrollRequest::new(scroll_id).with_keep_alive(keep_alive),
                        None,
                    )
                    .await;
                response = match next {
                    Ok(response) => {
                        tracing::debug!(
                            hits = response.hits.hits.len(),
                            "fetched scroll page"
                        );
                        response
                    }
                    Err(error) => {
                        if let Err(release_error) = guard.release().await {
                            tracing::warn!(%release_error, "failed to clear scroll session after fetch error");
                        }
                        yield Err(error);
                        return;
                    }
                };
                guard.track(response.scroll_id.clone());
            }

            if let Err(error) = guard.release().await {
                yield Err(error);
            }
        })
    }
}

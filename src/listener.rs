//! Callback-to-await bridge.
//!
//! [`listen`] is the single suspension point every bridged operation goes
//! through: it hands the underlying client an [`ActionListener`] and parks
//! the calling task on a oneshot channel until the listener resolves. The
//! task consumes no thread while parked; the client delivers the result on
//! its own transport threads.

use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::error::SearchError;

type Completion<T> = oneshot::Sender<Result<T, SearchError>>;

/// One-shot completion handle handed to the underlying client.
///
/// The first call to [`on_response`](Self::on_response) or
/// [`on_failure`](Self::on_failure) resolves the pending bridged call; any
/// later call on any clone is a silent no-op. Dropping every clone without
/// resolving surfaces [`SearchError::ChannelClosed`] to the awaiting task.
#[derive(Debug)]
pub struct ActionListener<T> {
    tx: Arc<Mutex<Option<Completion<T>>>>,
}

impl<T> Clone for ActionListener<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> ActionListener<T> {
    fn new() -> (Self, oneshot::Receiver<Result<T, SearchError>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Arc::new(Mutex::new(Some(tx))),
            },
            rx,
        )
    }

    /// Deliver the operation's result.
    pub fn on_response(&self, response: T) {
        self.complete(Ok(response));
    }

    /// Deliver the operation's failure, surfaced unchanged to the caller.
    pub fn on_failure(&self, error: SearchError) {
        self.complete(Err(error));
    }

    fn complete(&self, result: Result<T, SearchError>) {
        let sender = self.tx.lock().expect("listener mutex poisoned").take();
        if let Some(sender) = sender {
            // Send fails only when the awaiting task was cancelled; the
            // result is dropped either way.
            let _ = sender.send(result);
        }
    }
}

/// Bridge one callback-style operation into a single awaited result.
///
/// `register` must hand the listener to the underlying client and return
/// immediately. A synchronous registration failure is routed through the same
/// listener, so a callback that already fired wins over the registration
/// error.
pub async fn listen<T, F>(register: F) -> Result<T, SearchError>
where
    F: FnOnce(ActionListener<T>) -> Result<(), SearchError>,
{
    let (listener, rx) = ActionListener::new();
    if let Err(error) = register(listener.clone()) {
        listener.on_failure(error);
    }
    // Release our half before parking, so a client that drops its listener
    // without resolving shows up as a closed channel instead of a hang.
    drop(listener);
    rx.await.unwrap_or(Err(SearchError::ChannelClosed))
}

//! esbridge
//!
//! Async/await adapter over callback-based search engine clients.
//!
//! The underlying client exposes operations of the shape
//! `op(request, options, listener)`: registration returns immediately and the
//! result is delivered later through the listener, exactly once. This crate
//! bridges every such operation into a plain `async fn`, and turns the
//! cursor-based scroll pagination protocol into a single lazy stream of hits
//! that releases its server-side session on every exit path.
#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod listener;
pub mod options;
pub mod scroll;
pub mod types;

pub use client::{CallbackSearchClient, SearchClient};
pub use error::SearchError;
pub use listener::ActionListener;
pub use options::RequestOptions;
pub use scroll::{DEFAULT_KEEP_ALIVE, SearchHitStream};

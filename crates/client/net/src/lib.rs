//! Request-dispatcher abstraction for the game service.
//!
//! The sync layer never talks to the network directly: it hands a batch of
//! [`ServerRequest`] envelopes to a [`RequestDispatcher`] and gets raw
//! payload bytes back, one per request, once the whole batch resolves. The
//! concrete dispatcher owns serialization of the outer envelope, signing,
//! session management, and transport, all outside this workspace's scope.

pub mod dispatcher;
pub mod fixture;

pub use dispatcher::{DispatchError, RequestDispatcher, ServerRequest};
pub use fixture::StaticDispatcher;

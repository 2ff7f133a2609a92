//! Client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The host executes the round trip, either by hand
//! between `build_*` and `parse_*`, or through a `Transport` handed to
//! `TodoApp`.
//!
//! # Design
//! - `TodoClient` is stateless and holds only the API base URL.
//! - `TodoState` is the view-state container: the cached list, the pending
//!   input, a loading flag and the last error. It only changes through its
//!   named mutations, and `TodoState::view` derives what a front-end shows.
//! - `TodoApp` ties the two together: one request per user action, state
//!   updated only after the server confirms.
//! - With the default `ureq` feature, `UreqTransport` is a ready-made
//!   blocking transport. Disable default features for a core with no HTTP
//!   stack at all.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod state;
pub mod types;
#[cfg(feature = "ureq")]
pub mod ureq_transport;

pub use app::{Operation, TodoApp};
pub use client::TodoClient;
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use state::{TodoState, TodoView};
pub use types::{CreateTodo, DeleteAck, Todo, UpdateTodo};
#[cfg(feature = "ureq")]
pub use ureq_transport::UreqTransport;

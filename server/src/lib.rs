//! REST service for todo records.
//!
//! `app` wires the `/api/todos` routes and a health probe around an
//! explicitly constructed store handle. The handle is the only state the
//! service keeps between requests.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;
pub mod types;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::ServiceError;
pub use store::{FileStore, MemoryStore, SharedStore, StoreError, TodoStore};
pub use types::{CreateTodo, DeleteAck, Todo, UpdateTodo};

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .nest("/api", routes::router(store))
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

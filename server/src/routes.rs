//! Handlers for `/api/todos`. Each one performs a single store call.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::store::SharedStore;
use crate::types::{CreateTodo, DeleteAck, Todo, UpdateTodo};

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(store)
}

async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ServiceError> {
    let todos = store.list().await?;
    tracing::debug!(count = todos.len(), "listed todos");
    Ok(Json(todos))
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ServiceError> {
    let todo = store.insert(input.text).await?;
    tracing::debug!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, ServiceError> {
    store.get(id).await?.map(Json).ok_or(ServiceError::NotFound)
}

async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateTodo>,
) -> Result<Json<Todo>, ServiceError> {
    let todo = store.update(id, patch).await?.ok_or(ServiceError::NotFound)?;
    tracing::debug!(%id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteAck>, ServiceError> {
    let removed = store.remove(id).await?;
    tracing::debug!(%id, removed, "deleted todo");
    Ok(Json(DeleteAck::OK))
}

//! Persistence boundary for todo records.
//!
//! The service only talks to `dyn TodoStore`. Two backends exist: a
//! process-local `MemoryStore` and a `FileStore` that snapshots to a JSON
//! file after every mutation. Both keep their records in a `TodoTable`
//! behind a `tokio::sync::RwLock`, which serialises conflicting writes.

mod file;
mod memory;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::types::{Todo, UpdateTodo};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Handle shared by every request handler for the lifetime of the server.
pub type SharedStore = Arc<dyn TodoStore>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store snapshot is not valid JSON: {0}")]
    Snapshot(#[from] serde_json::Error),
}

#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// All records, in whatever order the backend yields them.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Todo>, StoreError>;

    /// Persist a new record with a fresh id and `completed = false`.
    async fn insert(&self, text: String) -> Result<Todo, StoreError>;

    /// Apply `patch` to the record with `id`. `None` if no such record.
    async fn update(&self, id: Uuid, patch: UpdateTodo) -> Result<Option<Todo>, StoreError>;

    /// Remove the record with `id`. Returns whether a record was removed.
    async fn remove(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// In-memory record table shared by the store backends.
#[derive(Debug, Default)]
pub(crate) struct TodoTable {
    todos: HashMap<Uuid, Todo>,
}

impl TodoTable {
    pub(crate) fn from_records(records: Vec<Todo>) -> Self {
        Self {
            todos: records.into_iter().map(|todo| (todo.id, todo)).collect(),
        }
    }

    pub(crate) fn records(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    pub(crate) fn get(&self, id: &Uuid) -> Option<Todo> {
        self.todos.get(id).cloned()
    }

    pub(crate) fn insert(&mut self, text: String) -> Todo {
        let mut todo = Todo::new(text);
        while self.todos.contains_key(&todo.id) {
            todo.id = Uuid::new_v4();
        }
        self.todos.insert(todo.id, todo.clone());
        todo
    }

    pub(crate) fn update(&mut self, id: &Uuid, patch: UpdateTodo) -> Option<Todo> {
        let todo = self.todos.get_mut(id)?;
        patch.apply(todo);
        Some(todo.clone())
    }

    pub(crate) fn remove(&mut self, id: &Uuid) -> bool {
        self.todos.remove(id).is_some()
    }

    /// Put a previously read copy back, undoing a mutation that failed to persist.
    pub(crate) fn restore(&mut self, todo: Todo) {
        self.todos.insert(todo.id, todo);
    }

    pub(crate) fn len(&self) -> usize {
        self.todos.len()
    }
}

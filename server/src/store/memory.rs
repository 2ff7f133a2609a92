use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TodoStore, TodoTable};
use crate::types::{Todo, UpdateTodo};

/// Store that lives and dies with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<TodoTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.table.read().await.records())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        Ok(self.table.read().await.get(&id))
    }

    async fn insert(&self, text: String) -> Result<Todo, StoreError> {
        Ok(self.table.write().await.insert(text))
    }

    async fn update(&self, id: Uuid, patch: UpdateTodo) -> Result<Option<Todo>, StoreError> {
        Ok(self.table.write().await.update(&id, patch))
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.table.write().await.remove(&id))
    }
}

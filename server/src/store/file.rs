use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TodoStore, TodoTable};
use crate::types::{Todo, UpdateTodo};

/// Store backed by a JSON array on disk.
///
/// The whole table is rewritten after each mutation that changed something,
/// via a sibling temp file and a rename. The write lock is held across the
/// write so snapshots land in mutation order.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: RwLock<TodoTable>,
}

impl FileStore {
    /// Load `path` if it exists, otherwise start empty. The file is created
    /// on the first mutation.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = match tokio::fs::read(&path).await {
            Ok(bytes) => TodoTable::from_records(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => TodoTable::default(),
            Err(e) => return Err(e.into()),
        };
        tracing::info!(path = %path.display(), records = table.len(), "opened todo file store");
        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, table: &TodoTable) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(&table.records())?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl TodoStore for FileStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.table.read().await.records())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Todo>, StoreError> {
        Ok(self.table.read().await.get(&id))
    }

    async fn insert(&self, text: String) -> Result<Todo, StoreError> {
        let mut table = self.table.write().await;
        let todo = table.insert(text);
        if let Err(e) = self.persist(&table).await {
            table.remove(&todo.id);
            return Err(e);
        }
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: UpdateTodo) -> Result<Option<Todo>, StoreError> {
        let mut table = self.table.write().await;
        let Some(previous) = table.get(&id) else {
            return Ok(None);
        };
        let updated = table.update(&id, patch);
        if let Err(e) = self.persist(&table).await {
            table.restore(previous);
            return Err(e);
        }
        Ok(updated)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        let Some(previous) = table.get(&id) else {
            return Ok(false);
        };
        table.remove(&id);
        if let Err(e) = self.persist(&table).await {
            table.restore(previous);
            return Err(e);
        }
        Ok(true)
    }
}

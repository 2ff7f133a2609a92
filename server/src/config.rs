//! Command-line and environment configuration for `todo-server`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::store::{FileStore, MemoryStore, SharedStore, StoreError};

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Serve the todo REST API under /api/todos")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Persist todos to this JSON file. Without it, todos live in memory.
    #[arg(long, env = "TODO_DATA_FILE")]
    pub data_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub async fn open_store(&self) -> Result<SharedStore, StoreError> {
        match &self.data_file {
            Some(path) => Ok(Arc::new(FileStore::open(path.clone()).await?)),
            None => Ok(Arc::new(MemoryStore::new())),
        }
    }
}

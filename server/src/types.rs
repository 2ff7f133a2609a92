//! Wire types for the todo service.
//!
//! `text` is the only content field. Request bodies reject unknown fields, so
//! a payload that names the content `title` is a 422 instead of a silent
//! no-op.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// A fresh, not yet completed record with a newly assigned id.
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// Body of `POST /api/todos`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTodo {
    pub text: String,
}

/// Body of `PUT /api/todos/{id}`. Absent fields are left untouched.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn apply(self, todo: &mut Todo) {
        if let Some(text) = self.text {
            todo.text = text;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// Body of every `DELETE /api/todos/{id}` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}

impl DeleteAck {
    pub const OK: DeleteAck = DeleteAck { success: true };
}

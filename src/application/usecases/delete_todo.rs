use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::services::notifier::{Notifier, deleted_message, notify_outcome},
    domain::{errors::DomainError, models::Todo, repositories::TodoRepository},
};

pub struct DeleteTodoUseCase {
    todos: Arc<dyn TodoRepository>,
    notifier: Arc<dyn Notifier>,
}

impl DeleteTodoUseCase {
    pub fn new(todos: Arc<dyn TodoRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { todos, notifier }
    }

    /// Hard delete, not idempotent: a second delete of the same id reports
    /// not-found. Returns the removed todo so callers can echo its text.
    pub async fn execute(&self, todo_id: Uuid, owner_id: Uuid) -> Result<Todo, DomainError> {
        // Loaded first so the confirmation can echo the task text.
        let todo = self
            .todos
            .find(todo_id, owner_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("todo {todo_id}")))?;

        if !self.todos.delete(todo_id, owner_id).await? {
            return Err(DomainError::NotFound(format!("todo {todo_id}")));
        }

        notify_outcome(&self.notifier, owner_id, &deleted_message(&todo.text)).await;

        Ok(todo)
    }
}

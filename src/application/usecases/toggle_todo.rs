use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::services::notifier::{Notifier, notify_outcome, toggled_message},
    domain::{errors::DomainError, models::Todo, repositories::TodoRepository},
};

pub struct ToggleTodoUseCase {
    todos: Arc<dyn TodoRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ToggleTodoUseCase {
    pub fn new(todos: Arc<dyn TodoRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { todos, notifier }
    }

    /// Flips completion and nothing else; goes through the same update path
    /// as an edit so `updated_at` is refreshed.
    pub async fn execute(&self, todo_id: Uuid, owner_id: Uuid) -> Result<Todo, DomainError> {
        let mut todo = self
            .todos
            .find(todo_id, owner_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("todo {todo_id}")))?;

        todo.toggle();

        if !self.todos.update(&todo).await? {
            return Err(DomainError::NotFound(format!("todo {todo_id}")));
        }

        notify_outcome(
            &self.notifier,
            todo.owner_id,
            &toggled_message(&todo.text, todo.completed),
        )
        .await;

        Ok(todo)
    }
}

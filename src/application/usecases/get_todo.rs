use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::Todo, repositories::TodoRepository};

pub struct GetTodoUseCase {
    todos: Arc<dyn TodoRepository>,
}

impl GetTodoUseCase {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    pub async fn execute(&self, todo_id: Uuid, owner_id: Uuid) -> Result<Todo, DomainError> {
        self.todos
            .find(todo_id, owner_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("todo {todo_id}")))
    }
}

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::services::notifier::{Notifier, notify_outcome, updated_message},
    domain::{
        errors::DomainError,
        models::{Todo, TodoChanges},
        repositories::TodoRepository,
    },
};

pub struct UpdateTodoUseCase {
    todos: Arc<dyn TodoRepository>,
    notifier: Arc<dyn Notifier>,
}

pub struct UpdateTodoRequest {
    pub owner_id: Uuid,
    pub todo_id: Uuid,
    pub changes: TodoChanges,
}

impl UpdateTodoUseCase {
    pub fn new(todos: Arc<dyn TodoRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { todos, notifier }
    }

    pub async fn execute(&self, request: UpdateTodoRequest) -> Result<Todo, DomainError> {
        let mut todo = self
            .todos
            .find(request.todo_id, request.owner_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", request.todo_id)))?;

        todo.apply(request.changes)?;

        if !self.todos.update(&todo).await? {
            return Err(DomainError::NotFound(format!("todo {}", request.todo_id)));
        }

        notify_outcome(&self.notifier, todo.owner_id, &updated_message()).await;

        Ok(todo)
    }
}

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::{
    application::services::notifier::{Notifier, created_message, notify_outcome},
    domain::{
        errors::DomainError,
        models::{Category, Priority, Todo},
        repositories::TodoRepository,
    },
};

pub struct CreateTodoUseCase {
    todos: Arc<dyn TodoRepository>,
    notifier: Arc<dyn Notifier>,
}

pub struct CreateTodoRequest {
    pub owner_id: Uuid,
    pub text: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub priority: Priority,
    pub category: Category,
}

impl CreateTodoUseCase {
    pub fn new(todos: Arc<dyn TodoRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { todos, notifier }
    }

    pub async fn execute(&self, request: CreateTodoRequest) -> Result<Todo, DomainError> {
        let todo = Todo::new(
            request.owner_id,
            request.text,
            request.due_date,
            request.due_time,
            request.priority,
            request.category,
        )?;

        self.todos.insert(&todo).await?;

        notify_outcome(&self.notifier, todo.owner_id, &created_message(&todo.text)).await;

        Ok(todo)
    }
}

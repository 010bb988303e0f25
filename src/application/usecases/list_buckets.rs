use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    application::services::buckets::{self, Buckets, TodoCounts, View},
    domain::{
        errors::DomainError,
        models::{Category, Todo},
        repositories::TodoRepository,
    },
};

pub struct ListBucketsUseCase {
    todos: Arc<dyn TodoRepository>,
}

pub struct ListBucketsRequest {
    pub owner_id: Uuid,
    /// Reference date for bucketing, normally the caller's current date.
    pub today: NaiveDate,
    pub search: Option<String>,
    pub category: Option<Category>,
    pub view: Option<View>,
}

pub struct BucketedTodos {
    pub buckets: Buckets,
    pub current: Vec<Todo>,
    pub counts: TodoCounts,
}

impl ListBucketsUseCase {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }

    pub async fn execute(&self, request: ListBucketsRequest) -> Result<BucketedTodos, DomainError> {
        // Counts always reflect the full owned set; the search filter only
        // narrows what the buckets show.
        let all = self.todos.list_by_owner(request.owner_id, None).await?;

        let visible = match request.search.as_deref() {
            Some(search) if !search.is_empty() => {
                self.todos
                    .list_by_owner(request.owner_id, Some(search))
                    .await?
            }
            _ => all.clone(),
        };

        let bucketed = buckets::bucketize(&visible, request.today);
        let current =
            buckets::select_current(&visible, &bucketed, request.category, request.view);
        let counts = buckets::count(&all, request.today);

        Ok(BucketedTodos {
            buckets: bucketed,
            current,
            counts,
        })
    }
}

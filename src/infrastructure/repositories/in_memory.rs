use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    models::{Todo, User},
    repositories::{TodoRepository, UserRepository},
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn upsert(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: &Todo) -> anyhow::Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(todo.id, todo.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos
            .get(&id)
            .filter(|t| t.owner_id == owner_id)
            .cloned())
    }

    async fn update(&self, todo: &Todo) -> anyhow::Result<bool> {
        let mut todos = self.todos.write().await;
        match todos.get_mut(&todo.id) {
            Some(existing) if existing.owner_id == todo.owner_id => {
                *existing = todo.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let mut todos = self.todos.write().await;
        match todos.get(&id) {
            Some(existing) if existing.owner_id == owner_id => {
                todos.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        text_contains: Option<&str>,
    ) -> anyhow::Result<Vec<Todo>> {
        let needle = text_contains.map(|s| s.to_lowercase());
        let todos = self.todos.read().await;
        let mut owned: Vec<Todo> = todos
            .values()
            .filter(|t| t.owner_id == owner_id)
            .filter(|t| match &needle {
                Some(needle) => t.text.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect();

        // Due date ascending with undated todos last, newest-created first
        // within a date.
        owned.sort_by(|a, b| match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| b.created_at.cmp(&a.created_at)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.created_at.cmp(&a.created_at),
        });

        Ok(owned)
    }
}

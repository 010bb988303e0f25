use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::domain::{
    models::{Category, Priority, Todo, User},
    repositories::{TodoRepository, UserRepository},
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, email, display_name, created_at, updated_at FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, email, display_name, created_at, updated_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn upsert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, display_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET email = EXCLUDED.email,
                display_name = EXCLUDED.display_name,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, todo: &Todo) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO todos (
                id, owner_id, text, completed, due_date, due_time,
                priority, category, created_at, updated_at
            )
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10)
            "#,
        )
        .bind(todo.id)
        .bind(todo.owner_id)
        .bind(&todo.text)
        .bind(todo.completed)
        .bind(todo.due_date)
        .bind(todo.due_time)
        .bind(todo.priority.as_str())
        .bind(todo.category.as_str())
        .bind(todo.created_at)
        .bind(todo.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Todo>> {
        let record = sqlx::query_as::<_, TodoRecord>(
            r#"
            SELECT id, owner_id, text, completed, due_date, due_time,
                   priority, category, created_at, updated_at
            FROM todos
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        record.map(|record| record.try_into()).transpose()
    }

    async fn update(&self, todo: &Todo) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET text = $3,
                completed = $4,
                due_date = $5,
                due_time = $6,
                priority = $7,
                category = $8,
                updated_at = $9
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(todo.id)
        .bind(todo.owner_id)
        .bind(&todo.text)
        .bind(todo.completed)
        .bind(todo.due_date)
        .bind(todo.due_time)
        .bind(todo.priority.as_str())
        .bind(todo.category.as_str())
        .bind(todo.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM todos WHERE id = $1 AND owner_id = $2"#)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        text_contains: Option<&str>,
    ) -> anyhow::Result<Vec<Todo>> {
        let rows = match text_contains {
            Some(needle) => {
                sqlx::query_as::<_, TodoRecord>(
                    r#"
                    SELECT id, owner_id, text, completed, due_date, due_time,
                           priority, category, created_at, updated_at
                    FROM todos
                    WHERE owner_id = $1
                      AND text ILIKE '%' || $2 || '%'
                    ORDER BY due_date ASC NULLS LAST, created_at DESC
                    "#,
                )
                .bind(owner_id)
                .bind(escape_like(needle))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TodoRecord>(
                    r#"
                    SELECT id, owner_id, text, completed, due_date, due_time,
                           priority, category, created_at, updated_at
                    FROM todos
                    WHERE owner_id = $1
                    ORDER BY due_date ASC NULLS LAST, created_at DESC
                    "#,
                )
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(|record| record.try_into()).collect()
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: Uuid,
    email: String,
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            email: value.email,
            display_name: value.display_name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(FromRow)]
struct TodoRecord {
    id: Uuid,
    owner_id: Uuid,
    text: String,
    completed: bool,
    due_date: Option<NaiveDate>,
    due_time: Option<NaiveTime>,
    priority: String,
    category: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TodoRecord> for Todo {
    type Error = anyhow::Error;

    fn try_from(value: TodoRecord) -> Result<Self, Self::Error> {
        let priority = Priority::from_str(&value.priority)
            .ok_or_else(|| anyhow::anyhow!("unknown priority {}", value.priority))?;
        let category = Category::from_str(&value.category)
            .ok_or_else(|| anyhow::anyhow!("unknown category {}", value.category))?;
        Ok(Self {
            id: value.id,
            owner_id: value.owner_id,
            text: value.text,
            completed: value.completed,
            due_date: value.due_date,
            due_time: value.due_time,
            priority,
            category,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

/// Escapes LIKE metacharacters so a search needle only ever matches
/// literally. `"50%"` must match the text `50%`, not every row.
fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain milk"), "plain milk");
    }
}

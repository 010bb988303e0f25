use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{Todo, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>>;
    async fn upsert(&self, user: &User) -> anyhow::Result<()>;
}

/// Ownership is part of every read and write contract: lookups keyed by an
/// id the caller does not own behave exactly like lookups of an absent id,
/// so the store never reveals whether another user's todo exists.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn insert(&self, todo: &Todo) -> anyhow::Result<()>;

    async fn find(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Todo>>;

    /// Persists a mutated todo. Returns `false` when no row matches the
    /// todo's `(id, owner_id)` pair.
    async fn update(&self, todo: &Todo) -> anyhow::Result<bool>;

    /// Returns `false` when nothing was deleted; deleting the same id twice
    /// reports not-found the second time.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool>;

    /// All todos owned by `owner_id`, optionally narrowed by a
    /// case-insensitive substring match on text. Ordering is stable:
    /// due date ascending with missing dates last, then newest-created first.
    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        text_contains: Option<&str>,
    ) -> anyhow::Result<Vec<Todo>>;
}

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

/// Delivery seam for human-readable outcome messages. The core formats the
/// text; whatever sits behind this trait decides how it reaches the user.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, user_id: Uuid, message: &str) -> anyhow::Result<()>;
}

/// Default collaborator: writes outcomes to the log.
#[derive(Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, user_id: Uuid, message: &str) -> anyhow::Result<()> {
        tracing::info!(%user_id, message, "user notification");
        Ok(())
    }
}

/// Outcome messages ride a side channel; a delivery failure must not undo or
/// fail an already-persisted mutation.
pub async fn notify_outcome(notifier: &Arc<dyn Notifier>, user_id: Uuid, message: &str) {
    if let Err(err) = notifier.notify(user_id, message).await {
        tracing::warn!(%user_id, error = %err, "failed to deliver outcome notification");
    }
}

// Single source for the confirmation texts, so the notified message and the
// message echoed in a response can never drift apart.

pub fn created_message(text: &str) -> String {
    format!("Task \"{text}\" created successfully!")
}

pub fn updated_message() -> String {
    "Task updated successfully!".to_string()
}

pub fn toggled_message(text: &str, completed: bool) -> String {
    let status = if completed {
        "completed"
    } else {
        "marked as pending"
    };
    format!("Task \"{text}\" {status}!")
}

pub fn deleted_message(text: &str) -> String {
    format!("Task \"{text}\" deleted successfully!")
}

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

pub const MAX_TEXT_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Work,
    Home,
    Personal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Home => "home",
            Category::Personal => "personal",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "work" => Some(Category::Work),
            "home" => Some(Category::Home),
            "personal" => Some(Category::Personal),
            _ => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Personal
    }
}

/// A single task owned by exactly one user. The owner is fixed at creation
/// and every mutation refreshes `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub text: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub priority: Priority,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields an edit may change. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoChanges {
    pub text: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub due_time: Option<Option<NaiveTime>>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
}

impl Todo {
    pub fn new(
        owner_id: Uuid,
        text: String,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
        priority: Priority,
        category: Category,
    ) -> Result<Self, DomainError> {
        let text = validate_text(text)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id,
            text,
            completed: false,
            due_date,
            due_time,
            priority,
            category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies an edit in place, re-validating changed fields and refreshing
    /// `updated_at`. The owner and `created_at` never change.
    pub fn apply(&mut self, changes: TodoChanges) -> Result<(), DomainError> {
        if let Some(text) = changes.text {
            self.text = validate_text(text)?;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        if let Some(due_time) = changes.due_time {
            self.due_time = due_time;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Flips the completion flag and nothing else, refreshing `updated_at`.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.updated_at = Utc::now();
    }
}

fn validate_text(text: String) -> Result<String, DomainError> {
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(DomainError::Validation("task text cannot be empty".into()));
    }
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::Validation(format!(
            "task text cannot exceed {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(text)
}

use chrono::{NaiveDate, NaiveTime};
use poem_openapi::Object;
use uuid::Uuid;

use crate::presentation::models::{CategoryKind, PriorityKind};

#[derive(Object)]
pub struct AuthResponseDto {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Object)]
pub struct TodoDto {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub priority: PriorityKind,
    pub category: CategoryKind,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Object)]
pub struct TodoCountsDto {
    pub personal: u32,
    pub work: u32,
    pub home: u32,
    pub completed_count: u32,
    pub missed_count: u32,
    pub completion_rate: f64,
}

#[derive(Object)]
pub struct BucketedTodosDto {
    pub today: Vec<TodoDto>,
    pub tomorrow: Vec<TodoDto>,
    pub upcoming: Vec<TodoDto>,
    pub overdue: Vec<TodoDto>,
    pub completed: Vec<TodoDto>,
    /// The single list selected by the category/view precedence.
    pub current: Vec<TodoDto>,
    pub counts: TodoCountsDto,
}

#[derive(Object)]
pub struct TodoMutationDto {
    pub todo: TodoDto,
    pub message: String,
}

#[derive(Object)]
pub struct MessageDto {
    pub message: String,
}

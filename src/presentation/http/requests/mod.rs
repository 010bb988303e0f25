use chrono::{NaiveDate, NaiveTime};
use poem_openapi::{Object, types::Email};

use crate::presentation::models::{CategoryKind, PriorityKind};

#[derive(Object, Debug)]
pub struct AuthRequestDto {
    pub email: Email,
    pub display_name: Option<String>,
}

#[derive(Object, Debug)]
pub struct RefreshRequestDto {
    #[oai(validator(min_length = 1))]
    pub refresh_token: String,
}

#[derive(Object, Debug)]
pub struct CreateTodoRequestDto {
    #[oai(validator(min_length = 1, max_length = 200))]
    pub text: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    #[oai(default)]
    pub priority: PriorityKind,
    #[oai(default)]
    pub category: CategoryKind,
}

/// Absent fields are left unchanged. Clearing a due date/time is an explicit
/// request, since "absent" already means "keep".
#[derive(Object, Debug)]
pub struct UpdateTodoRequestDto {
    #[oai(validator(min_length = 1, max_length = 200))]
    pub text: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub priority: Option<PriorityKind>,
    pub category: Option<CategoryKind>,
    #[oai(default)]
    pub clear_due_date: bool,
    #[oai(default)]
    pub clear_due_time: bool,
}

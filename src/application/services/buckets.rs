use chrono::{Days, NaiveDate};

use crate::domain::models::{Category, Todo};

/// Named view a caller can ask for explicitly. `Missed` is the user-facing
/// alias for the overdue bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Today,
    Upcoming,
    Completed,
    Missed,
}

/// Temporal/status views over one user's todos. Buckets are not mutually
/// exclusive: a completed task due today sits in both `today` and
/// `completed`, so an item is always visible under its completion status and
/// independently under its temporal status.
#[derive(Debug, Default)]
pub struct Buckets {
    pub today: Vec<Todo>,
    pub tomorrow: Vec<Todo>,
    pub upcoming: Vec<Todo>,
    pub overdue: Vec<Todo>,
    pub completed: Vec<Todo>,
}

/// Sidebar counts over the full owned set, never narrowed by search.
#[derive(Debug, Default, PartialEq)]
pub struct TodoCounts {
    pub personal: usize,
    pub work: usize,
    pub home: usize,
    pub completed_count: usize,
    pub missed_count: usize,
    pub completion_rate: f64,
}

pub fn is_due_today(todo: &Todo, today: NaiveDate) -> bool {
    match todo.due_date {
        Some(due) => due == today,
        // Undated todos created today count as today's work.
        None => todo.created_at.date_naive() == today,
    }
}

pub fn is_due_tomorrow(todo: &Todo, today: NaiveDate) -> bool {
    match (todo.due_date, today.checked_add_days(Days::new(1))) {
        (Some(due), Some(tomorrow)) => due == tomorrow,
        _ => false,
    }
}

pub fn is_upcoming(todo: &Todo, today: NaiveDate) -> bool {
    match (todo.due_date, today.checked_add_days(Days::new(1))) {
        (Some(due), Some(tomorrow)) => due > tomorrow,
        _ => false,
    }
}

/// Overdue means past due and still open. A completed task with a past due
/// date is never overdue.
pub fn is_overdue(todo: &Todo, today: NaiveDate) -> bool {
    matches!(todo.due_date, Some(due) if due < today) && !todo.completed
}

pub fn bucketize(todos: &[Todo], today: NaiveDate) -> Buckets {
    let mut buckets = Buckets::default();
    for todo in todos {
        if is_due_today(todo, today) {
            buckets.today.push(todo.clone());
        }
        if is_due_tomorrow(todo, today) {
            buckets.tomorrow.push(todo.clone());
        }
        if is_upcoming(todo, today) {
            buckets.upcoming.push(todo.clone());
        }
        if is_overdue(todo, today) {
            buckets.overdue.push(todo.clone());
        }
        if todo.completed {
            buckets.completed.push(todo.clone());
        }
    }
    buckets
}

/// Picks the single "current" list. Precedence, first match wins: explicit
/// category filter, then an explicit view, then the today bucket.
pub fn select_current(
    todos: &[Todo],
    buckets: &Buckets,
    category: Option<Category>,
    view: Option<View>,
) -> Vec<Todo> {
    if let Some(category) = category {
        return todos
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect();
    }
    match view {
        Some(View::Upcoming) => buckets.upcoming.clone(),
        Some(View::Today) => buckets.today.clone(),
        Some(View::Completed) => buckets.completed.clone(),
        Some(View::Missed) => buckets.overdue.clone(),
        None => buckets.today.clone(),
    }
}

pub fn count(todos: &[Todo], today: NaiveDate) -> TodoCounts {
    let mut counts = TodoCounts::default();
    for todo in todos {
        match todo.category {
            Category::Personal => counts.personal += 1,
            Category::Work => counts.work += 1,
            Category::Home => counts.home += 1,
        }
        if todo.completed {
            counts.completed_count += 1;
        }
        if is_overdue(todo, today) {
            counts.missed_count += 1;
        }
    }
    counts.completion_rate = completion_rate(counts.completed_count, todos.len());
    counts
}

/// Percentage of completed todos, rounded to one decimal. An empty set has a
/// rate of zero rather than dividing by zero.
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (completed as f64 / total as f64 * 1000.0).round() / 10.0
}

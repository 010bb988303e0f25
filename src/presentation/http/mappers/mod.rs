use crate::{
    application::{services::buckets::TodoCounts, usecases::list_buckets::BucketedTodos},
    domain::models::Todo,
    presentation::http::responses::{BucketedTodosDto, TodoCountsDto, TodoDto},
};

pub fn map_todo(todo: &Todo) -> TodoDto {
    TodoDto {
        id: todo.id,
        text: todo.text.clone(),
        completed: todo.completed,
        due_date: todo.due_date,
        due_time: todo.due_time,
        priority: todo.priority.into(),
        category: todo.category.into(),
        created_at: todo.created_at.to_rfc3339(),
        updated_at: todo.updated_at.to_rfc3339(),
    }
}

pub fn map_counts(counts: &TodoCounts) -> TodoCountsDto {
    TodoCountsDto {
        personal: counts.personal as u32,
        work: counts.work as u32,
        home: counts.home as u32,
        completed_count: counts.completed_count as u32,
        missed_count: counts.missed_count as u32,
        completion_rate: counts.completion_rate,
    }
}

pub fn map_bucketed(result: &BucketedTodos) -> BucketedTodosDto {
    let map_all = |todos: &[Todo]| todos.iter().map(map_todo).collect();
    BucketedTodosDto {
        today: map_all(&result.buckets.today),
        tomorrow: map_all(&result.buckets.tomorrow),
        upcoming: map_all(&result.buckets.upcoming),
        overdue: map_all(&result.buckets.overdue),
        completed: map_all(&result.buckets.completed),
        current: map_all(&result.current),
        counts: map_counts(&result.counts),
    }
}

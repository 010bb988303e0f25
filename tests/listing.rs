mod common;

use chrono::{Days, Duration, NaiveDate, Utc};
use uuid::Uuid;

use common::Harness;
use tasklist::application::usecases::{
    create_todo::CreateTodoRequest, list_buckets::ListBucketsRequest,
};
use tasklist::domain::models::{Category, Priority, Todo};
use tasklist::domain::repositories::TodoRepository;

fn make_todo(
    owner_id: Uuid,
    text: &str,
    due_date: Option<NaiveDate>,
    created_offset_secs: i64,
) -> Todo {
    let mut todo = Todo::new(
        owner_id,
        text.to_string(),
        due_date,
        None,
        Priority::Medium,
        Category::Personal,
    )
    .unwrap();
    todo.created_at += Duration::seconds(created_offset_secs);
    todo.updated_at = todo.created_at;
    todo
}

fn list_request(owner_id: Uuid, today: NaiveDate) -> ListBucketsRequest {
    ListBucketsRequest {
        owner_id,
        today,
        search: None,
        category: None,
        view: None,
    }
}

#[tokio::test]
async fn listing_orders_by_due_date_with_undated_last() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    let base = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();

    let undated_old = make_todo(owner, "undated old", None, 0);
    let undated_new = make_todo(owner, "undated new", None, 60);
    let due_late = make_todo(owner, "due late", base.checked_add_days(Days::new(9)), 120);
    let due_soon_old = make_todo(owner, "due soon old", Some(base), 180);
    let due_soon_new = make_todo(owner, "due soon new", Some(base), 240);

    for todo in [
        &due_late,
        &undated_old,
        &due_soon_old,
        &undated_new,
        &due_soon_new,
    ] {
        harness.todos.insert(todo).await.unwrap();
    }

    let listed = harness.todos.list_by_owner(owner, None).await.unwrap();
    let texts: Vec<&str> = listed.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "due soon new",
            "due soon old",
            "due late",
            "undated new",
            "undated old",
        ]
    );
}

#[tokio::test]
async fn listing_order_is_independent_of_insertion_order() {
    let owner = Uuid::new_v4();
    let base = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let todos = vec![
        make_todo(owner, "a", Some(base), 0),
        make_todo(owner, "b", base.checked_add_days(Days::new(3)), 30),
        make_todo(owner, "c", None, 60),
        make_todo(owner, "d", Some(base), 90),
    ];

    let forward = Harness::new();
    for todo in &todos {
        forward.todos.insert(todo).await.unwrap();
    }
    let reversed = Harness::new();
    for todo in todos.iter().rev() {
        reversed.todos.insert(todo).await.unwrap();
    }

    let ids = |listed: Vec<Todo>| listed.into_iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(
        ids(forward.todos.list_by_owner(owner, None).await.unwrap()),
        ids(reversed.todos.list_by_owner(owner, None).await.unwrap()),
    );
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    harness
        .todos
        .insert(&make_todo(owner, "Buy MILK at the store", None, 0))
        .await
        .unwrap();
    harness
        .todos
        .insert(&make_todo(owner, "Call dentist", None, 30))
        .await
        .unwrap();

    let matched = harness
        .todos
        .list_by_owner(owner, Some("milk"))
        .await
        .unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].text, "Buy MILK at the store");
}

#[tokio::test]
async fn search_matches_wildcard_characters_literally() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    harness
        .todos
        .insert(&make_todo(owner, "Donate 50% of books", None, 0))
        .await
        .unwrap();
    harness
        .todos
        .insert(&make_todo(owner, "Donate 500 books", None, 30))
        .await
        .unwrap();
    harness
        .todos
        .insert(&make_todo(owner, "rename a_b", None, 60))
        .await
        .unwrap();
    harness
        .todos
        .insert(&make_todo(owner, "rename aXb", None, 90))
        .await
        .unwrap();

    let percent = harness
        .todos
        .list_by_owner(owner, Some("50%"))
        .await
        .unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].text, "Donate 50% of books");

    let underscore = harness
        .todos
        .list_by_owner(owner, Some("a_b"))
        .await
        .unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].text, "rename a_b");
}

#[tokio::test]
async fn buy_milk_scenario() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    let today = Utc::now().date_naive();

    let created = harness
        .create
        .execute(CreateTodoRequest {
            owner_id: owner,
            text: "Buy milk".into(),
            due_date: Some(today),
            due_time: None,
            priority: Priority::Low,
            category: Category::Home,
        })
        .await
        .unwrap();

    let result = harness.list.execute(list_request(owner, today)).await.unwrap();
    assert!(result.buckets.today.iter().any(|t| t.id == created.id));
    assert_eq!(result.counts.home, 1);
    assert_eq!(result.counts.completed_count, 0);

    harness.toggle.execute(created.id, owner).await.unwrap();

    let result = harness.list.execute(list_request(owner, today)).await.unwrap();
    assert!(result.buckets.completed.iter().any(|t| t.id == created.id));
    // Completion does not evict the task from its temporal bucket.
    assert!(result.buckets.today.iter().any(|t| t.id == created.id));
    assert_eq!(result.counts.completed_count, 1);
    assert_eq!(result.counts.completion_rate, 100.0);
}

#[tokio::test]
async fn past_due_open_todo_is_missed() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    let today = Utc::now().date_naive();

    harness
        .create
        .execute(CreateTodoRequest {
            owner_id: owner,
            text: "Pay rent".into(),
            due_date: today.checked_sub_days(Days::new(3)),
            due_time: None,
            priority: Priority::High,
            category: Category::Personal,
        })
        .await
        .unwrap();

    let result = harness.list.execute(list_request(owner, today)).await.unwrap();
    assert_eq!(result.buckets.overdue.len(), 1);
    assert!(result.counts.missed_count >= 1);
}

#[tokio::test]
async fn search_narrows_buckets_but_not_counts() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    let today = Utc::now().date_naive();

    for text in ["Buy milk", "Buy bread", "Call mom"] {
        harness
            .create
            .execute(CreateTodoRequest {
                owner_id: owner,
                text: text.into(),
                due_date: Some(today),
                due_time: None,
                priority: Priority::Medium,
                category: Category::Personal,
            })
            .await
            .unwrap();
    }

    let result = harness
        .list
        .execute(ListBucketsRequest {
            owner_id: owner,
            today,
            search: Some("buy".into()),
            category: None,
            view: None,
        })
        .await
        .unwrap();

    assert_eq!(result.buckets.today.len(), 2);
    assert_eq!(result.current.len(), 2);
    assert_eq!(result.counts.personal, 3);
}

#[tokio::test]
async fn listing_ignores_other_owners() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();
    let today = Utc::now().date_naive();

    harness
        .todos
        .insert(&make_todo(owner, "mine", Some(today), 0))
        .await
        .unwrap();
    harness
        .todos
        .insert(&make_todo(other, "theirs", Some(today), 0))
        .await
        .unwrap();

    let result = harness.list.execute(list_request(owner, today)).await.unwrap();
    assert_eq!(result.buckets.today.len(), 1);
    assert_eq!(result.buckets.today[0].text, "mine");
    assert_eq!(result.counts.personal, 1);
}

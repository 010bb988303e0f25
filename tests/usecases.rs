mod common;

use chrono::{Days, Utc};
use uuid::Uuid;

use common::Harness;
use tasklist::application::usecases::{
    create_todo::CreateTodoRequest, update_todo::UpdateTodoRequest,
};
use tasklist::domain::errors::DomainError;
use tasklist::domain::models::{Category, Priority, TodoChanges};

fn create_request(owner_id: Uuid, text: &str) -> CreateTodoRequest {
    CreateTodoRequest {
        owner_id,
        text: text.to_string(),
        due_date: None,
        due_time: None,
        priority: Priority::Medium,
        category: Category::Personal,
    }
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();

    let created = harness
        .create
        .execute(create_request(owner, "Buy milk"))
        .await
        .unwrap();

    let fetched = harness.get.execute(created.id, owner).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.text, "Buy milk");
    assert!(!fetched.completed);
    assert!(fetched.created_at <= fetched.updated_at);

    let messages = harness.notifier.messages();
    assert_eq!(messages, vec!["Task \"Buy milk\" created successfully!"]);
}

#[tokio::test]
async fn create_rejects_blank_text() {
    let harness = Harness::new();
    let result = harness
        .create
        .execute(create_request(Uuid::new_v4(), "   "))
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert!(harness.notifier.messages().is_empty());
}

#[tokio::test]
async fn update_edits_fields_and_refreshes_updated_at() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    let due = Utc::now().date_naive().checked_add_days(Days::new(2)).unwrap();

    let created = harness
        .create
        .execute(create_request(owner, "Write report"))
        .await
        .unwrap();

    let updated = harness
        .update
        .execute(UpdateTodoRequest {
            owner_id: owner,
            todo_id: created.id,
            changes: TodoChanges {
                text: Some("Write quarterly report".into()),
                due_date: Some(Some(due)),
                priority: Some(Priority::High),
                category: Some(Category::Work),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(updated.text, "Write quarterly report");
    assert_eq!(updated.due_date, Some(due));
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.category, Category::Work);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_can_clear_due_date() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    let mut request = create_request(owner, "Dentist");
    request.due_date = Some(Utc::now().date_naive());

    let created = harness.create.execute(request).await.unwrap();
    let updated = harness
        .update
        .execute(UpdateTodoRequest {
            owner_id: owner,
            todo_id: created.id,
            changes: TodoChanges {
                due_date: Some(None),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(updated.due_date, None);
}

#[tokio::test]
async fn failed_update_leaves_stored_todo_untouched() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();

    let created = harness
        .create
        .execute(create_request(owner, "Original text"))
        .await
        .unwrap();

    let result = harness
        .update
        .execute(UpdateTodoRequest {
            owner_id: owner,
            todo_id: created.id,
            changes: TodoChanges {
                text: Some("".into()),
                ..Default::default()
            },
        })
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    let stored = harness.get.execute(created.id, owner).await.unwrap();
    assert_eq!(stored.text, "Original text");
    assert_eq!(stored.updated_at, created.updated_at);
}

#[tokio::test]
async fn toggle_flips_only_completion() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();

    let created = harness
        .create
        .execute(create_request(owner, "Water plants"))
        .await
        .unwrap();

    let toggled = harness.toggle.execute(created.id, owner).await.unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.text, created.text);
    assert_eq!(toggled.due_date, created.due_date);
    assert_eq!(toggled.priority, created.priority);
    assert_eq!(toggled.category, created.category);
    assert!(toggled.updated_at >= created.updated_at);

    let toggled_back = harness.toggle.execute(created.id, owner).await.unwrap();
    assert!(!toggled_back.completed);

    let messages = harness.notifier.messages();
    assert!(messages.contains(&"Task \"Water plants\" completed!".to_string()));
    assert!(messages.contains(&"Task \"Water plants\" marked as pending!".to_string()));
}

#[tokio::test]
async fn second_delete_reports_not_found() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();

    let created = harness
        .create
        .execute(create_request(owner, "Take out trash"))
        .await
        .unwrap();

    harness.delete.execute(created.id, owner).await.unwrap();
    assert!(harness
        .notifier
        .messages()
        .contains(&"Task \"Take out trash\" deleted successfully!".to_string()));

    let result = harness.delete.execute(created.id, owner).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn other_users_todos_are_invisible() {
    let harness = Harness::new();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let created = harness
        .create
        .execute(create_request(owner, "Private task"))
        .await
        .unwrap();

    let get = harness.get.execute(created.id, stranger).await;
    assert!(matches!(get, Err(DomainError::NotFound(_))));

    let update = harness
        .update
        .execute(UpdateTodoRequest {
            owner_id: stranger,
            todo_id: created.id,
            changes: TodoChanges {
                text: Some("Hijacked".into()),
                ..Default::default()
            },
        })
        .await;
    assert!(matches!(update, Err(DomainError::NotFound(_))));

    let delete = harness.delete.execute(created.id, stranger).await;
    assert!(matches!(delete, Err(DomainError::NotFound(_))));

    // The owner still sees the untouched todo.
    let stored = harness.get.execute(created.id, owner).await.unwrap();
    assert_eq!(stored.text, "Private task");
}

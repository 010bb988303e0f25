use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use tasklist::application::services::notifier::Notifier;
use tasklist::application::usecases::{
    create_todo::CreateTodoUseCase, delete_todo::DeleteTodoUseCase, get_todo::GetTodoUseCase,
    list_buckets::ListBucketsUseCase, toggle_todo::ToggleTodoUseCase,
    update_todo::UpdateTodoUseCase,
};
use tasklist::infrastructure::repositories::in_memory::InMemoryTodoRepository;

/// Captures outcome messages so tests can assert on the confirmation text.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, _user_id: Uuid, message: &str) -> anyhow::Result<()> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub todos: Arc<InMemoryTodoRepository>,
    pub notifier: Arc<RecordingNotifier>,
    pub create: CreateTodoUseCase,
    pub get: GetTodoUseCase,
    pub update: UpdateTodoUseCase,
    pub toggle: ToggleTodoUseCase,
    pub delete: DeleteTodoUseCase,
    pub list: ListBucketsUseCase,
}

impl Harness {
    pub fn new() -> Self {
        let todos = Arc::new(InMemoryTodoRepository::new());
        let notifier = Arc::new(RecordingNotifier::default());
        Self {
            create: CreateTodoUseCase::new(todos.clone(), notifier.clone()),
            get: GetTodoUseCase::new(todos.clone()),
            update: UpdateTodoUseCase::new(todos.clone(), notifier.clone()),
            toggle: ToggleTodoUseCase::new(todos.clone(), notifier.clone()),
            delete: DeleteTodoUseCase::new(todos.clone(), notifier.clone()),
            list: ListBucketsUseCase::new(todos.clone()),
            todos,
            notifier,
        }
    }
}

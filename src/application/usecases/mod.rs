pub mod authenticate_user;
pub mod create_todo;
pub mod delete_todo;
pub mod get_todo;
pub mod list_buckets;
pub mod toggle_todo;
pub mod update_todo;

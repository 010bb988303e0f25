pub mod todo;
pub mod user;

pub use todo::{Category, Priority, Todo, TodoChanges, MAX_TEXT_LENGTH};
pub use user::User;

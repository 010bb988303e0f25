use poem_openapi::Enum;

use crate::application::services::buckets::View;
use crate::domain::models::{Category, Priority};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum PriorityKind {
    #[oai(rename = "low")]
    Low,
    #[oai(rename = "medium")]
    Medium,
    #[oai(rename = "high")]
    High,
}

impl Default for PriorityKind {
    fn default() -> Self {
        PriorityKind::Medium
    }
}

impl From<PriorityKind> for Priority {
    fn from(value: PriorityKind) -> Self {
        match value {
            PriorityKind::Low => Priority::Low,
            PriorityKind::Medium => Priority::Medium,
            PriorityKind::High => Priority::High,
        }
    }
}

impl From<Priority> for PriorityKind {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Low => PriorityKind::Low,
            Priority::Medium => PriorityKind::Medium,
            Priority::High => PriorityKind::High,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum CategoryKind {
    #[oai(rename = "work")]
    Work,
    #[oai(rename = "home")]
    Home,
    #[oai(rename = "personal")]
    Personal,
}

impl Default for CategoryKind {
    fn default() -> Self {
        CategoryKind::Personal
    }
}

impl From<CategoryKind> for Category {
    fn from(value: CategoryKind) -> Self {
        match value {
            CategoryKind::Work => Category::Work,
            CategoryKind::Home => Category::Home,
            CategoryKind::Personal => Category::Personal,
        }
    }
}

impl From<Category> for CategoryKind {
    fn from(value: Category) -> Self {
        match value {
            Category::Work => CategoryKind::Work,
            Category::Home => CategoryKind::Home,
            Category::Personal => CategoryKind::Personal,
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ViewKind {
    #[oai(rename = "today")]
    Today,
    #[oai(rename = "upcoming")]
    Upcoming,
    #[oai(rename = "completed")]
    Completed,
    #[oai(rename = "missed")]
    Missed,
}

impl From<ViewKind> for View {
    fn from(value: ViewKind) -> Self {
        match value {
            ViewKind::Today => View::Today,
            ViewKind::Upcoming => View::Upcoming,
            ViewKind::Completed => View::Completed,
            ViewKind::Missed => View::Missed,
        }
    }
}

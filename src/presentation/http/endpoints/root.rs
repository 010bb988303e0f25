use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::services::jwt::JwtServiceConfig;
use crate::application::usecases::{
    authenticate_user::AuthenticateUserUseCase, create_todo::CreateTodoUseCase,
    delete_todo::DeleteTodoUseCase, get_todo::GetTodoUseCase, list_buckets::ListBucketsUseCase,
    toggle_todo::ToggleTodoUseCase, update_todo::UpdateTodoUseCase,
};
use crate::domain::errors::DomainError;

#[derive(Clone)]
pub struct ApiState {
    pub auth_usecase: Arc<AuthenticateUserUseCase>,
    pub create_todo_usecase: Arc<CreateTodoUseCase>,
    pub get_todo_usecase: Arc<GetTodoUseCase>,
    pub update_todo_usecase: Arc<UpdateTodoUseCase>,
    pub toggle_todo_usecase: Arc<ToggleTodoUseCase>,
    pub delete_todo_usecase: Arc<DeleteTodoUseCase>,
    pub list_buckets_usecase: Arc<ListBucketsUseCase>,
    pub jwt_config: JwtServiceConfig,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Auth,
    Todos,
}

pub fn domain_error(err: DomainError) -> poem::Error {
    use poem::http::StatusCode;
    let status = match &err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "request failed");
    }
    poem::Error::from_string(err.to_string(), status)
}

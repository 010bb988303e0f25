use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use crate::{
    application::{
        services::notifier::{created_message, deleted_message, toggled_message, updated_message},
        usecases::{
            create_todo::CreateTodoRequest,
            list_buckets::ListBucketsRequest,
            update_todo::UpdateTodoRequest,
        },
    },
    domain::models::TodoChanges,
    presentation::{
        http::{
            endpoints::root::{ApiState, EndpointsTags, domain_error},
            mappers::{map_bucketed, map_todo},
            requests::{CreateTodoRequestDto, UpdateTodoRequestDto},
            responses::{BucketedTodosDto, MessageDto, TodoDto, TodoMutationDto},
            security::JwtAuth,
        },
        models::{CategoryKind, ViewKind},
    },
};

#[derive(Clone)]
pub struct TodoEndpoints {
    state: Arc<ApiState>,
}

impl TodoEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl TodoEndpoints {
    /// Bucketed listing of the caller's todos, with sidebar counts and the
    /// "current" list chosen by category/view precedence.
    #[oai(path = "/todos", method = "get", tag = EndpointsTags::Todos)]
    pub async fn list_todos(
        &self,
        auth: JwtAuth,
        search: Query<Option<String>>,
        category: Query<Option<CategoryKind>>,
        view: Query<Option<ViewKind>>,
    ) -> poem::Result<Json<BucketedTodosDto>> {
        let user = auth.into_user(&self.state.jwt_config)?;

        let result = self
            .state
            .list_buckets_usecase
            .execute(ListBucketsRequest {
                owner_id: user.user_id,
                today: Utc::now().date_naive(),
                search: search.0,
                category: category.0.map(Into::into),
                view: view.0.map(Into::into),
            })
            .await
            .map_err(domain_error)?;

        Ok(Json(map_bucketed(&result)))
    }

    #[oai(path = "/todos", method = "post", tag = EndpointsTags::Todos)]
    pub async fn create_todo(
        &self,
        auth: JwtAuth,
        request: Json<CreateTodoRequestDto>,
    ) -> poem::Result<Json<TodoMutationDto>> {
        let user = auth.into_user(&self.state.jwt_config)?;

        let todo = self
            .state
            .create_todo_usecase
            .execute(CreateTodoRequest {
                owner_id: user.user_id,
                text: request.text.clone(),
                due_date: request.due_date,
                due_time: request.due_time,
                priority: request.priority.into(),
                category: request.category.into(),
            })
            .await
            .map_err(domain_error)?;

        let message = created_message(&todo.text);
        Ok(Json(TodoMutationDto {
            todo: map_todo(&todo),
            message,
        }))
    }

    #[oai(path = "/todos/:todo_id", method = "get", tag = EndpointsTags::Todos)]
    pub async fn get_todo(
        &self,
        auth: JwtAuth,
        todo_id: Path<Uuid>,
    ) -> poem::Result<Json<TodoDto>> {
        let user = auth.into_user(&self.state.jwt_config)?;

        let todo = self
            .state
            .get_todo_usecase
            .execute(todo_id.0, user.user_id)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_todo(&todo)))
    }

    #[oai(path = "/todos/:todo_id", method = "put", tag = EndpointsTags::Todos)]
    pub async fn update_todo(
        &self,
        auth: JwtAuth,
        todo_id: Path<Uuid>,
        request: Json<UpdateTodoRequestDto>,
    ) -> poem::Result<Json<TodoMutationDto>> {
        let user = auth.into_user(&self.state.jwt_config)?;

        let changes = TodoChanges {
            text: request.text.clone(),
            due_date: if request.clear_due_date {
                Some(None)
            } else {
                request.due_date.map(Some)
            },
            due_time: if request.clear_due_time {
                Some(None)
            } else {
                request.due_time.map(Some)
            },
            priority: request.priority.map(Into::into),
            category: request.category.map(Into::into),
        };

        let todo = self
            .state
            .update_todo_usecase
            .execute(UpdateTodoRequest {
                owner_id: user.user_id,
                todo_id: todo_id.0,
                changes,
            })
            .await
            .map_err(domain_error)?;

        Ok(Json(TodoMutationDto {
            todo: map_todo(&todo),
            message: updated_message(),
        }))
    }

    #[oai(
        path = "/todos/:todo_id/toggle",
        method = "post",
        tag = EndpointsTags::Todos
    )]
    pub async fn toggle_todo(
        &self,
        auth: JwtAuth,
        todo_id: Path<Uuid>,
    ) -> poem::Result<Json<TodoMutationDto>> {
        let user = auth.into_user(&self.state.jwt_config)?;

        let todo = self
            .state
            .toggle_todo_usecase
            .execute(todo_id.0, user.user_id)
            .await
            .map_err(domain_error)?;

        let message = toggled_message(&todo.text, todo.completed);
        Ok(Json(TodoMutationDto {
            todo: map_todo(&todo),
            message,
        }))
    }

    #[oai(
        path = "/todos/:todo_id",
        method = "delete",
        tag = EndpointsTags::Todos
    )]
    pub async fn delete_todo(
        &self,
        auth: JwtAuth,
        todo_id: Path<Uuid>,
    ) -> poem::Result<Json<MessageDto>> {
        let user = auth.into_user(&self.state.jwt_config)?;

        let todo = self
            .state
            .delete_todo_usecase
            .execute(todo_id.0, user.user_id)
            .await
            .map_err(domain_error)?;

        Ok(Json(MessageDto {
            message: deleted_message(&todo.text),
        }))
    }
}

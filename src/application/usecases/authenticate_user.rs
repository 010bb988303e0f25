use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    application::services::jwt::{JwtService, JwtServiceConfig, TokenPair},
    domain::{errors::DomainError, models::User, repositories::UserRepository},
};

/// Login-or-register by email. Credential checking itself stays with the
/// external identity collaborator; this use case only maps an email to a
/// stable user id and issues tokens for it.
pub struct AuthenticateUserUseCase {
    users: Arc<dyn UserRepository>,
    jwt: JwtService,
}

pub struct AuthRequest {
    pub email: String,
    pub display_name: Option<String>,
}

impl AuthenticateUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>, jwt_config: JwtServiceConfig) -> Self {
        Self {
            users,
            jwt: JwtService::new(jwt_config),
        }
    }

    pub async fn execute(&self, request: AuthRequest) -> Result<TokenPair, DomainError> {
        let mut user = match self.users.find_by_email(&request.email).await? {
            Some(existing) => existing,
            None => {
                let now = Utc::now();
                User {
                    id: Uuid::new_v4(),
                    email: request.email.clone(),
                    display_name: None,
                    created_at: now,
                    updated_at: now,
                }
            }
        };

        user.display_name = user.display_name.or(request.display_name);
        user.updated_at = Utc::now();
        self.users.upsert(&user).await?;

        Ok(self.jwt.issue_pair(&user)?)
    }

    pub async fn refresh(&self, user_id: Uuid) -> Result<TokenPair, DomainError> {
        let user = self
            .users
            .get(&user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {user_id}")))?;

        Ok(self.jwt.issue_pair(&user)?)
    }
}

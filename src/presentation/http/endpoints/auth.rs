use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::{services::jwt::JwtService, usecases::authenticate_user::AuthRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags, domain_error},
        requests::{AuthRequestDto, RefreshRequestDto},
        responses::AuthResponseDto,
    },
};

#[derive(Clone)]
pub struct AuthEndpoints {
    state: Arc<ApiState>,
}

impl AuthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl AuthEndpoints {
    #[oai(path = "/auth/login", method = "post", tag = EndpointsTags::Auth)]
    pub async fn login(
        &self,
        request: Json<AuthRequestDto>,
    ) -> poem::Result<Json<AuthResponseDto>> {
        let payload = AuthRequest {
            email: request.email.0.clone(),
            display_name: request.display_name.clone(),
        };

        let tokens = self
            .state
            .auth_usecase
            .execute(payload)
            .await
            .map_err(domain_error)?;

        Ok(Json(AuthResponseDto {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }))
    }

    #[oai(path = "/auth/refresh", method = "post", tag = EndpointsTags::Auth)]
    pub async fn refresh(
        &self,
        request: Json<RefreshRequestDto>,
    ) -> poem::Result<Json<AuthResponseDto>> {
        let service = JwtService::new(self.state.jwt_config.clone());
        let claims = service.verify(&request.refresh_token).map_err(|_| {
            poem::Error::from_string("invalid or expired token", StatusCode::UNAUTHORIZED)
        })?;

        let tokens = self
            .state
            .auth_usecase
            .refresh(claims.sub)
            .await
            .map_err(domain_error)?;

        Ok(Json(AuthResponseDto {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }))
    }
}

use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::cart::use_cases::clear_cart::ClearCartUseCase;

use crate::api::auth::dto::UserResponse;
use crate::api::error::ErrorResponse;
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    clear_cart_use_case: Arc<dyn ClearCartUseCase>,
}

impl AuthApi {
    pub fn new(clear_cart_use_case: Arc<dyn ClearCartUseCase>) -> Self {
        Self {
            clear_cart_use_case,
        }
    }
}

/// Auth API
///
/// Sign-in itself happens at the identity provider; this surface only echoes
/// the attested identity and runs the server side of signing out.
#[OpenApi]
impl AuthApi {
    /// Who am I
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn me(&self, auth: FirebaseBearer) -> MeResponse {
        MeResponse::Ok(Json(UserResponse::from(&auth.0)))
    }

    /// Sign out
    ///
    /// Ends the session server-side: the caller's cart and its persisted
    /// copy are dropped so the next account on a shared device never sees
    /// someone else's selection.
    #[oai(path = "/auth/sign-out", method = "post", tag = "ApiTags::Auth")]
    async fn sign_out(&self, auth: FirebaseBearer) -> SignOutResponse {
        self.clear_cart_use_case.execute(&auth.0.id).await;
        SignOutResponse::NoContent
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum MeResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignOutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

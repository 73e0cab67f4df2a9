use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::CurrentUser;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UserResponse {
    /// Identity provider uid
    pub uid: String,
    pub email: String,
}

impl From<&CurrentUser> for UserResponse {
    fn from(user: &CurrentUser) -> Self {
        Self {
            uid: user.id.to_string(),
            email: user.email.clone(),
        }
    }
}

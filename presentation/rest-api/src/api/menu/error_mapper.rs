use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::MenuError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MenuError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MenuError::DataIntegrity => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DataIntegrityError",
                "menu.data_integrity",
            ),
            MenuError::CatalogNotEmpty => {
                (StatusCode::CONFLICT, "Conflict", "menu.catalog_not_empty")
            }
            MenuError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

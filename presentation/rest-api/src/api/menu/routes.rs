use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};
use serde_json::Value;

use business::domain::product::use_cases::export_menu::ExportMenuUseCase;
use business::domain::product::use_cases::get_menu::{GetMenuParams, GetMenuUseCase};
use business::domain::product::use_cases::seed_menu::SeedMenuUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::menu::dto::{MenuItemResponse, SeedResultResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;
use crate::config::identity_config::AdminPolicy;

pub struct MenuApi {
    get_menu_use_case: Arc<dyn GetMenuUseCase>,
    seed_menu_use_case: Arc<dyn SeedMenuUseCase>,
    export_menu_use_case: Arc<dyn ExportMenuUseCase>,
    admins: Arc<AdminPolicy>,
}

impl MenuApi {
    pub fn new(
        get_menu_use_case: Arc<dyn GetMenuUseCase>,
        seed_menu_use_case: Arc<dyn SeedMenuUseCase>,
        export_menu_use_case: Arc<dyn ExportMenuUseCase>,
        admins: Arc<AdminPolicy>,
    ) -> Self {
        Self {
            get_menu_use_case,
            seed_menu_use_case,
            export_menu_use_case,
            admins,
        }
    }

    fn forbidden() -> Json<ErrorResponse> {
        Json(ErrorResponse::new("Forbidden", "auth.admin_required"))
    }
}

/// Menu API
///
/// Public read access to the validated menu plus the administrative
/// seed and export operations.
#[OpenApi]
impl MenuApi {
    /// List the menu
    ///
    /// Returns the validated menu, served from the cache when it is fresh.
    /// Unusable catalog documents are filtered out.
    #[oai(path = "/menu", method = "get", tag = "ApiTags::Menu")]
    async fn get_menu(
        &self,
        /// Restrict the list to one category
        category: Query<Option<String>>,
    ) -> GetMenuResponse {
        match self
            .get_menu_use_case
            .execute(GetMenuParams {
                category: category.0,
            })
            .await
        {
            Ok(items) => {
                let responses: Vec<MenuItemResponse> =
                    items.into_iter().map(|item| item.into()).collect();
                GetMenuResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetMenuResponse::InternalError(json)
            }
        }
    }

    /// Seed the starter menu
    ///
    /// Inserts the six starter products. Refuses when the catalog already
    /// has documents. Admin only.
    #[oai(path = "/menu/seed", method = "post", tag = "ApiTags::Menu")]
    async fn seed_menu(&self, auth: FirebaseBearer) -> SeedMenuResponse {
        if !self.admins.is_admin(&auth.0.email) {
            return SeedMenuResponse::Forbidden(Self::forbidden());
        }

        match self.seed_menu_use_case.execute().await {
            Ok(inserted) => SeedMenuResponse::Created(Json(SeedResultResponse { inserted })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => SeedMenuResponse::Conflict(json),
                    _ => SeedMenuResponse::InternalError(json),
                }
            }
        }
    }

    /// Export the raw catalog
    ///
    /// Dumps every catalog document exactly as stored, for backups.
    /// Admin only.
    #[oai(path = "/menu/export", method = "get", tag = "ApiTags::Menu")]
    async fn export_menu(&self, auth: FirebaseBearer) -> ExportMenuResponse {
        if !self.admins.is_admin(&auth.0.email) {
            return ExportMenuResponse::Forbidden(Self::forbidden());
        }

        match self.export_menu_use_case.execute().await {
            Ok(records) => {
                let docs: Vec<Value> = records
                    .into_iter()
                    .filter_map(|record| serde_json::to_value(record).ok())
                    .collect();
                ExportMenuResponse::Ok(Json(docs))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ExportMenuResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMenuResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MenuItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SeedMenuResponse {
    #[oai(status = 201)]
    Created(Json<SeedResultResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExportMenuResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<Value>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

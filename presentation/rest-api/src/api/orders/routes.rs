use std::sync::Arc;

use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use poem_openapi::{OpenApi, param::Path, param::Query, payload::EventStream, payload::Json};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use business::application::order::feed::OrderFeed;
use business::domain::order::use_cases::list_orders::{ListOrdersParams, ListOrdersUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use business::domain::order::value_objects::OrderStatus;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::orders::dto::{OrderEventResponse, OrderResponse, UpdateStatusRequest};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;
use crate::config::identity_config::AdminPolicy;

pub struct OrdersApi {
    list_orders_use_case: Arc<dyn ListOrdersUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    feed: Arc<OrderFeed>,
    admins: Arc<AdminPolicy>,
}

impl OrdersApi {
    pub fn new(
        list_orders_use_case: Arc<dyn ListOrdersUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
        feed: Arc<OrderFeed>,
        admins: Arc<AdminPolicy>,
    ) -> Self {
        Self {
            list_orders_use_case,
            update_status_use_case,
            feed,
            admins,
        }
    }

    fn forbidden() -> Json<ErrorResponse> {
        Json(ErrorResponse::new("Forbidden", "auth.admin_required"))
    }
}

/// Orders API
///
/// The staff dashboard: a recent window of orders, status resolution, and a
/// live feed for the kitchen display. Every endpoint is admin only.
#[OpenApi]
impl OrdersApi {
    /// List recent orders
    ///
    /// Newest first, capped at 100 records. `status` narrows the window to
    /// one of pending, completed or cancelled; `all` or omitting it lists
    /// everything.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn list_orders(
        &self,
        auth: FirebaseBearer,
        status: Query<Option<String>>,
        limit: Query<Option<u32>>,
    ) -> ListOrdersResponse {
        if !self.admins.is_admin(&auth.0.email) {
            return ListOrdersResponse::Forbidden(Self::forbidden());
        }

        let status = match status.0.as_deref() {
            None | Some("all") => None,
            Some(raw) => match raw.parse::<OrderStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    return ListOrdersResponse::BadRequest(Json(ErrorResponse::new(
                        "ValidationError",
                        "order.invalid_status",
                    )));
                }
            },
        };

        match self
            .list_orders_use_case
            .execute(ListOrdersParams {
                status,
                limit: limit.0,
            })
            .await
        {
            Ok(orders) => ListOrdersResponse::Ok(Json(
                orders.iter().map(OrderResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListOrdersResponse::InternalError(json)
            }
        }
    }

    /// Resolve an order
    ///
    /// Moves a pending order to completed or cancelled. Settled orders do
    /// not move again.
    #[oai(path = "/orders/:id/status", method = "put", tag = "ApiTags::Orders")]
    async fn update_status(
        &self,
        auth: FirebaseBearer,
        id: Path<Uuid>,
        body: Json<UpdateStatusRequest>,
    ) -> UpdateStatusResponse {
        if !self.admins.is_admin(&auth.0.email) {
            return UpdateStatusResponse::Forbidden(Self::forbidden());
        }

        let Ok(status) = body.0.status.parse::<OrderStatus>() else {
            return UpdateStatusResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "order.invalid_status",
            )));
        };

        match self
            .update_status_use_case
            .execute(UpdateOrderStatusParams {
                order_id: id.0,
                status,
            })
            .await
        {
            Ok(order) => UpdateStatusResponse::Ok(Json(OrderResponse::from(&order))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateStatusResponse::NotFound(json),
                    409 => UpdateStatusResponse::Conflict(json),
                    _ => UpdateStatusResponse::InternalError(json),
                }
            }
        }
    }

    /// Live order feed
    ///
    /// Server-sent events for the kitchen display: one event per order
    /// created or resolved. Closing the connection is the unsubscribe.
    #[oai(path = "/orders/live", method = "get", tag = "ApiTags::Orders")]
    async fn live_orders(&self, auth: FirebaseBearer) -> LiveOrdersResponse {
        if !self.admins.is_admin(&auth.0.email) {
            return LiveOrdersResponse::Forbidden(Self::forbidden());
        }

        let receiver = self.feed.subscribe();
        let stream = futures_util::stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => return Some((OrderEventResponse::from(&event), receiver)),
                    // A lagged display skips what it missed and stays live.
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => return None,
                }
            }
        });

        LiveOrdersResponse::Ok(EventStream::new(stream.boxed()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LiveOrdersResponse {
    #[oai(status = 200)]
    Ok(EventStream<BoxStream<'static, OrderEventResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
}

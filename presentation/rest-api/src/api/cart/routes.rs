use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear_cart::ClearCartUseCase;
use business::domain::cart::use_cases::close_cart::CloseCartUseCase;
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::open_cart::OpenCartUseCase;
use business::domain::cart::use_cases::remove_item::RemoveCartItemUseCase;
use business::domain::cart::use_cases::set_quantity::{
    SetCartQuantityParams, SetCartQuantityUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddItemRequest, CartResponse, SetQuantityRequest};
use crate::api::error::ErrorResponse;
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    set_quantity_use_case: Arc<dyn SetCartQuantityUseCase>,
    clear_cart_use_case: Arc<dyn ClearCartUseCase>,
    open_cart_use_case: Arc<dyn OpenCartUseCase>,
    close_cart_use_case: Arc<dyn CloseCartUseCase>,
}

impl CartApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        set_quantity_use_case: Arc<dyn SetCartQuantityUseCase>,
        clear_cart_use_case: Arc<dyn ClearCartUseCase>,
        open_cart_use_case: Arc<dyn OpenCartUseCase>,
        close_cart_use_case: Arc<dyn CloseCartUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            add_item_use_case,
            remove_item_use_case,
            set_quantity_use_case,
            clear_cart_use_case,
            open_cart_use_case,
            close_cart_use_case,
        }
    }
}

/// Cart API
///
/// The caller's cart, one per authenticated user. Mutations persist
/// immediately; a cart that cannot be read comes back empty instead of
/// failing, so these endpoints only ever answer 200.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: FirebaseBearer) -> GetCartResponse {
        let cart = self.get_cart_use_case.execute(&auth.0.id).await;
        GetCartResponse::Ok(Json(cart.into()))
    }

    /// Add an item
    ///
    /// Adds one unit of the product, or bumps the quantity when the line
    /// already exists. The supplied name and price are display snapshots;
    /// checkout re-reads both from the catalog.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, auth: FirebaseBearer, body: Json<AddItemRequest>) -> GetCartResponse {
        let cart = self
            .add_item_use_case
            .execute(AddCartItemParams {
                user_id: auth.0.id,
                product_id: ProductId::new(body.0.id),
                name: body.0.name,
                price: Decimal::from_f64(body.0.price).unwrap_or_default(),
                image_url: body.0.image_url,
            })
            .await;
        GetCartResponse::Ok(Json(cart.into()))
    }

    /// Remove an item
    ///
    /// Deletes the line for the product. Removing something that is not in
    /// the cart is a quiet no-op.
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, auth: FirebaseBearer, id: Path<String>) -> GetCartResponse {
        let cart = self
            .remove_item_use_case
            .execute(&auth.0.id, &ProductId::new(id.0))
            .await;
        GetCartResponse::Ok(Json(cart.into()))
    }

    /// Set a line's quantity
    ///
    /// Quantities below one remove the line.
    #[oai(
        path = "/cart/items/:id/quantity",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn set_quantity(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<SetQuantityRequest>,
    ) -> GetCartResponse {
        let cart = self
            .set_quantity_use_case
            .execute(SetCartQuantityParams {
                user_id: auth.0.id,
                product_id: ProductId::new(id.0),
                quantity: body.0.quantity,
            })
            .await;
        GetCartResponse::Ok(Json(cart.into()))
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, auth: FirebaseBearer) -> ClearCartResponse {
        self.clear_cart_use_case.execute(&auth.0.id).await;
        ClearCartResponse::NoContent
    }

    /// Show the cart drawer
    #[oai(path = "/cart/open", method = "post", tag = "ApiTags::Cart")]
    async fn open_cart(&self, auth: FirebaseBearer) -> GetCartResponse {
        let cart = self.open_cart_use_case.execute(&auth.0.id).await;
        GetCartResponse::Ok(Json(cart.into()))
    }

    /// Hide the cart drawer
    #[oai(path = "/cart/close", method = "post", tag = "ApiTags::Cart")]
    async fn close_cart(&self, auth: FirebaseBearer) -> GetCartResponse {
        let cart = self.close_cart_use_case.execute(&auth.0.id).await;
        GetCartResponse::Ok(Json(cart.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

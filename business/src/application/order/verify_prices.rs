use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::cart::model::CartItem;
use crate::domain::logger::Logger;
use crate::domain::order::errors::CheckoutError;
use crate::domain::order::model::OrderLine;
use crate::domain::order::pricing;
use crate::domain::order::services::{PriceVerifier, VerifiedOrder};
use crate::domain::product::model::MenuItem;
use crate::domain::product::repository::ProductCatalog;

const CONTEXT: &str = "CHECKOUT";

/// Re-prices a cart from the catalog's current documents.
///
/// The cart's name and price snapshots never make it into the result; only
/// its ids and quantities do. Quantities are floored to one in case a stored
/// record was tampered with.
pub struct CatalogPriceVerifier {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PriceVerifier for CatalogPriceVerifier {
    async fn verify(&self, items: &[CartItem]) -> Result<VerifiedOrder, CheckoutError> {
        let mut lines = Vec::with_capacity(items.len());
        let mut subtotal = Decimal::ZERO;

        for item in items {
            let record = self.catalog.get_by_id(&item.id).await?;
            let Some(verified) = record.as_ref().and_then(MenuItem::from_record) else {
                self.logger.warn(
                    CONTEXT,
                    &format!("\"{}\" is no longer on the menu, aborting checkout.", item.name),
                );
                return Err(CheckoutError::ProductVanished {
                    name: item.name.clone(),
                });
            };

            let quantity = item.quantity.max(1);
            subtotal += pricing::line_total(verified.price, quantity);
            lines.push(OrderLine {
                product_id: verified.id,
                name: verified.name,
                price: verified.price,
                quantity,
            });
        }

        Ok(VerifiedOrder {
            pricing: pricing::breakdown(subtotal),
            items: lines,
        })
    }
}

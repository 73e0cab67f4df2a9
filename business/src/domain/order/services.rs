use async_trait::async_trait;
use rand::Rng;

use crate::domain::cart::model::CartItem;
use crate::domain::order::errors::CheckoutError;
use crate::domain::order::model::OrderLine;
use crate::domain::order::pricing::PriceBreakdown;

use super::value_objects::TokenNumber;

/// The reconciled result of checking a cart against the live catalog.
#[derive(Debug, Clone)]
pub struct VerifiedOrder {
    pub items: Vec<OrderLine>,
    pub pricing: PriceBreakdown,
}

/// Service port that re-prices a cart from the catalog's current documents.
///
/// Succeeds only if every line resolves to a usable catalog document; a
/// single vanished or unusable item fails the whole verification.
#[async_trait]
pub trait PriceVerifier: Send + Sync {
    async fn verify(&self, items: &[CartItem]) -> Result<VerifiedOrder, CheckoutError>;
}

pub fn generate_token_number() -> TokenNumber {
    TokenNumber::new(rand::rng().random_range(1000..10000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_four_digit_token_numbers() {
        for _ in 0..200 {
            let token = generate_token_number().as_u32();
            assert!((1000..10000).contains(&token));
        }
    }
}

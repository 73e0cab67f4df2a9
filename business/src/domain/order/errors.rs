use crate::domain::rate_limit::errors::RateLimitError;

/// Failures of the checkout flow. Every variant aborts the whole submission
/// and leaves the cart untouched.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("rate_limit.too_many_attempts")]
    RateLimited(#[from] RateLimitError),
    #[error("checkout.offline")]
    Offline,
    #[error("checkout.cart_empty")]
    CartEmpty,
    #[error("checkout.invalid_total")]
    InvalidTotal,
    /// A cart line no longer resolves to a usable catalog document. Carries
    /// the cart's cached display name so the message can say which item.
    #[error("checkout.product_vanished")]
    ProductVanished { name: String },
    /// Another submission by the same user is still in flight.
    #[error("checkout.already_in_progress")]
    AlreadyInProgress,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

/// Failures of order lookup and administration.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("order.illegal_status_transition")]
    IllegalStatusTransition,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

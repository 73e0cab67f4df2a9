#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// The catalog returned documents but none of them were usable.
    #[error("menu.data_integrity")]
    DataIntegrity,
    #[error("menu.catalog_not_empty")]
    CatalogNotEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

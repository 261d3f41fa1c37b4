//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQLite).

use async_trait::async_trait;

use crate::domain::entities::{NewProduct, Product};
use crate::error::DomainError;

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product, assigning it a generated id
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError>;

    /// Return every persisted product, in store-defined order
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
}

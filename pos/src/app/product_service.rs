//! Product service
//!
//! Handles registering menu items in the catalog and listing them.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

/// Message returned when a product price is missing or negative
pub const INVALID_PRICE_MESSAGE: &str = "가격이 올바르지 않습니다.";

/// Service for managing the product catalog
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    products: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(products: Arc<PR>) -> Self {
        Self { products }
    }

    /// Register a new product
    ///
    /// The price must be present and non-negative; the name is stored as-is.
    /// Returns the persisted product with its store-assigned id. Nothing is
    /// written when validation fails.
    pub async fn create(&self, name: &str, price: Option<Decimal>) -> Result<Product, DomainError> {
        // Validate price
        let price = match price {
            Some(price) if price >= Decimal::ZERO => price,
            _ => {
                return Err(DomainError::InvalidArgument(
                    INVALID_PRICE_MESSAGE.to_string(),
                ))
            }
        };

        let new_product = NewProduct {
            name: name.to_string(),
            price,
        };

        let product = self.products.save(&new_product).await?;

        tracing::info!(product_id = %product.id, name = %product.name, "Registered product");

        Ok(product)
    }

    /// List every product in the catalog
    ///
    /// Order is store-defined; callers must not rely on it.
    pub async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        self.products.find_all().await
    }
}

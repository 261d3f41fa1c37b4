//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They store
//! data behind a lock and let tests seed and inspect state directly.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    fail: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        {
            let mut products = self.products.write().unwrap();
            products.insert(product.id, product);
        }
        self
    }

    /// Wipe all stored products
    pub fn clear(&self) {
        self.products.write().unwrap().clear();
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        if self.fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }

        let stored = Product {
            id: ProductId(Uuid::new_v4()),
            name: product.name.clone(),
            price: product.price,
            created_at: Utc::now(),
        };

        let mut products = self.products.write().unwrap();
        products.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("Mock failure".to_string()));
        }

        let products = self.products.read().unwrap();
        Ok(products.values().cloned().collect())
    }
}

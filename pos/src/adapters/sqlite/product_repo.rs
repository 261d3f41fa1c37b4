//! SQLite adapter for ProductRepository

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::ports::ProductRepository;
use crate::entity::products;
use crate::error::DomainError;

/// SQLite implementation of ProductRepository
pub struct SqliteProductRepository {
    db: DatabaseConnection,
}

impl SqliteProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = products::ActiveModel {
            id: Set(id),
            name: Set(product.name.clone()),
            price: Set(product.price.to_string()),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let rows = products::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        rows.into_iter().map(Product::try_from).collect()
    }
}

// The price column is TEXT, so the row-to-domain conversion can fail on a
// corrupt value.
impl TryFrom<products::Model> for Product {
    type Error = DomainError;

    fn try_from(model: products::Model) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&model.price).map_err(|e| {
            DomainError::Database(format!("invalid price for product {}: {}", model.id, e))
        })?;

        Ok(Product {
            id: model.id.into(),
            name: model.name,
            price,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

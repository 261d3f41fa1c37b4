//! Whole-database reset helper
//!
//! Deletes every row from every table, leaving the schema in place. Test
//! fixtures invoke this before each scenario.

use sea_orm::{DatabaseConnection, EntityTrait};

use crate::entity::products;
use crate::error::DomainError;

/// Wipes all persisted state on the backing database
pub struct DatabaseCleaner {
    db: DatabaseConnection,
}

impl DatabaseCleaner {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Delete every row from every table
    pub async fn clear(&self) -> Result<(), DomainError> {
        products::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

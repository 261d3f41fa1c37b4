//! Connection and schema helpers for the embedded database

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity::products;
use crate::error::DomainError;

/// Open a connection pool for the given database URL.
///
/// The pool is capped at a single connection: with `sqlite::memory:` every
/// pooled connection would otherwise see its own empty database.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DomainError> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.max_connections(1);

    Database::connect(options)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))
}

/// Create the `products` table if it does not exist yet.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(products::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(())
}

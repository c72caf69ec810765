//! Store selected when the application is wired: Postgres for the server,
//! a fixed in-memory data set for database-less runs.

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    search::{
        Predicate, Record,
        ports::{CatalogEntity, SearchStore},
    },
};
use crate::infrastructure::{health::PostgresHealthCheckRepository, memory::InMemoryStore};

#[derive(Debug, Clone)]
pub enum CatalogStore<P, E> {
    Postgres(P),
    Memory(InMemoryStore<E>),
}

impl<P, E> SearchStore for CatalogStore<P, E>
where
    P: SearchStore<Entity = E>,
    E: CatalogEntity + Record<Field = P::Field> + Clone,
{
    type Entity = E;
    type Field = P::Field;

    async fn query_all(&self, predicate: Predicate<P::Field>) -> Result<Vec<E>, CoreError> {
        match self {
            CatalogStore::Postgres(store) => store.query_all(predicate).await,
            CatalogStore::Memory(store) => store.query_all(predicate).await,
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<E>, CoreError> {
        match self {
            CatalogStore::Postgres(store) => store.get_by_id(id).await,
            CatalogStore::Memory(store) => store.get_by_id(id).await,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CatalogHealthCheck {
    Postgres(PostgresHealthCheckRepository),
    /// Nothing to reach, always ready.
    Memory,
}

impl HealthCheckRepository for CatalogHealthCheck {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self {
            CatalogHealthCheck::Postgres(repository) => repository.readiness().await,
            CatalogHealthCheck::Memory => Ok(DatabaseHealthStatus {
                status: "up".to_string(),
                latency_ms: 0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{Clause, Value};
    use crate::domain::supplier::entities::{Supplier, SupplierField};
    use crate::infrastructure::supplier::PostgresSupplierRepository;

    fn memory() -> CatalogStore<PostgresSupplierRepository, Supplier> {
        CatalogStore::Memory(InMemoryStore::new(vec![
            Supplier::new(1, "Berlin Tours GmbH", "123 Main St", "10115", "Berlin", "Germany"),
            Supplier::new(2, "Munich Adventures", "456 Oak Ave", "80331", "Munich", "Germany"),
        ]))
    }

    #[tokio::test]
    async fn test_memory_variant_delegates() {
        let store = memory();
        let predicate = Predicate::match_all().with(Clause::Equals {
            field: SupplierField::Zip,
            value: Value::Text("80331".to_string()),
        });

        let rows = store.query_all(predicate).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
        assert_eq!(store.get_by_id(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_health_is_ready() {
        let status = CatalogHealthCheck::Memory.readiness().await.unwrap();
        assert_eq!(status.status, "up");
    }
}

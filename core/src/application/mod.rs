use std::sync::Arc;

use crate::{
    domain::{
        activity::{
            entities::Activity,
            services::{ActivitySearchService, activity_search_service},
        },
        common::CatalogConfig,
        supplier::{
            entities::Supplier,
            services::{SupplierSearchService, supplier_search_service},
        },
    },
    infrastructure::{
        activity::PostgresActivityRepository,
        catalog::{CatalogHealthCheck, CatalogStore},
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        memory::InMemoryStore,
        supplier::PostgresSupplierRepository,
    },
};

pub type ActivityStore = CatalogStore<PostgresActivityRepository, Activity>;
pub type SupplierStore = CatalogStore<PostgresSupplierRepository, Supplier>;

pub type ActivityService = ActivitySearchService<ActivityStore>;
pub type SupplierService = SupplierSearchService<SupplierStore>;

/// Search services for every catalog entity, sharing one store backend.
#[derive(Clone)]
pub struct CatalogService {
    pub activities: Arc<ActivityService>,
    pub suppliers: Arc<SupplierService>,
    pub health: Arc<CatalogHealthCheck>,
}

impl CatalogService {
    /// Serves a fixed data set without a database.
    pub fn in_memory(activities: Vec<Activity>, suppliers: Vec<Supplier>) -> Self {
        Self {
            activities: Arc::new(activity_search_service(CatalogStore::Memory(
                InMemoryStore::new(activities),
            ))),
            suppliers: Arc::new(supplier_search_service(CatalogStore::Memory(
                InMemoryStore::new(suppliers),
            ))),
            health: Arc::new(CatalogHealthCheck::Memory),
        }
    }
}

pub async fn create_service(config: CatalogConfig) -> Result<CatalogService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let activity_repository = PostgresActivityRepository::new(postgres.get_db());
    let supplier_repository = PostgresSupplierRepository::new(postgres.get_db());
    let health_repository = PostgresHealthCheckRepository::new(postgres.get_db());

    Ok(CatalogService {
        activities: Arc::new(activity_search_service(CatalogStore::Postgres(
            activity_repository,
        ))),
        suppliers: Arc::new(supplier_search_service(CatalogStore::Postgres(
            supplier_repository,
        ))),
        health: Arc::new(CatalogHealthCheck::Postgres(health_repository)),
    })
}

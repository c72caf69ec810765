use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, sea_query::Expr};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    search::{Predicate, ports::SearchStore},
    supplier::entities::{Supplier, SupplierField},
};
use crate::entity::suppliers::{Column as SupplierColumn, Entity as SupplierEntity};
use crate::infrastructure::search::build_condition;

pub(crate) fn supplier_column(field: SupplierField) -> Expr {
    let column = match field {
        SupplierField::Name => SupplierColumn::Name,
        SupplierField::Address => SupplierColumn::Address,
        SupplierField::Zip => SupplierColumn::Zip,
        SupplierField::City => SupplierColumn::City,
        SupplierField::Country => SupplierColumn::Country,
    };
    Expr::col((SupplierEntity, column))
}

#[derive(Debug, Clone)]
pub struct PostgresSupplierRepository {
    pub db: DatabaseConnection,
}

impl PostgresSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SearchStore for PostgresSupplierRepository {
    type Entity = Supplier;
    type Field = SupplierField;

    async fn query_all(
        &self,
        predicate: Predicate<SupplierField>,
    ) -> Result<Vec<Supplier>, CoreError> {
        debug!(clauses = predicate.clauses().len(), "querying suppliers");

        let suppliers = SupplierEntity::find()
            .filter(build_condition(&predicate, supplier_column))
            .order_by_asc(SupplierColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query suppliers: {}", e);
                CoreError::StoreFailure(e.to_string())
            })?
            .into_iter()
            .map(Supplier::from)
            .collect();

        Ok(suppliers)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Supplier>, CoreError> {
        let supplier = SupplierEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get supplier by id: {}", e);
                CoreError::StoreFailure(e.to_string())
            })?
            .map(Supplier::from);

        Ok(supplier)
    }
}

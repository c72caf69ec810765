use std::future::Future;

use validator::Validate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    search::predicate::{Field, Predicate},
};

/// A persisted record with a stable primary key.
pub trait CatalogEntity: Send + Sync {
    /// Name used when reporting a missing record.
    const NAME: &'static str;

    fn id(&self) -> i64;
}

/// Optional filters for one entity type.
pub trait SearchCriteria: Validate + Default + Send + Sync {
    /// True when no filter is set, i.e. the criteria selects every row.
    fn is_empty(&self) -> bool;
}

/// Store adapter able to evaluate a composed predicate.
pub trait SearchStore: Send + Sync {
    type Entity: CatalogEntity;
    type Field: Field;

    fn query_all(
        &self,
        predicate: Predicate<Self::Field>,
    ) -> impl Future<Output = Result<Vec<Self::Entity>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Self::Entity>, CoreError>> + Send;
}

/// Turns a criteria value into a predicate over one entity's fields.
pub trait PredicateBuilder: Send + Sync {
    type Criteria: SearchCriteria;
    type Field: Field;

    fn from_criteria(&self, criteria: &Self::Criteria) -> Predicate<Self::Field>;
}

pub trait DtoMapper: Send + Sync {
    type Entity;
    type Dto: Send;

    fn to_dto(&self, entity: &Self::Entity) -> Self::Dto;

    /// Keeps order and duplicates.
    fn to_dto_list(&self, entities: &[Self::Entity]) -> Vec<Self::Dto> {
        entities.iter().map(|entity| self.to_dto(entity)).collect()
    }
}

pub trait SearchService: Send + Sync {
    type Entity;
    type Dto;
    type Criteria;

    fn search(
        &self,
        criteria: Self::Criteria,
    ) -> impl Future<Output = Result<Vec<Self::Dto>, CoreError>> + Send;

    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Self::Dto, CoreError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Self::Dto>, CoreError>> + Send;
}

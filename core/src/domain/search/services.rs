use tracing::{debug, instrument};
use validator::Validate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    search::ports::{
        CatalogEntity, DtoMapper, PredicateBuilder, SearchCriteria, SearchService, SearchStore,
    },
};

/// The one implementation of [`SearchService`]: validate, compose, query, map.
///
/// Entity types only plug in their store, predicate builder and mapper.
#[derive(Debug, Clone)]
pub struct SearchEngine<S, P, M> {
    store: S,
    predicates: P,
    mapper: M,
}

impl<S, P, M> SearchEngine<S, P, M> {
    pub fn new(store: S, predicates: P, mapper: M) -> Self {
        Self {
            store,
            predicates,
            mapper,
        }
    }
}

impl<S, P, M> SearchService for SearchEngine<S, P, M>
where
    S: SearchStore,
    P: PredicateBuilder<Field = S::Field>,
    M: DtoMapper<Entity = S::Entity>,
{
    type Entity = S::Entity;
    type Dto = M::Dto;
    type Criteria = P::Criteria;

    #[instrument(skip_all, fields(entity = <S::Entity as CatalogEntity>::NAME))]
    async fn search(&self, criteria: P::Criteria) -> Result<Vec<M::Dto>, CoreError> {
        criteria.validate()?;

        let predicate = self.predicates.from_criteria(&criteria);
        debug!(
            clauses = predicate.clauses().len(),
            match_all = criteria.is_empty(),
            "composed search predicate"
        );

        let entities = self.store.query_all(predicate).await?;

        Ok(self.mapper.to_dto_list(&entities))
    }

    #[instrument(skip(self), fields(entity = <S::Entity as CatalogEntity>::NAME))]
    async fn find_by_id(&self, id: i64) -> Result<M::Dto, CoreError> {
        let entity = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: <S::Entity as CatalogEntity>::NAME,
                id,
            })?;

        Ok(self.mapper.to_dto(&entity))
    }

    async fn find_all(&self) -> Result<Vec<M::Dto>, CoreError> {
        self.search(P::Criteria::default()).await
    }
}

//! Store adapter over a plain vector of entities.
//!
//! Predicates are evaluated in process with [`Predicate::matches`], with the
//! same semantics the SQL translation gives them. Rows come back in insertion
//! order.

use crate::domain::{
    common::entities::app_errors::CoreError,
    search::{
        Predicate, Record,
        ports::{CatalogEntity, SearchStore},
    },
};

#[derive(Debug, Clone)]
pub struct InMemoryStore<E> {
    rows: Vec<E>,
}

impl<E> InMemoryStore<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<E> SearchStore for InMemoryStore<E>
where
    E: CatalogEntity + Record + Clone,
{
    type Entity = E;
    type Field = <E as Record>::Field;

    async fn query_all(&self, predicate: Predicate<Self::Field>) -> Result<Vec<E>, CoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| predicate.matches(*row))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<E>, CoreError> {
        Ok(self.rows.iter().find(|row| row.id() == id).cloned())
    }
}

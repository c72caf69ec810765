use crate::domain::{
    search::services::SearchEngine,
    supplier::{mappers::SupplierMapper, specifications::SupplierSpecification},
};

pub type SupplierSearchService<S> = SearchEngine<S, SupplierSpecification, SupplierMapper>;

pub fn supplier_search_service<S>(store: S) -> SupplierSearchService<S> {
    SearchEngine::new(store, SupplierSpecification, SupplierMapper)
}

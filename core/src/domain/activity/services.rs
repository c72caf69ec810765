use crate::domain::{
    activity::{mappers::ActivityMapper, specifications::ActivitySpecification},
    search::services::SearchEngine,
};

pub type ActivitySearchService<S> = SearchEngine<S, ActivitySpecification, ActivityMapper>;

pub fn activity_search_service<S>(store: S) -> ActivitySearchService<S> {
    SearchEngine::new(store, ActivitySpecification, ActivityMapper)
}

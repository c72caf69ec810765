use crate::domain::{
    activity::{entities::ActivityField, value_objects::ActivitySearchCriteria},
    search::{Predicate, fragments, ports::PredicateBuilder},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ActivitySpecification;

impl PredicateBuilder for ActivitySpecification {
    type Criteria = ActivitySearchCriteria;
    type Field = ActivityField;

    fn from_criteria(&self, criteria: &ActivitySearchCriteria) -> Predicate<ActivityField> {
        Predicate::all_of([
            fragments::contains_ignore_case(ActivityField::Title, criteria.title.as_deref()),
            fragments::range(ActivityField::Price, criteria.min_price, criteria.max_price),
            fragments::at_least(ActivityField::Rating, criteria.min_rating),
            fragments::equals_ignore_case(ActivityField::Currency, criteria.currency.as_deref()),
            fragments::flag(ActivityField::SpecialOffer, criteria.special_offer),
            fragments::contains_ignore_case(
                ActivityField::SupplierName,
                criteria.supplier_name.as_deref(),
            ),
        ])
    }
}

use crate::domain::{
    search::{Predicate, fragments, ports::PredicateBuilder},
    supplier::{entities::SupplierField, value_objects::SupplierSearchCriteria},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierSpecification;

impl PredicateBuilder for SupplierSpecification {
    type Criteria = SupplierSearchCriteria;
    type Field = SupplierField;

    fn from_criteria(&self, criteria: &SupplierSearchCriteria) -> Predicate<SupplierField> {
        Predicate::all_of([
            fragments::contains_ignore_case(SupplierField::Name, criteria.name.as_deref()),
            fragments::contains_ignore_case(SupplierField::Address, criteria.address.as_deref()),
            fragments::exact(SupplierField::Zip, criteria.zip.as_deref()),
            fragments::contains_ignore_case(SupplierField::City, criteria.city.as_deref()),
            fragments::contains_ignore_case(SupplierField::Country, criteria.country.as_deref()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{Clause, Value};
    use crate::domain::supplier::entities::Supplier;

    fn berlin_tours() -> Supplier {
        Supplier::new(1, "Berlin Tours GmbH", "123 Main St", "10115", "Berlin", "Germany")
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let predicate = SupplierSpecification.from_criteria(&SupplierSearchCriteria::default());
        assert!(predicate.is_match_all());
        assert!(predicate.matches(&berlin_tours()));
    }

    #[test]
    fn test_fragments_follow_field_order() {
        let criteria = SupplierSearchCriteria {
            name: Some("tours".to_string()),
            zip: Some("10115".to_string()),
            country: Some("germany".to_string()),
            ..Default::default()
        };

        let predicate = SupplierSpecification.from_criteria(&criteria);
        let fields: Vec<SupplierField> = predicate.clauses().iter().map(Clause::field).collect();

        assert_eq!(
            fields,
            vec![SupplierField::Name, SupplierField::Zip, SupplierField::Country]
        );
    }

    #[test]
    fn test_city_is_case_insensitive() {
        for city in ["BERLIN", "berlin", "Berlin", "  erli  "] {
            let criteria = SupplierSearchCriteria {
                city: Some(city.to_string()),
                ..Default::default()
            };
            assert!(
                SupplierSpecification
                    .from_criteria(&criteria)
                    .matches(&berlin_tours()),
                "city filter {city:?} should match"
            );
        }
    }

    #[test]
    fn test_zip_is_exact() {
        let criteria = SupplierSearchCriteria {
            zip: Some(" 10115 ".to_string()),
            ..Default::default()
        };
        let predicate = SupplierSpecification.from_criteria(&criteria);
        assert_eq!(
            predicate.clauses(),
            &[Clause::Equals {
                field: SupplierField::Zip,
                value: Value::Text("10115".to_string()),
            }]
        );
        assert!(predicate.matches(&berlin_tours()));

        let partial = SupplierSearchCriteria {
            zip: Some("101".to_string()),
            ..Default::default()
        };
        assert!(
            !SupplierSpecification
                .from_criteria(&partial)
                .matches(&berlin_tours())
        );
    }

    #[test]
    fn test_blank_fields_are_ignored() {
        let criteria = SupplierSearchCriteria {
            name: Some("   ".to_string()),
            city: Some(String::new()),
            ..Default::default()
        };
        assert!(SupplierSpecification.from_criteria(&criteria).is_match_all());
    }
}

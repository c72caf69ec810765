use mockall::mock;
use tourscout_core::{
    domain::{
        activity::{
            entities::{Activity, ActivityField},
            services::activity_search_service,
            value_objects::{ActivityDto, ActivitySearchCriteria},
        },
        common::entities::app_errors::CoreError,
        search::{
            Predicate,
            ports::{SearchService, SearchStore},
        },
        supplier::{
            entities::Supplier, services::supplier_search_service,
            value_objects::SupplierSearchCriteria,
        },
    },
    infrastructure::memory::InMemoryStore,
};

fn berlin_tours() -> Supplier {
    Supplier::new(1, "Berlin Tours GmbH", "123 Main St", "10115", "Berlin", "Germany")
}

fn munich_adventures() -> Supplier {
    Supplier::new(2, "Munich Adventures", "456 Oak Ave", "80331", "Munich", "Germany")
}

fn activity(
    id: i64,
    title: &str,
    price: i32,
    currency: &str,
    rating: f64,
    special_offer: bool,
    supplier: Option<Supplier>,
) -> Activity {
    Activity {
        id,
        title: title.to_string(),
        price,
        currency: currency.to_string(),
        rating,
        special_offer,
        supplier,
    }
}

fn catalog() -> Vec<Activity> {
    vec![
        activity(1, "Museum Tour", 75, "EUR", 4.8, true, Some(berlin_tours())),
        activity(2, "City Walk", 50, "USD", 4.5, false, Some(munich_adventures())),
    ]
}

fn titles(dtos: &[ActivityDto]) -> Vec<&str> {
    dtos.iter().map(|dto| dto.title.as_str()).collect()
}

#[tokio::test]
async fn test_title_search_matches_first_activity() {
    let service = activity_search_service(InMemoryStore::new(catalog()));

    let result = service
        .search(ActivitySearchCriteria {
            title: Some("museum".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(titles(&result), vec!["Museum Tour"]);
    assert_eq!(result[0].price, 75);
    assert_eq!(result[0].supplier_name, "Berlin Tours GmbH");
}

#[tokio::test]
async fn test_price_range_matches_second_activity() {
    let service = activity_search_service(InMemoryStore::new(catalog()));

    let result = service
        .search(ActivitySearchCriteria {
            min_price: Some(40),
            max_price: Some(60),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(titles(&result), vec!["City Walk"]);
    assert_eq!(result[0].price, 50);
}

#[tokio::test]
async fn test_empty_criteria_returns_everything_in_store_order() {
    let service = activity_search_service(InMemoryStore::new(catalog()));

    let searched = service
        .search(ActivitySearchCriteria::default())
        .await
        .unwrap();
    let all = service.find_all().await.unwrap();

    assert_eq!(titles(&searched), vec!["Museum Tour", "City Walk"]);
    assert_eq!(searched, all);
}

#[tokio::test]
async fn test_unknown_city_returns_empty_list() {
    let service = supplier_search_service(InMemoryStore::new(vec![
        berlin_tours(),
        munich_adventures(),
    ]));

    let result = service
        .search(SupplierSearchCriteria {
            city: Some("nonexistentcity".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(result.is_empty());
}

#[tokio::test]
async fn test_find_by_id_missing_is_not_found() {
    let activities = activity_search_service(InMemoryStore::new(catalog()));
    let suppliers = supplier_search_service(InMemoryStore::new(vec![berlin_tours()]));

    assert_eq!(
        activities.find_by_id(999).await,
        Err(CoreError::NotFound {
            entity: "Activity",
            id: 999,
        })
    );

    let error = suppliers.find_by_id(999).await.unwrap_err();
    assert_eq!(error.to_string(), "Supplier not found with id: 999");
}

#[tokio::test]
async fn test_find_by_id_maps_entity() {
    let service = activity_search_service(InMemoryStore::new(catalog()));

    let dto = service.find_by_id(2).await.unwrap();

    assert_eq!(dto.title, "City Walk");
    assert_eq!(dto.currency, "USD");
    assert_eq!(dto.supplier_name, "Munich Adventures");
}

#[tokio::test]
async fn test_case_insensitive_city() {
    let service = supplier_search_service(InMemoryStore::new(vec![
        berlin_tours(),
        munich_adventures(),
    ]));

    for city in ["BERLIN", "berlin", "Berlin"] {
        let result = service
            .search(SupplierSearchCriteria {
                city: Some(city.to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1, "city filter {city:?}");
        assert_eq!(result[0].name, "Berlin Tours GmbH");
    }
}

#[tokio::test]
async fn test_partial_name_match() {
    let service = supplier_search_service(InMemoryStore::new(vec![
        berlin_tours(),
        munich_adventures(),
    ]));

    let result = service
        .search(SupplierSearchCriteria {
            name: Some("adventure".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Munich Adventures");
}

#[tokio::test]
async fn test_blank_filter_equals_omitted_filter() {
    let service = activity_search_service(InMemoryStore::new(catalog()));

    let blank = service
        .search(ActivitySearchCriteria {
            title: Some("   ".to_string()),
            currency: Some(String::new()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(blank, service.find_all().await.unwrap());
}

#[tokio::test]
async fn test_range_bounds_are_inclusive() {
    let service = activity_search_service(InMemoryStore::new(catalog()));

    let result = service
        .search(ActivitySearchCriteria {
            min_price: Some(50),
            max_price: Some(75),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(titles(&result), vec!["Museum Tour", "City Walk"]);
}

#[tokio::test]
async fn test_combined_filters_narrow_results() {
    let service = activity_search_service(InMemoryStore::new(vec![
        activity(1, "Museum Tour", 75, "EUR", 4.8, true, Some(berlin_tours())),
        activity(2, "City Walk", 50, "USD", 4.5, false, Some(munich_adventures())),
        activity(3, "Museum Night", 30, "EUR", 4.1, false, None),
    ]));

    let by_title = ActivitySearchCriteria {
        title: Some("museum".to_string()),
        ..Default::default()
    };
    let by_rating = ActivitySearchCriteria {
        min_rating: Some(4.4),
        ..Default::default()
    };
    let both = ActivitySearchCriteria {
        title: by_title.title.clone(),
        min_rating: by_rating.min_rating,
        ..Default::default()
    };

    let title_only = service.search(by_title).await.unwrap();
    let rating_only = service.search(by_rating).await.unwrap();
    let combined = service.search(both).await.unwrap();

    assert!(combined.len() <= title_only.len().min(rating_only.len()));
    assert_eq!(titles(&combined), vec!["Museum Tour"]);
}

#[tokio::test]
async fn test_special_offer_false_is_a_filter() {
    let service = activity_search_service(InMemoryStore::new(catalog()));

    let result = service
        .search(ActivitySearchCriteria {
            special_offer: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(titles(&result), vec!["City Walk"]);
}

#[tokio::test]
async fn test_supplier_name_filter_skips_activities_without_supplier() {
    let service = activity_search_service(InMemoryStore::new(vec![
        activity(1, "Museum Tour", 75, "EUR", 4.8, true, Some(berlin_tours())),
        activity(2, "Harbour Cruise", 40, "EUR", 4.0, false, None),
    ]));

    let filtered = service
        .search(ActivitySearchCriteria {
            supplier_name: Some("berlin".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(titles(&filtered), vec!["Museum Tour"]);

    let all = service.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].supplier_name, "");
}

#[tokio::test]
async fn test_invalid_criteria_fail_before_querying() {
    let mut store = MockActivityStore::new();
    store.expect_query_all().never();

    let service = activity_search_service(store);

    let error = service
        .search(ActivitySearchCriteria {
            min_price: Some(80),
            max_price: Some(20),
            min_rating: Some(6.0),
            ..Default::default()
        })
        .await
        .unwrap_err();

    let CoreError::InvalidCriteria(violations) = error else {
        panic!("expected InvalidCriteria");
    };
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().any(|v| v.field == "min_rating"));
    assert!(violations.iter().any(|v| v.code == "price_range"));
}

#[tokio::test]
async fn test_find_all_queries_once_with_match_all() {
    let mut store = MockActivityStore::new();
    store
        .expect_query_all()
        .withf(|predicate| predicate.is_match_all())
        .times(1)
        .returning(|_| Box::pin(async { Ok(catalog()) }));

    let service = activity_search_service(store);

    let result = service.find_all().await.unwrap();
    assert_eq!(titles(&result), vec!["Museum Tour", "City Walk"]);
}

#[tokio::test]
async fn test_search_passes_composed_predicate_to_store() {
    let mut store = MockActivityStore::new();
    store
        .expect_query_all()
        .withf(|predicate| predicate.clauses().len() == 2 && predicate.requires_join())
        .times(1)
        .returning(|_| Box::pin(async { Ok(Vec::new()) }));

    let service = activity_search_service(store);

    let result = service
        .search(ActivitySearchCriteria {
            title: Some("museum".to_string()),
            supplier_name: Some("berlin".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let mut store = MockActivityStore::new();
    store
        .expect_query_all()
        .times(1)
        .returning(|_| Box::pin(async { Err(connection_refused()) }));
    store
        .expect_get_by_id()
        .withf(|id| *id == 1)
        .times(1)
        .returning(|_| Box::pin(async { Err(connection_refused()) }));

    let service = activity_search_service(store);

    assert_eq!(service.find_all().await, Err(connection_refused()));
    assert_eq!(service.find_by_id(1).await, Err(connection_refused()));
}

#[tokio::test]
async fn test_missing_row_in_store_is_not_found() {
    let mut store = MockActivityStore::new();
    store
        .expect_get_by_id()
        .withf(|id| *id == 7)
        .times(1)
        .returning(|_| Box::pin(async { Ok(None) }));

    let service = activity_search_service(store);

    assert_eq!(
        service.find_by_id(7).await,
        Err(CoreError::NotFound {
            entity: "Activity",
            id: 7,
        })
    );
}

fn connection_refused() -> CoreError {
    CoreError::StoreFailure("connection refused".to_string())
}

mock! {
    pub ActivityStore {}

    impl SearchStore for ActivityStore {
        type Entity = Activity;
        type Field = ActivityField;

        fn query_all(
            &self,
            predicate: Predicate<ActivityField>,
        ) -> impl Future<Output = Result<Vec<Activity>, CoreError>> + Send;

        fn get_by_id(
            &self,
            id: i64,
        ) -> impl Future<Output = Result<Option<Activity>, CoreError>> + Send;
    }
}

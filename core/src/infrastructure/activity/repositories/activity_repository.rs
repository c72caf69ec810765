use sea_orm::{DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, sea_query::Expr};
use tracing::{debug, error};

use crate::domain::{
    activity::entities::{Activity, ActivityField},
    common::entities::app_errors::CoreError,
    search::{Predicate, ports::SearchStore},
};
use crate::entity::{
    activities::{Column as ActivityColumn, Entity as ActivityEntity},
    suppliers::{Column as SupplierColumn, Entity as SupplierEntity},
};
use crate::infrastructure::search::build_condition;

pub(crate) fn activity_column(field: ActivityField) -> Expr {
    match field {
        ActivityField::Title => Expr::col((ActivityEntity, ActivityColumn::Title)),
        ActivityField::Price => Expr::col((ActivityEntity, ActivityColumn::Price)),
        ActivityField::Currency => Expr::col((ActivityEntity, ActivityColumn::Currency)),
        ActivityField::Rating => Expr::col((ActivityEntity, ActivityColumn::Rating)),
        ActivityField::SpecialOffer => Expr::col((ActivityEntity, ActivityColumn::SpecialOffer)),
        ActivityField::SupplierName => Expr::col((SupplierEntity, SupplierColumn::Name)),
    }
}

/// Activities are always loaded together with their supplier through a
/// LEFT JOIN, so activities without a supplier stay visible unless a
/// supplier filter is set.
#[derive(Debug, Clone)]
pub struct PostgresActivityRepository {
    pub db: DatabaseConnection,
}

impl PostgresActivityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SearchStore for PostgresActivityRepository {
    type Entity = Activity;
    type Field = ActivityField;

    async fn query_all(
        &self,
        predicate: Predicate<ActivityField>,
    ) -> Result<Vec<Activity>, CoreError> {
        debug!(
            clauses = predicate.clauses().len(),
            supplier_filter = predicate.requires_join(),
            "querying activities"
        );

        let activities = ActivityEntity::find()
            .find_also_related(SupplierEntity)
            .filter(build_condition(&predicate, activity_column))
            .order_by_asc(ActivityColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query activities: {}", e);
                CoreError::StoreFailure(e.to_string())
            })?
            .into_iter()
            .map(Activity::from)
            .collect();

        Ok(activities)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Activity>, CoreError> {
        let activity = ActivityEntity::find_by_id(id)
            .find_also_related(SupplierEntity)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get activity by id: {}", e);
                CoreError::StoreFailure(e.to_string())
            })?
            .map(Activity::from);

        Ok(activity)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::domain::{
        activity::{
            specifications::ActivitySpecification, value_objects::ActivitySearchCriteria,
        },
        search::ports::PredicateBuilder,
    };

    fn render(criteria: ActivitySearchCriteria) -> String {
        let predicate = ActivitySpecification.from_criteria(&criteria);
        ActivityEntity::find()
            .find_also_related(SupplierEntity)
            .filter(build_condition(&predicate, activity_column))
            .order_by_asc(ActivityColumn::Id)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_supplier_is_outer_joined() {
        let sql = render(ActivitySearchCriteria::default());
        assert!(
            sql.contains(r#"LEFT JOIN "suppliers" ON "activities"."supplier_id" = "suppliers"."id""#),
            "{sql}"
        );
        assert!(!sql.contains("LIKE"), "{sql}");
    }

    #[test]
    fn test_title_and_price_range() {
        let sql = render(ActivitySearchCriteria {
            title: Some("Museum".to_string()),
            min_price: Some(40),
            max_price: Some(60),
            ..Default::default()
        });

        assert!(sql.contains(r#"LOWER("activities"."title") LIKE '%museum%'"#), "{sql}");
        assert!(sql.contains(r#""activities"."price" BETWEEN 40 AND 60"#), "{sql}");
    }

    #[test]
    fn test_single_bounds() {
        let sql = render(ActivitySearchCriteria {
            min_price: Some(60),
            ..Default::default()
        });
        assert!(sql.contains(r#""activities"."price" >= 60"#), "{sql}");

        let sql = render(ActivitySearchCriteria {
            max_price: Some(60),
            ..Default::default()
        });
        assert!(sql.contains(r#""activities"."price" <= 60"#), "{sql}");
    }

    #[test]
    fn test_currency_flag_and_supplier_name() {
        let sql = render(ActivitySearchCriteria {
            currency: Some("eur".to_string()),
            special_offer: Some(false),
            supplier_name: Some("Berlin".to_string()),
            ..Default::default()
        });

        assert!(sql.contains(r#"LOWER("activities"."currency") = 'eur'"#), "{sql}");
        assert!(sql.contains(r#""activities"."special_offer" = FALSE"#), "{sql}");
        assert!(sql.contains(r#"LOWER("suppliers"."name") LIKE '%berlin%'"#), "{sql}");
    }
}

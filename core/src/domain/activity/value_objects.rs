use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::search::ports::SearchCriteria;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_price_range", skip_on_field_errors = false))]
pub struct ActivitySearchCriteria {
    pub title: Option<String>,

    #[validate(range(min = 0, message = "min_price must not be negative"))]
    pub min_price: Option<i32>,

    #[validate(range(min = 0, message = "max_price must not be negative"))]
    pub max_price: Option<i32>,

    #[validate(custom(function = "validate_rating"))]
    pub min_rating: Option<f64>,

    pub currency: Option<String>,
    pub special_offer: Option<bool>,
    pub supplier_name: Option<String>,
}

fn validate_price_range(criteria: &ActivitySearchCriteria) -> Result<(), ValidationError> {
    match (criteria.min_price, criteria.max_price) {
        (Some(min), Some(max)) if min > max => Err(ValidationError::new("price_range")
            .with_message("min_price must not be greater than max_price".into())),
        _ => Ok(()),
    }
}

/// NaN and infinities are out of range too.
fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if (0.0..=5.0).contains(&rating) {
        return Ok(());
    }

    Err(ValidationError::new("range").with_message("min_rating must be between 0 and 5".into()))
}

impl SearchCriteria for ActivitySearchCriteria {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
            && self.currency.is_none()
            && self.special_offer.is_none()
            && self.supplier_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: i64,
    pub title: String,
    pub price: i32,
    pub currency: String,
    pub rating: f64,
    pub special_offer: bool,
    /// Empty when the activity has no supplier.
    pub supplier_name: String,
}

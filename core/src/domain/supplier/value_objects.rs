use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::search::ports::SearchCriteria;

/// Supplier filters. `zip` is an exact match, every other field a
/// case-insensitive partial match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SupplierSearchCriteria {
    pub name: Option<String>,
    pub address: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl SearchCriteria for SupplierSearchCriteria {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.zip.is_none()
            && self.city.is_none()
            && self.country.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SupplierDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

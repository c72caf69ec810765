use serde::{Deserialize, Serialize};

use crate::domain::{
    search::{Field, FieldValue, Record, ports::CatalogEntity},
    supplier::entities::Supplier,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub price: i32,
    pub currency: String,
    pub rating: f64,
    pub special_offer: bool,
    pub supplier: Option<Supplier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityField {
    Title,
    Price,
    Currency,
    Rating,
    SpecialOffer,
    /// `suppliers.name`, reached through the activity's supplier.
    SupplierName,
}

impl Field for ActivityField {
    fn traverses_relation(&self) -> bool {
        matches!(self, ActivityField::SupplierName)
    }
}

impl Record for Activity {
    type Field = ActivityField;

    fn value(&self, field: ActivityField) -> FieldValue<'_> {
        match field {
            ActivityField::Title => FieldValue::Text(&self.title),
            ActivityField::Price => FieldValue::Int(self.price.into()),
            ActivityField::Currency => FieldValue::Text(&self.currency),
            ActivityField::Rating => FieldValue::Float(self.rating),
            ActivityField::SpecialOffer => FieldValue::Bool(self.special_offer),
            ActivityField::SupplierName => self
                .supplier
                .as_ref()
                .map(|supplier| FieldValue::Text(&supplier.name))
                .unwrap_or(FieldValue::Absent),
        }
    }
}

impl CatalogEntity for Activity {
    const NAME: &'static str = "Activity";

    fn id(&self) -> i64 {
        self.id
    }
}

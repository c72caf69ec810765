use serde::{Deserialize, Serialize};

use crate::domain::search::{Field, FieldValue, Record, ports::CatalogEntity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

impl Supplier {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        address: impl Into<String>,
        zip: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            zip: zip.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierField {
    Name,
    Address,
    Zip,
    City,
    Country,
}

impl Field for SupplierField {}

impl Record for Supplier {
    type Field = SupplierField;

    fn value(&self, field: SupplierField) -> FieldValue<'_> {
        match field {
            SupplierField::Name => FieldValue::Text(&self.name),
            SupplierField::Address => FieldValue::Text(&self.address),
            SupplierField::Zip => FieldValue::Text(&self.zip),
            SupplierField::City => FieldValue::Text(&self.city),
            SupplierField::Country => FieldValue::Text(&self.country),
        }
    }
}

impl CatalogEntity for Supplier {
    const NAME: &'static str = "Supplier";

    fn id(&self) -> i64 {
        self.id
    }
}

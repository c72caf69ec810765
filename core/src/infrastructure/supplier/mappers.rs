use crate::domain::supplier::entities::Supplier;
use crate::entity::suppliers::Model as SupplierModel;

impl From<SupplierModel> for Supplier {
    fn from(model: SupplierModel) -> Self {
        Supplier {
            id: model.id,
            name: model.name,
            address: model.address,
            zip: model.zip,
            city: model.city,
            country: model.country,
        }
    }
}

use crate::domain::{activity::entities::Activity, supplier::entities::Supplier};
use crate::entity::{activities::Model as ActivityModel, suppliers::Model as SupplierModel};

impl From<(ActivityModel, Option<SupplierModel>)> for Activity {
    fn from((model, supplier): (ActivityModel, Option<SupplierModel>)) -> Self {
        Activity {
            id: model.id,
            title: model.title,
            price: model.price,
            currency: model.currency,
            rating: model.rating,
            special_offer: model.special_offer,
            supplier: supplier.map(Supplier::from),
        }
    }
}

use crate::domain::{
    activity::{entities::Activity, value_objects::ActivityDto},
    search::ports::DtoMapper,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityMapper;

impl DtoMapper for ActivityMapper {
    type Entity = Activity;
    type Dto = ActivityDto;

    fn to_dto(&self, activity: &Activity) -> ActivityDto {
        ActivityDto {
            id: activity.id,
            title: activity.title.clone(),
            price: activity.price,
            currency: activity.currency.clone(),
            rating: activity.rating,
            special_offer: activity.special_offer,
            supplier_name: activity
                .supplier
                .as_ref()
                .map(|supplier| supplier.name.clone())
                .unwrap_or_default(),
        }
    }
}

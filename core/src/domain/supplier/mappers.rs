use crate::domain::{
    search::ports::DtoMapper,
    supplier::{entities::Supplier, value_objects::SupplierDto},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierMapper;

impl DtoMapper for SupplierMapper {
    type Entity = Supplier;
    type Dto = SupplierDto;

    fn to_dto(&self, supplier: &Supplier) -> SupplierDto {
        SupplierDto {
            id: supplier.id,
            name: supplier.name.clone(),
            address: supplier.address.clone(),
            zip: supplier.zip.clone(),
            city: supplier.city.clone(),
            country: supplier.country.clone(),
        }
    }
}

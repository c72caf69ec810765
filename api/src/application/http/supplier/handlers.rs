pub mod get_supplier;
pub mod get_suppliers;
pub mod search_suppliers;
